use crate::commands::{index, CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::{RexError, Result};
use crate::model::{Record, RecordContent};
use crate::records::RecordStore;
use crate::templates::{TemplateKind, TemplateSource};
use std::fs::File;
use tracing::info;

/// Allocate the next ID, render the record template into `<id>-<slug>.md` and, when
/// `adr.add_to_index` is set, rebuild the index.
pub fn run(settings: &Settings, content: RecordContent) -> Result<CmdResult> {
    let store = RecordStore::from_settings(settings);
    let source = TemplateSource::resolve(settings);

    let id = store.next_id()?;
    let record = Record::new(id, content);
    let template = source.prepare(TemplateKind::Record)?;

    let path = store.record_path(&record.file_name());
    {
        let mut file = File::create(&path).map_err(|source| RexError::FileCreate {
            path: path.clone(),
            source,
        })?;
        template.render_to(&record, &mut file)?;
    }
    info!(id, path = %path.display(), "created record");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created ADR {}: {}",
        id,
        path.display()
    )));
    result.add_written(path);

    if settings.adr.add_to_index {
        result.merge(index::rebuild(&store, &source, true)?);
    }

    Ok(result.with_record(record))
}
