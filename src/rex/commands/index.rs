//! Index Builder.
//!
//! The index is always recomputed from the record files on disk, never updated
//! incrementally. Rows are sorted by ID so the page reads the same on every platform.

use crate::commands::helpers::{ensure_writable, write_if_absent_or_forced};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::{RexError, Result};
use crate::model::IndexPage;
use crate::records::RecordStore;
use crate::templates::{embedded, TemplateKind, TemplateSource};
use std::fs::File;
use tracing::debug;

/// Render the index for every record in `store`.
///
/// With `overwrite` unset an existing index is an [`RexError::IndexExists`] and nothing
/// is written.
pub fn rebuild(store: &RecordStore, source: &TemplateSource, overwrite: bool) -> Result<CmdResult> {
    let entries = store.entries()?;
    let path = store.index_path();

    let outcome = ensure_writable(&path, overwrite, RexError::IndexExists)?;
    let template = source.prepare(TemplateKind::Index)?;

    let mut file = File::create(&path).map_err(|source| RexError::FileCreate {
        path: path.clone(),
        source,
    })?;
    template.render_to(IndexPage::new(entries.clone()), &mut file)?;
    debug!(path = %path.display(), rows = entries.len(), "rendered index");

    let mut result = CmdResult::default().with_entries(entries);
    result.add_message(CmdMessage::success(format!(
        "{} index {} ({} records)",
        outcome.verb(),
        path.display(),
        result.entries.len()
    )));
    result.add_written(path);
    Ok(result)
}

pub fn run(settings: &Settings, overwrite: bool) -> Result<CmdResult> {
    let store = RecordStore::from_settings(settings);
    let source = TemplateSource::resolve(settings);
    rebuild(&store, &source, overwrite)
}

/// Write the static header-only index page, for projects with no records yet.
pub fn write_placeholder(settings: &Settings, force: bool) -> Result<CmdResult> {
    let path = settings.index_path();
    let body = embedded::read(embedded::INDEX_README_TEMPLATE)?;
    let outcome = write_if_absent_or_forced(&path, body.as_bytes(), force, RexError::IndexExists)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} placeholder index {}",
        outcome.verb(),
        path.display()
    )));
    result.add_written(path);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn settings_in(temp: &TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.adr.path = temp.path().join("adr").to_string_lossy().into_owned();
        fs::create_dir_all(settings.adr_dir()).unwrap();
        settings
    }

    fn touch(settings: &Settings, name: &str) {
        fs::write(settings.adr_dir().join(name), "").unwrap();
    }

    #[test]
    fn test_rebuild_lists_records_in_id_order() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        touch(&settings, "2-test2.md");
        touch(&settings, "1-test1.md");

        let result = run(&settings, false).unwrap();
        let ids: Vec<u32> = result.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let body = fs::read_to_string(settings.index_path()).unwrap();
        let first = body.find("| 1 | test1 |").unwrap();
        let second = body.find("| 2 | test2 |").unwrap();
        assert!(first < second);
        assert!(body.starts_with("# ADR Index\n"));
    }

    #[test]
    fn test_rebuild_refuses_existing_index() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        touch(&settings, "1-test1.md");
        fs::write(settings.index_path(), "hand written").unwrap();

        let err = run(&settings, false).unwrap_err();
        assert!(matches!(err, RexError::IndexExists(_)));
        assert!(err.to_string().contains("--force"));
        assert_eq!(
            fs::read_to_string(settings.index_path()).unwrap(),
            "hand written"
        );
    }

    #[test]
    fn test_rebuild_overwrite_replaces_index() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        touch(&settings, "1-test1.md");
        fs::write(settings.index_path(), "hand written").unwrap();

        let result = run(&settings, true).unwrap();
        assert_eq!(result.written, vec![settings.index_path()]);
        let body = fs::read_to_string(settings.index_path()).unwrap();
        assert!(body.contains("[1-test1.md](1-test1.md)"));
        assert!(!body.contains("hand written"));
    }

    #[test]
    fn test_rebuild_keeps_extra_hyphens_in_titles() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        touch(&settings, "2---222.md");

        let result = run(&settings, false).unwrap();
        assert_eq!(result.entries[0].title, "--222");
    }

    #[test]
    fn test_rebuild_with_malformed_record_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        touch(&settings, "notes.md");

        let err = run(&settings, false).unwrap_err();
        assert!(matches!(err, RexError::MalformedRecordName(_)));
        assert!(!settings.index_path().exists());
    }

    #[test]
    fn test_rebuild_uses_external_index_template() {
        let temp = TempDir::new().unwrap();
        let mut settings = settings_in(&temp);
        let tmpl_dir = temp.path().join("tmpl");
        fs::create_dir_all(&tmpl_dir).unwrap();
        fs::write(
            tmpl_dir.join("index.tmpl"),
            "{% for adr in Content.Adrs %}{{ adr.Id }};{% endfor %}",
        )
        .unwrap();
        settings.templates.enabled = true;
        settings.templates.path = tmpl_dir.to_string_lossy().into_owned();
        touch(&settings, "1-a.md");
        touch(&settings, "3-c.md");

        run(&settings, false).unwrap();
        assert_eq!(fs::read_to_string(settings.index_path()).unwrap(), "1;3;");
    }

    #[test]
    fn test_placeholder_is_guarded() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);

        write_placeholder(&settings, false).unwrap();
        let body = fs::read_to_string(settings.index_path()).unwrap();
        assert!(body.starts_with("# ADR List"));

        let err = write_placeholder(&settings, false).unwrap_err();
        assert!(matches!(err, RexError::IndexExists(_)));
        write_placeholder(&settings, true).unwrap();
    }
}
