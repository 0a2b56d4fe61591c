use crate::commands::helpers::{ensure_dir, ensure_writable, write_if_absent_or_forced};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::{RexError, Result};
use crate::templates::embedded;
use std::path::PathBuf;

/// Copy the embedded record and index templates into `templates.path`, under the file
/// names the settings expect, so they can be edited.
///
/// Both targets are checked before either is written: an existing record template
/// without `force` leaves the index template untouched.
pub fn install(settings: &Settings, force: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !settings.templates.enabled {
        result.add_message(CmdMessage::warning(
            "Custom templates are disabled (templates.enabled: false), skipping",
        ));
        return Ok(result);
    }

    let dir = settings.template_dir();
    ensure_dir(&dir)?;

    let targets: [(PathBuf, &str); 2] = [
        (
            dir.join(&settings.templates.adr.default),
            embedded::RECORD_TEMPLATE,
        ),
        (
            dir.join(&settings.templates.adr.index),
            embedded::INDEX_TEMPLATE,
        ),
    ];

    for (path, _) in &targets {
        ensure_writable(path, force, RexError::TemplateExists)?;
    }

    for (path, name) in targets {
        let body = embedded::read(name)?;
        let outcome =
            write_if_absent_or_forced(&path, body.as_bytes(), force, RexError::TemplateExists)?;
        result.add_message(CmdMessage::success(format!(
            "{} template {}",
            outcome.verb(),
            path.display()
        )));
        result.add_written(path);
    }

    Ok(result)
}
