use crate::commands::helpers::write_if_absent_or_forced;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::{RexError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Create { force: bool },
}

pub fn show(settings: &Settings) -> Result<CmdResult> {
    Ok(CmdResult::default().with_config(settings.clone()))
}

/// Outcome of the first-run check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrap {
    Existing,
    /// A default settings file was just written; the command should stop here.
    Created(PathBuf),
}

/// Write the default settings to `path` if nothing is there yet.
pub fn ensure_config_file<P: AsRef<Path>>(path: P) -> Result<Bootstrap> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(Bootstrap::Existing);
    }
    write_default_config(path, false)?;
    Ok(Bootstrap::Created(path.to_path_buf()))
}

/// Write the default settings to `path`, refusing to replace a file unless `force`.
pub fn write_default_config<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path = path.as_ref();
    let yaml = Settings::default().to_yaml()?;
    write_if_absent_or_forced(path, yaml.as_bytes(), force, RexError::ConfigExists)?;
    Ok(())
}

/// Write the default settings to `path`; an existing file needs `force`.
pub fn create(path: &Path, force: bool) -> Result<CmdResult> {
    write_default_config(path, force)?;
    let mut result = CmdResult::default().with_config(Settings::default());
    result.add_message(CmdMessage::success(format!(
        "Wrote default settings to {}",
        path.display()
    )));
    result.add_written(path.to_path_buf());
    Ok(result)
}
