//! # API Facade
//!
//! [`RexApi`] is the single entry point the CLI talks to. It owns the immutable
//! [`Settings`] snapshot for one invocation and dispatches to `commands/*.rs`.
//!
//! The facade holds no logic of its own beyond argument shaping: it never prints,
//! never exits and never reads configuration from anywhere but the snapshot it was
//! built with.

use crate::commands;
use crate::config::Settings;
use crate::error::Result;
use crate::model::RecordContent;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::layout::LayoutOptions;
pub use crate::commands::list::ListOrder;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct RexApi {
    settings: Settings,
    config_path: PathBuf,
    project: String,
}

impl RexApi {
    /// `project` names the GitHub Pages site (`baseurl: /<project>`).
    pub fn new(
        settings: Settings,
        config_path: impl Into<PathBuf>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            config_path: config_path.into(),
            project: project.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn create_record(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        status: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<CmdResult> {
        let content = RecordContent::new(title, author, status, date);
        commands::create::run(&self.settings, content)
    }

    pub fn rebuild_index(&self, overwrite: bool) -> Result<CmdResult> {
        commands::index::run(&self.settings, overwrite)
    }

    pub fn write_empty_index(&self, force: bool) -> Result<CmdResult> {
        commands::index::write_placeholder(&self.settings, force)
    }

    pub fn list_records(&self, order: ListOrder, limit: Option<usize>) -> Result<CmdResult> {
        commands::list::run(&self.settings, order, limit)
    }

    pub fn ensure_layout(&self, force: bool) -> Result<CmdResult> {
        commands::layout::ensure_layout(&self.settings, force)
    }

    pub fn init(&self, options: LayoutOptions, force: bool) -> Result<CmdResult> {
        commands::layout::run(&self.settings, options, &self.project, force)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        match action {
            ConfigAction::Show => commands::config::show(&self.settings),
            ConfigAction::Create { force } => commands::config::create(&self.config_path, force),
        }
    }
}
