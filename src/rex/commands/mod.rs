//! # Commands
//!
//! One module per user-facing operation. Every command takes an explicit [`Settings`]
//! reference (or the pieces it needs), performs its filesystem transform and returns a
//! [`CmdResult`] describing what happened:
//!
//! - files written, in order, in `written`
//! - records scanned, in `entries` (listing, index rebuild)
//! - the record just created, in `record`
//! - human-readable notes, in `messages`
//!
//! Commands never print. Turning a [`CmdResult`] into terminal output is the CLI's job.
//!
//! [`Settings`]: crate::config::Settings

use crate::config::Settings;
use crate::model::{IndexEntry, Record};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod helpers;
pub mod index;
pub mod layout;
pub mod list;
pub mod pages;
pub mod templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub written: Vec<PathBuf>,
    pub entries: Vec<IndexEntry>,
    pub record: Option<Record>,
    pub config: Option<Settings>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_written(&mut self, path: PathBuf) {
        self.written.push(path);
    }

    /// Fold another command's outcome into this one, keeping order.
    pub fn merge(&mut self, other: CmdResult) {
        self.written.extend(other.written);
        self.messages.extend(other.messages);
        if !other.entries.is_empty() {
            self.entries = other.entries;
        }
        if other.record.is_some() {
            self.record = other.record;
        }
        if other.config.is_some() {
            self.config = other.config;
        }
    }

    pub fn with_entries(mut self, entries: Vec<IndexEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_config(mut self, config: Settings) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
