//! # Record Directory
//!
//! [`RecordStore`] is the read side of the ADR directory: it lists record files,
//! recovers [`IndexEntry`] values from their names and allocates the next ID.
//!
//! The directory is the single source of truth. Nothing is cached between calls and
//! no lock is taken, so two concurrent `rex create` runs can compute the same ID.
//!
//! ## What counts as a record
//!
//! Every regular `*.md` file except the configured index page. Anything else
//! (sub-directories, dotfiles, other extensions) is skipped and logged at debug level. A `*.md`
//! file whose name does not start with `<number>-` is an error rather than a silent
//! skip, because it usually means a hand-made file that would otherwise vanish from
//! the index.

use crate::config::Settings;
use crate::error::{RexError, Result};
use crate::model::{parse_record_name, IndexEntry, RECORD_EXT};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct RecordStore {
    root: PathBuf,
    index_page: String,
}

impl RecordStore {
    pub fn new(root: impl Into<PathBuf>, index_page: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index_page: index_page.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.adr_dir(), settings.adr.index_page.clone())
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_page)
    }

    pub fn record_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Names of all record files, in directory order.
    pub fn file_names(&self) -> Result<Vec<String>> {
        let read_err = |source| RexError::DirectoryRead {
            path: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                warn!(name = ?file_name, "skipping non UTF-8 file name");
                continue;
            };

            if name == self.index_page {
                continue;
            }

            let is_file = entry.file_type().map_err(read_err)?.is_file();
            if !is_file || name.starts_with('.') || !name.ends_with(RECORD_EXT) {
                debug!(name, "skipping non-record entry");
                continue;
            }

            names.push(name.to_string());
        }

        debug!(root = %self.root.display(), count = names.len(), "scanned records");
        Ok(names)
    }

    /// All records as index entries, sorted by ID then title.
    pub fn entries(&self) -> Result<Vec<IndexEntry>> {
        let mut entries = self
            .file_names()?
            .iter()
            .map(|name| parse_record_name(name))
            .collect::<Result<Vec<_>>>()?;
        entries.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.title.cmp(&b.title)));
        Ok(entries)
    }

    /// One more than the highest ID present, or 1 for an empty directory.
    pub fn next_id(&self) -> Result<u32> {
        let entries = self
            .file_names()?
            .iter()
            .map(|name| parse_record_name(name))
            .collect::<Result<Vec<_>>>()?;

        let id = match entries.iter().max_by_key(|entry| entry.id) {
            None => 1,
            Some(last) => last
                .id
                .checked_add(1)
                .ok_or_else(|| RexError::IdOverflow(last.file.clone()))?,
        };
        debug!(root = %self.root.display(), id, "allocated record id");
        Ok(id)
    }
}
