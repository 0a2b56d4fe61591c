//! Core record types.
//!
//! A record never lives as a structured object on disk: its only durable form is the
//! rendered markdown file, whose name encodes the ID and a slug of the title
//! (`<id>-<slug>.md`). [`IndexEntry`] is the reverse mapping, recovered from file names.
//!
//! The serde field names (`Content`, `ID`, `Title`, `Adrs`, `Id`, ...) are the
//! placeholders templates see, so they are part of the template contract.

use crate::error::{RexError, Result};
use serde::Serialize;

pub const RECORD_EXT: &str = ".md";

/// Title used as the heading of every generated index page.
pub const INDEX_TITLE: &str = "ADR Index";

/// The user-supplied payload of a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordContent {
    pub title: String,
    pub author: String,
    pub status: String,
    pub date: String,
}

impl RecordContent {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        status: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            status: status.into(),
            date: date.into(),
        }
    }
}

/// Render context for the record template.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    #[serde(rename = "Content")]
    pub content: RecordContent,
    #[serde(rename = "ID")]
    pub id: u32,
}

impl Record {
    pub fn new(id: u32, content: RecordContent) -> Self {
        Self { content, id }
    }

    pub fn file_name(&self) -> String {
        record_file_name(self.id, &self.content.title)
    }
}

/// One row of the index, derived from a record file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexEntry {
    pub id: u32,
    pub title: String,
    pub file: String,
}

impl IndexEntry {
    /// The slug with hyphens turned back into spaces.
    pub fn display_title(&self) -> String {
        self.title.replace('-', " ")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexContent {
    pub title: String,
    pub adrs: Vec<IndexEntry>,
}

/// Render context for the index template.
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    #[serde(rename = "Content")]
    pub content: IndexContent,
}

impl IndexPage {
    pub fn new(adrs: Vec<IndexEntry>) -> Self {
        Self {
            content: IndexContent {
                title: INDEX_TITLE.to_string(),
                adrs,
            },
        }
    }
}

/// Collapses runs of whitespace into single hyphens and trims the ends.
pub fn slugify(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("-")
}

pub fn record_file_name(id: u32, title: &str) -> String {
    format!("{}-{}{}", id, slugify(title), RECORD_EXT)
}

/// Splits a record file name on its first hyphen into ID and title.
///
/// Extra hyphens stay in the title verbatim: `2---222.md` is ID 2, title `--222`.
pub fn parse_record_name(file_name: &str) -> Result<IndexEntry> {
    let (prefix, rest) = file_name
        .split_once('-')
        .ok_or_else(|| RexError::MalformedRecordName(file_name.to_string()))?;

    let id: u32 = prefix
        .parse()
        .map_err(|_| RexError::MalformedRecordName(file_name.to_string()))?;

    let title = rest.strip_suffix(RECORD_EXT).unwrap_or(rest);

    Ok(IndexEntry {
        id,
        title: title.to_string(),
        file: file_name.to_string(),
    })
}
