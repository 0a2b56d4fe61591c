use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RexError {
    #[error("cannot read ADR directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot create file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("failed to render template {name}: {source}")]
    TemplateRender {
        name: String,
        source: minijinja::Error,
    },

    #[error("template file exists at {}, to overwrite please pass --force", .0.display())]
    TemplateExists(PathBuf),

    #[error("index file found at {}, to overwrite please pass --force", .0.display())]
    IndexExists(PathBuf),

    #[error("config file found at {}, to overwrite please pass --force", .0.display())]
    ConfigExists(PathBuf),

    #[error("malformed record name {0:?}: expected <id>-<title>.md")]
    MalformedRecordName(String),

    #[error("no ID left after {0}: record IDs are limited to {max}", max = u32::MAX)]
    IdOverflow(String),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RexError>;
