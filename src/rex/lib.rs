//! # Rex Architecture
//!
//! Rex keeps Architecture Decision Records (ADRs) in a repository: it numbers and
//! renders new records from a template, rebuilds the index page that lists them and can
//! scaffold a GitHub Pages site around them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints results, owns exit codes        │
//! │  - Runs the first-run bootstrap and installs logging        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns one immutable Settings snapshot                     │
//! │  - Dispatches to commands, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create, index, list, layout (init), templates, pages     │
//! │  - All guarded writes go through helpers::write_if_...      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (records.rs, templates/, model.rs, config.rs)       │
//! │  - Directory scan and ID allocation                         │
//! │  - Embedded or external template source                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state is the filesystem. Every invocation loads settings, does one thing and
//! exits; there is no cache, lock or background work.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`config`]: Settings file, defaults and first-run bootstrap
//! - [`records`]: Record directory scan and next-ID allocation
//! - [`templates`]: Template resolution and rendering
//! - [`model`]: Record, index entry and file name rules
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod records;
pub mod templates;
