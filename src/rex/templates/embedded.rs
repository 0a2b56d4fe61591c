//! Template and site files compiled into the binary.
//!
//! Files are addressed by logical name (`default/adr.tmpl`, `pages/index.md`, ...),
//! mirroring their location under `src/rex/templates/`.

use crate::error::{RexError, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub const RECORD_TEMPLATE: &str = "default/adr.tmpl";
pub const INDEX_TEMPLATE: &str = "default/index.tmpl";
pub const INDEX_README_TEMPLATE: &str = "default/index_readme.tmpl";

pub const PAGES_INDEX: &str = "pages/index.md";
pub const PAGES_LAYOUT_DEFAULT: &str = "pages/default.html";
pub const PAGES_LAYOUT_ADR: &str = "pages/adr.html";
pub const PAGES_INSTALL: &str = "pages/install.md";
pub const PAGES_USAGE: &str = "pages/usage.md";

static FILES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (RECORD_TEMPLATE, include_str!("default/adr.tmpl")),
        (INDEX_TEMPLATE, include_str!("default/index.tmpl")),
        (
            INDEX_README_TEMPLATE,
            include_str!("default/index_readme.tmpl"),
        ),
        (PAGES_INDEX, include_str!("pages/index.md")),
        (PAGES_LAYOUT_DEFAULT, include_str!("pages/default.html")),
        (PAGES_LAYOUT_ADR, include_str!("pages/adr.html")),
        (PAGES_INSTALL, include_str!("pages/install.md")),
        (PAGES_USAGE, include_str!("pages/usage.md")),
    ])
});

pub fn read(name: &str) -> Result<&'static str> {
    FILES
        .get(name)
        .copied()
        .ok_or_else(|| RexError::TemplateNotFound(name.to_string()))
}
