//! GitHub Pages scaffolding.
//!
//! In [`LayoutMode::GithubPages`] the docs root (the parent of `adr.path`) becomes a
//! Jekyll site: a landing page, a `_config.yml`, two layouts and, with `extras`, an
//! install and a usage page. These files are meant to be edited by hand afterwards, so
//! an existing one is reported and skipped instead of failing the whole run.

use crate::commands::helpers::{ensure_dir, write_if_absent_or_forced};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::{LayoutMode, Settings, LAYOUTS_DIR};
use crate::error::{RexError, Result};
use crate::templates::embedded;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize)]
struct SiteConfig {
    baseurl: String,
    defaults: Vec<SiteDefault>,
}

#[derive(Debug, Serialize)]
struct SiteDefault {
    scope: SiteScope,
    values: SiteValues,
}

#[derive(Debug, Serialize)]
struct SiteScope {
    path: String,
}

#[derive(Debug, Serialize)]
struct SiteValues {
    layout: String,
}

/// The Jekyll `_config.yml` for `project`: served under `/<project>`, with every page
/// in the ADR directory using the ADR layout.
pub fn site_config(settings: &Settings, project: &str) -> Result<String> {
    let records_dir = settings
        .adr_dir()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let layout = Path::new(&settings.pages.web.layout.adr)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| settings.pages.web.layout.adr.clone());

    let config = SiteConfig {
        baseurl: format!("/{}", project),
        defaults: vec![SiteDefault {
            scope: SiteScope { path: records_dir },
            values: SiteValues { layout },
        }],
    };
    Ok(serde_yaml::to_string(&config)?)
}

pub fn install(settings: &Settings, project: &str, force: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let (pages, extras) = match settings.layout_mode() {
        LayoutMode::Plain => {
            result.add_message(CmdMessage::info(
                "GitHub Pages is disabled (enable_github_pages: false), skipping site files",
            ));
            return Ok(result);
        }
        LayoutMode::GithubPages { pages, extras } => (pages, extras),
    };

    let docs = settings.docs_dir();
    let layouts = docs.join(LAYOUTS_DIR);
    ensure_dir(&layouts)?;

    let mut files: Vec<(PathBuf, String)> = vec![
        (
            docs.join(&pages.index),
            embedded::read(embedded::PAGES_INDEX)?.to_string(),
        ),
        (docs.join(&pages.web.config), site_config(settings, project)?),
        (
            layouts.join(&pages.web.layout.default),
            embedded::read(embedded::PAGES_LAYOUT_DEFAULT)?.to_string(),
        ),
        (
            layouts.join(&pages.web.layout.adr),
            embedded::read(embedded::PAGES_LAYOUT_ADR)?.to_string(),
        ),
    ];
    if let Some(extra) = extras {
        files.push((
            docs.join(&extra.install),
            embedded::read(embedded::PAGES_INSTALL)?.to_string(),
        ));
        files.push((
            docs.join(&extra.usage),
            embedded::read(embedded::PAGES_USAGE)?.to_string(),
        ));
    }

    for (path, body) in files {
        match write_if_absent_or_forced(&path, body.as_bytes(), force, RexError::TemplateExists) {
            Ok(outcome) => {
                result.add_message(CmdMessage::success(format!(
                    "{} {}",
                    outcome.verb(),
                    path.display()
                )));
                result.add_written(path);
            }
            Err(RexError::TemplateExists(existing)) => {
                debug!(path = %existing.display(), "site file exists");
                result.add_message(CmdMessage::warning(format!(
                    "{} already exists, skipping (pass --force to overwrite)",
                    existing.display()
                )));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(result)
}
