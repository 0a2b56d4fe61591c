//! # Configuration
//!
//! Rex reads its settings from a YAML file, `.rex.yaml` in the current directory unless
//! `--config` (or `REX_CONFIG`) points elsewhere. The file is parsed once per command
//! into an immutable [`Settings`] value that is passed down explicitly; nothing reads
//! configuration from ambient state.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `adr.path` | `docs/adr/` | Directory holding records and the index |
//! | `adr.index_page` | `README.md` | Index file name inside `adr.path` |
//! | `adr.add_to_index` | `true` | Rebuild the index after `rex create` |
//! | `templates.enabled` | `false` | Use templates from `templates.path` instead of the embedded ones |
//! | `templates.path` | `templates/` | Directory of custom templates |
//! | `templates.adr.default` | `adr.tmpl` | Custom record template file name |
//! | `templates.adr.index` | `index.tmpl` | Custom index template file name |
//! | `enable_github_pages` | `false` | Also scaffold a Jekyll site around the records |
//! | `pages.*` | see [`PagesSettings`] | Site file and layout names |
//! | `extras`, `extra_pages.*` | `false` | Auxiliary install/usage pages |
//!
//! Every key is optional; missing keys fall back to the defaults above. Relative paths
//! are resolved against the process working directory.
//!
//! ## First Run
//!
//! Writing the defaults when no settings file exists is a command, see
//! [`crate::commands::config::ensure_config_file`].

use crate::error::{RexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILENAME: &str = ".rex.yaml";

/// Directory inside the docs root that holds the Jekyll layouts.
pub const LAYOUTS_DIR: &str = "_layouts";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub adr: AdrSettings,
    pub templates: TemplateSettings,
    pub enable_github_pages: bool,
    pub pages: PagesSettings,
    pub extras: bool,
    pub extra_pages: ExtraPagesSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdrSettings {
    pub path: String,
    pub index_page: String,
    pub add_to_index: bool,
}

impl Default for AdrSettings {
    fn default() -> Self {
        Self {
            path: "docs/adr/".to_string(),
            index_page: "README.md".to_string(),
            add_to_index: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateSettings {
    pub enabled: bool,
    pub path: String,
    pub adr: AdrTemplateNames,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "templates/".to_string(),
            adr: AdrTemplateNames::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdrTemplateNames {
    pub default: String,
    pub index: String,
}

impl Default for AdrTemplateNames {
    fn default() -> Self {
        Self {
            default: "adr.tmpl".to_string(),
            index: "index.tmpl".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PagesSettings {
    /// Site landing page, written to the docs root.
    pub index: String,
    pub web: PagesWebSettings,
}

impl Default for PagesSettings {
    fn default() -> Self {
        Self {
            index: "index.md".to_string(),
            web: PagesWebSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PagesWebSettings {
    /// Jekyll config file name.
    pub config: String,
    pub layout: PagesLayoutSettings,
}

impl Default for PagesWebSettings {
    fn default() -> Self {
        Self {
            config: "_config.yml".to_string(),
            layout: PagesLayoutSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PagesLayoutSettings {
    pub adr: String,
    pub default: String,
}

impl Default for PagesLayoutSettings {
    fn default() -> Self {
        Self {
            adr: "adr.html".to_string(),
            default: "default.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtraPagesSettings {
    pub install: String,
    pub usage: String,
}

impl Default for ExtraPagesSettings {
    fn default() -> Self {
        Self {
            install: "install.md".to_string(),
            usage: "usage.md".to_string(),
        }
    }
}

/// How much of the documentation tree `rex init` lays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode<'a> {
    /// Records, index and templates only.
    Plain,
    /// Records plus a Jekyll site rooted at the docs directory.
    GithubPages {
        pages: &'a PagesSettings,
        extras: Option<&'a ExtraPagesSettings>,
    },
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RexError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml(&content)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn adr_dir(&self) -> PathBuf {
        PathBuf::from(&self.adr.path)
    }

    pub fn index_path(&self) -> PathBuf {
        self.adr_dir().join(&self.adr.index_page)
    }

    pub fn template_dir(&self) -> PathBuf {
        PathBuf::from(&self.templates.path)
    }

    /// The directory above `adr.path`; site files live here.
    pub fn docs_dir(&self) -> PathBuf {
        match self.adr_dir().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn layout_mode(&self) -> LayoutMode<'_> {
        if self.enable_github_pages {
            LayoutMode::GithubPages {
                pages: &self.pages,
                extras: self.extras.then_some(&self.extra_pages),
            }
        } else {
            LayoutMode::Plain
        }
    }
}
