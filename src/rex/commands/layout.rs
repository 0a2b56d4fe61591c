use crate::commands::helpers::ensure_dir;
use crate::commands::{index, pages, templates, CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::{RexError, Result};

/// Which `rex init` steps to run. All flags unset means every step that applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub directories: bool,
    pub index: bool,
    pub templates: bool,
    pub pages: bool,
}

impl LayoutOptions {
    pub fn is_empty(&self) -> bool {
        !(self.directories || self.index || self.templates || self.pages)
    }

    /// Expand an empty selection against `settings`: templates only when custom
    /// templates are enabled, site files only in GitHub Pages mode.
    pub fn resolve(self, settings: &Settings) -> Self {
        if !self.is_empty() {
            return self;
        }
        Self {
            directories: true,
            index: true,
            templates: settings.templates.enabled,
            pages: settings.enable_github_pages,
        }
    }
}

/// Create the storage directory and, with custom templates enabled, the template
/// directory and its default templates.
pub fn ensure_layout(settings: &Settings, force: bool) -> Result<CmdResult> {
    let mut result = create_directories(settings)?;
    if settings.templates.enabled {
        result.merge(templates::install(settings, force)?);
    }
    Ok(result)
}

fn create_directories(settings: &Settings) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut dirs = vec![settings.adr_dir()];
    if settings.templates.enabled {
        dirs.push(settings.template_dir());
    }
    for dir in dirs {
        ensure_dir(&dir)?;
        result.add_message(CmdMessage::info(format!("Directory ready: {}", dir.display())));
    }
    Ok(result)
}

/// Run the selected steps in order: directories, templates, site files, index.
///
/// `project` names the site for GitHub Pages. An index that already exists is kept
/// with a warning unless `force` is set.
pub fn run(
    settings: &Settings,
    options: LayoutOptions,
    project: &str,
    force: bool,
) -> Result<CmdResult> {
    let steps = options.resolve(settings);
    let mut result = CmdResult::default();

    if steps.directories {
        result.merge(create_directories(settings)?);
    }
    if steps.templates {
        result.merge(templates::install(settings, force)?);
    }
    if steps.pages {
        result.merge(pages::install(settings, project, force)?);
    }
    if steps.index {
        match index::run(settings, force) {
            Ok(indexed) => result.merge(indexed),
            Err(RexError::IndexExists(path)) => {
                result.add_message(CmdMessage::warning(format!(
                    "{} already exists, skipping (pass --force to overwrite)",
                    path.display()
                )));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn settings_in(temp: &TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.adr.path = temp
            .path()
            .join("docs")
            .join("adr")
            .to_string_lossy()
            .into_owned();
        settings.templates.path = temp.path().join("templates").to_string_lossy().into_owned();
        settings
    }

    #[test]
    fn test_resolve_empty_selection() {
        let mut settings = Settings::default();
        let steps = LayoutOptions::default().resolve(&settings);
        assert!(steps.directories && steps.index);
        assert!(!steps.templates && !steps.pages);

        settings.templates.enabled = true;
        settings.enable_github_pages = true;
        let steps = LayoutOptions::default().resolve(&settings);
        assert!(steps.templates && steps.pages);
    }

    #[test]
    fn test_explicit_selection_is_kept() {
        let options = LayoutOptions {
            index: true,
            ..Default::default()
        };
        assert_eq!(options.resolve(&Settings::default()), options);
    }

    #[test]
    fn test_ensure_layout_plain() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);

        ensure_layout(&settings, false).unwrap();
        assert!(settings.adr_dir().is_dir());
        assert!(!settings.template_dir().exists());
    }

    #[test]
    fn test_ensure_layout_is_repeatable() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        ensure_layout(&settings, false).unwrap();
        ensure_layout(&settings, false).unwrap();
    }

    #[test]
    fn test_ensure_layout_existing_template_blocks_index_template() {
        let temp = TempDir::new().unwrap();
        let mut settings = settings_in(&temp);
        settings.templates.enabled = true;
        let dir = settings.template_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("adr.tmpl"), "mine").unwrap();

        let err = ensure_layout(&settings, false).unwrap_err();
        assert!(matches!(err, RexError::TemplateExists(_)));
        assert!(!dir.join("index.tmpl").exists());
    }

    #[test]
    fn test_run_all_creates_dirs_and_index() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);

        let result = run(&settings, LayoutOptions::default(), "demo", false).unwrap();
        assert!(settings.adr_dir().is_dir());
        assert!(settings.index_path().is_file());
        assert_eq!(result.written, vec![settings.index_path()]);
    }

    #[test]
    fn test_run_twice_keeps_index_with_warning() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        run(&settings, LayoutOptions::default(), "demo", false).unwrap();

        let again = run(&settings, LayoutOptions::default(), "demo", false).unwrap();
        assert!(again.written.is_empty());
        assert!(again.has_warnings());
    }

    #[test]
    fn test_run_with_pages() {
        let temp = TempDir::new().unwrap();
        let mut settings = settings_in(&temp);
        settings.enable_github_pages = true;

        run(&settings, LayoutOptions::default(), "demo", false).unwrap();
        let docs = temp.path().join("docs");
        assert!(docs.join("_config.yml").is_file());
        assert!(docs.join("_layouts").join("adr.html").is_file());
    }

    #[test]
    fn test_explicit_templates_when_disabled_warns() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        let options = LayoutOptions {
            templates: true,
            ..Default::default()
        };

        let result = run(&settings, options, "demo", false).unwrap();
        assert!(result.has_warnings());
        assert!(!settings.adr_dir().exists());
    }
}
