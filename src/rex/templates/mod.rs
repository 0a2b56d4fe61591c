//! # Template Resolution
//!
//! Records and the index are rendered from one of two template sets:
//!
//! - **Embedded** (default): the templates compiled into the binary, see [`embedded`].
//! - **External**: files under `templates.path`, selected when `templates.enabled` is set.
//!
//! [`TemplateSource::resolve`] picks exactly one of them from a [`Settings`] snapshot.
//! Both variants answer the same two questions, "what are the bytes of this template"
//! ([`TemplateSource::read`]) and "compile it for rendering"
//! ([`TemplateSource::prepare`]), so callers never branch on the source.
//!
//! Templates use Jinja syntax (via minijinja) and are rendered in strict mode: a
//! reference to a field the context does not carry is an error, not an empty string.
//! Nothing is cached; every call reads the template again.

use crate::config::Settings;
use crate::error::{RexError, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub mod embedded;

/// The two templates every source provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Record,
    Index,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    External {
        root: PathBuf,
        record: String,
        index: String,
    },
}

impl TemplateSource {
    pub fn resolve(settings: &Settings) -> Self {
        if settings.templates.enabled {
            TemplateSource::External {
                root: settings.template_dir(),
                record: settings.templates.adr.default.clone(),
                index: settings.templates.adr.index.clone(),
            }
        } else {
            TemplateSource::Embedded
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, TemplateSource::Embedded)
    }

    /// The name under which `kind` is looked up in this source.
    pub fn name(&self, kind: TemplateKind) -> String {
        match (self, kind) {
            (TemplateSource::Embedded, TemplateKind::Record) => embedded::RECORD_TEMPLATE.into(),
            (TemplateSource::Embedded, TemplateKind::Index) => embedded::INDEX_TEMPLATE.into(),
            (TemplateSource::External { record, .. }, TemplateKind::Record) => record.clone(),
            (TemplateSource::External { index, .. }, TemplateKind::Index) => index.clone(),
        }
    }

    /// Read a template by its logical name within this source.
    pub fn read(&self, name: &str) -> Result<String> {
        match self {
            TemplateSource::Embedded => embedded::read(name).map(str::to_string),
            TemplateSource::External { root, .. } => {
                let path = root.join(name);
                debug!(path = %path.display(), "reading external template");
                fs::read_to_string(&path).map_err(|source| RexError::FileRead { path, source })
            }
        }
    }

    /// Read and compile `kind`, without rendering it yet.
    pub fn prepare(&self, kind: TemplateKind) -> Result<PreparedTemplate> {
        let name = self.name(kind);
        let source = self.read(&name)?;

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        // Output is markdown; never HTML-escape, whatever the template file is called.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template_owned(name.clone(), source)
            .map_err(|source| RexError::TemplateRender {
                name: name.clone(),
                source,
            })?;

        debug!(template = %name, embedded = self.is_embedded(), "compiled template");
        Ok(PreparedTemplate { env, name })
    }
}

/// A compiled template, ready to be rendered any number of times.
pub struct PreparedTemplate {
    env: Environment<'static>,
    name: String,
}

impl PreparedTemplate {
    pub fn render_to<S, W>(&self, ctx: S, out: W) -> Result<()>
    where
        S: Serialize,
        W: Write,
    {
        let render_err = |source| RexError::TemplateRender {
            name: self.name.clone(),
            source,
        };
        let template = self.env.get_template(&self.name).map_err(render_err)?;
        template.render_to_write(ctx, out).map_err(render_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_record_name, IndexPage, Record, RecordContent};
    use tempfile::TempDir;

    fn external_settings(dir: &TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.templates.enabled = true;
        settings.templates.path = dir.path().to_string_lossy().into_owned();
        settings
    }

    fn render<S: Serialize>(source: &TemplateSource, kind: TemplateKind, ctx: S) -> Result<String> {
        let mut buf = Vec::new();
        source.prepare(kind)?.render_to(ctx, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    fn sample_record() -> Record {
        Record::new(
            1,
            RecordContent::new("My First Decision", "Jo", "Draft", "2025-01-01"),
        )
    }

    #[test]
    fn test_resolve_follows_enabled_flag() {
        let mut settings = Settings::default();
        assert_eq!(TemplateSource::resolve(&settings), TemplateSource::Embedded);

        settings.templates.enabled = true;
        settings.templates.path = "tmpl/".to_string();
        settings.templates.adr.default = "record.j2".to_string();
        assert_eq!(
            TemplateSource::resolve(&settings),
            TemplateSource::External {
                root: PathBuf::from("tmpl/"),
                record: "record.j2".to_string(),
                index: "index.tmpl".to_string(),
            }
        );
    }

    #[test]
    fn test_embedded_render_record() {
        let out = render(&TemplateSource::Embedded, TemplateKind::Record, sample_record()).unwrap();
        assert!(out.starts_with("# My First Decision\n"));
        assert!(out.contains("| Draft | Jo | 2025-01-01 |"));
    }

    #[test]
    fn test_embedded_render_index() {
        let page = IndexPage::new(vec![
            parse_record_name("1-test1.md").unwrap(),
            parse_record_name("2-test2.md").unwrap(),
        ]);
        let out = render(&TemplateSource::Embedded, TemplateKind::Index, page).unwrap();
        assert_eq!(
            out,
            "# ADR Index\n\n## ADRs\n\n| ID | Title | Link |\n| -- | ----- | ---- |\n\
             | 1 | test1 | [1-test1.md](1-test1.md) |\n\
             | 2 | test2 | [2-test2.md](2-test2.md) |\n"
        );
    }

    #[test]
    fn test_embedded_render_empty_index() {
        let out = render(
            &TemplateSource::Embedded,
            TemplateKind::Index,
            IndexPage::new(Vec::new()),
        )
        .unwrap();
        assert!(out.ends_with("| -- | ----- | ---- |\n"));
    }

    #[test]
    fn test_external_source_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("adr.tmpl"),
            "ADR {{ ID }}: {{ Content.Title }} by {{ Content.Author }}",
        )
        .unwrap();

        let source = TemplateSource::resolve(&external_settings(&dir));
        let out = render(&source, TemplateKind::Record, sample_record()).unwrap();
        assert_eq!(out, "ADR 1: My First Decision by Jo");
    }

    #[test]
    fn test_external_missing_file_is_file_read_error() {
        let dir = TempDir::new().unwrap();
        let source = TemplateSource::resolve(&external_settings(&dir));
        let err = source.read(&source.name(TemplateKind::Index)).unwrap_err();
        assert!(matches!(err, RexError::FileRead { .. }));
    }

    #[test]
    fn test_external_source_never_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        let source = TemplateSource::resolve(&external_settings(&dir));
        assert!(source.read(embedded::RECORD_TEMPLATE).is_err());
    }

    #[test]
    fn test_embedded_missing_is_template_not_found() {
        let err = TemplateSource::Embedded.read("default/nope.tmpl").unwrap_err();
        assert!(matches!(err, RexError::TemplateNotFound(_)));
    }

    #[test]
    fn test_syntax_error_fails_at_prepare() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("adr.tmpl"), "{% for x in %}").unwrap();

        let source = TemplateSource::resolve(&external_settings(&dir));
        let err = source.prepare(TemplateKind::Record).err().unwrap();
        assert!(matches!(err, RexError::TemplateRender { .. }));
    }

    #[test]
    fn test_prepared_template_renders_repeatedly() {
        let prepared = TemplateSource::Embedded
            .prepare(TemplateKind::Record)
            .unwrap();
        let mut first = Vec::new();
        let mut second = Vec::new();
        prepared.render_to(sample_record(), &mut first).unwrap();
        prepared.render_to(sample_record(), &mut second).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_undefined_field_is_render_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("adr.tmpl"), "{{ Content.Reviewer }}").unwrap();

        let source = TemplateSource::resolve(&external_settings(&dir));
        let err = render(&source, TemplateKind::Record, sample_record()).unwrap_err();
        assert!(matches!(err, RexError::TemplateRender { name, .. } if name == "adr.tmpl"));
    }
}
