//! Component templates and their selection.
//! A template is component source text with a single `%svg%` marker that
//! receives the normalized markup.

use crate::config::ColorScheme;
use crate::constants::{DUAL_COLOR_TEMPLATE_FILE, SINGLE_COLOR_TEMPLATE_FILE, TEMPLATE_MARKER};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

const BUILTIN_SINGLE_COLOR: &str = include_str!("../templates/template.svelte");
const BUILTIN_DUAL_COLOR: &str = include_str!("../templates/template-2-colors.svelte");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// `{color}` or custom single placeholders
    SingleColor,
    /// `{PrimaryColor}` and `{SecondaryColor}`
    DualColor,
}

impl TemplateKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::SingleColor => SINGLE_COLOR_TEMPLATE_FILE,
            TemplateKind::DualColor => DUAL_COLOR_TEMPLATE_FILE,
        }
    }

    fn builtin(&self) -> &'static str {
        match self {
            TemplateKind::SingleColor => BUILTIN_SINGLE_COLOR,
            TemplateKind::DualColor => BUILTIN_DUAL_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    kind: TemplateKind,
    source: String,
}

impl Template {
    /// Creates a template, checking it holds exactly one `%svg%` marker.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the marker is missing or repeated
    pub fn new<S: Into<String>>(kind: TemplateKind, source: S) -> Result<Self> {
        let source = source.into();
        match source.matches(TEMPLATE_MARKER).count() {
            1 => Ok(Self { kind, source }),
            n => Err(Error::ConfigError(format!(
                "{} template must contain exactly one '{TEMPLATE_MARKER}' marker, found {n}",
                kind.file_name()
            ))),
        }
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitutes the marker with `markup`.
    pub fn render(&self, markup: &str) -> String {
        self.source.replacen(TEMPLATE_MARKER, markup, 1)
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    fn load(&self, kind: TemplateKind) -> Result<Template>;
}

/// Loader for the templates compiled into the binary.
#[derive(Debug, Default)]
pub struct BuiltinLoader;

impl TemplateLoader for BuiltinLoader {
    fn load(&self, kind: TemplateKind) -> Result<Template> {
        Template::new(kind, kind.builtin())
    }
}

/// Loader for templates overridden in a project directory. Falls back to the
/// built-in template when the project has no file for a kind.
pub struct LocalLoader<P: AsRef<Path>> {
    dir: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(dir: P) -> Self {
        Self { dir }
    }

    fn path(&self, kind: TemplateKind) -> PathBuf {
        self.dir.as_ref().join(kind.file_name())
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// # Errors
    /// * `Error::Io` if the template exists but cannot be read
    /// * `Error::ConfigError` if the template is invalid
    fn load(&self, kind: TemplateKind) -> Result<Template> {
        let path = self.path(kind);
        if !path.exists() {
            debug!("No {} in project, using the built-in template", kind.file_name());
            return BuiltinLoader.load(kind);
        }
        debug!("Loading template from {}", path.display());
        let source = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Template::new(kind, source)
    }
}

/// Both template variants, loaded once per run.
#[derive(Debug, Clone)]
pub struct Templates {
    single: Template,
    dual: Template,
}

impl Templates {
    pub fn load(loader: &dyn TemplateLoader) -> Result<Self> {
        Ok(Self {
            single: loader.load(TemplateKind::SingleColor)?,
            dual: loader.load(TemplateKind::DualColor)?,
        })
    }

    /// Returns the dual-color template when the color map declares
    /// `PrimaryColor`, the single-color template otherwise.
    pub fn select(&self, scheme: &ColorScheme) -> &Template {
        match scheme {
            ColorScheme::PrimaryAndSecondary(_) => &self.dual,
            ColorScheme::Single(_) | ColorScheme::Empty => &self.single,
        }
    }
}
