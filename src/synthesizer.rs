//! Turns one SVG document into component source text.

use crate::config::ColorScheme;
use crate::document::GraphicDocument;
use crate::error::Result;
use crate::name::{canonical_name, component_filename};
use crate::normalize::{inject_title, normalize};
use crate::recolor::recolor;
use crate::template::Template;
use log::debug;

/// A generated component, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentArtifact {
    /// `<CanonicalName>.svelte`
    pub filename: String,
    pub source: String,
}

/// Generates the component for a single source file.
///
/// # Arguments
/// * `file_name` - Source file name, used for the component and title names
/// * `markup` - Raw SVG text
/// * `scheme` - Color scheme of the file's library
/// * `template` - Template selected for the library
///
/// # Returns
/// * `Result<ComponentArtifact>` - Component file name and source
///
/// # Errors
/// * `Error::DocumentError` if the markup has no parseable `<svg>` root
pub fn synthesize(
    file_name: &str,
    markup: &str,
    scheme: &ColorScheme,
    template: &Template,
) -> Result<ComponentArtifact> {
    let markup = match scheme.colors() {
        Some(colors) => recolor(markup, colors),
        None => markup.to_string(),
    };

    let mut document = GraphicDocument::parse(&markup)?;
    normalize(&mut document, scheme);

    let name = canonical_name(file_name);
    inject_title(&mut document, &name);

    let body = document.to_markup()?;
    debug!("Synthesized component {name} from {file_name}");

    Ok(ComponentArtifact { filename: component_filename(file_name), source: template.render(&body) })
}
