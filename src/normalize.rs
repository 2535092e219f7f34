//! Root element normalization and title injection.

use crate::config::ColorScheme;
use crate::constants::ALLOWED_ROOT_ATTRIBUTES;
use crate::document::{Element, GraphicDocument, Node};
use log::debug;
use quick_xml::escape::escape;

pub const WIDTH_PLACEHOLDER: &str = "{width}";
pub const HEIGHT_PLACEHOLDER: &str = "{height}";
pub const COLOR_PLACEHOLDER: &str = "{color}";

const TITLE_ELEMENT: &str = "title";
const PATH_ELEMENT: &str = "path";

/// Normalizes the root element of a document.
///
/// - drops every root attribute outside `width`, `height` and `viewBox`
/// - sets `width`/`height` to the `{width}`/`{height}` placeholders
/// - removes all `<title>` elements
/// - for a colorless library, fills the first root `<path>` with `{color}`
pub fn normalize(document: &mut GraphicDocument, scheme: &ColorScheme) {
    let root = document.root_mut();

    strip_root_attributes(root);
    root.set_attribute("width", WIDTH_PLACEHOLDER);
    root.set_attribute("height", HEIGHT_PLACEHOLDER);

    let removed = root.remove_descendants(TITLE_ELEMENT);
    if removed > 0 {
        debug!("Removed {removed} existing title element(s)");
    }

    if *scheme == ColorScheme::Empty {
        apply_fallback_fill(root);
    }
}

/// Inserts `<title>{name}</title>` as the first child of the root element.
/// Expects existing titles to be gone already, see [`normalize`].
pub fn inject_title(document: &mut GraphicDocument, name: &str) {
    let mut title = Element::new(TITLE_ELEMENT);
    title.children.push(Node::Text(escape(name).into_owned()));
    document.root_mut().prepend_child(Node::Element(title));
}

fn strip_root_attributes(root: &mut Element) {
    root.attributes.retain(|name, _| {
        let keep = ALLOWED_ROOT_ATTRIBUTES.contains(&name.as_str());
        if !keep {
            debug!("Dropping root attribute '{name}'");
        }
        keep
    });
}

// Only the first direct path is colored.
fn apply_fallback_fill(root: &mut Element) {
    match root.first_child_mut(PATH_ELEMENT) {
        Some(path) => path.set_attribute("fill", COLOR_PLACEHOLDER),
        None => debug!("No root path to receive the fallback fill"),
    }
}
