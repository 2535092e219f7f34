//! Literal color replacement.
//!
//! Every configured color value found in the raw markup is replaced by the
//! placeholder token `{Name}` of its color map key. Matching is literal and
//! case-sensitive. When one value is a substring of another the longest value
//! wins at any given position, and values of equal length are tried in map
//! order. Replaced text is never rescanned.

use crate::config::ColorMap;
use log::{debug, warn};

/// Builds the placeholder token for a color map key.
pub fn placeholder(name: &str) -> String {
    format!("{{{name}}}")
}

/// Replaces every occurrence of the configured color values in `markup`.
///
/// # Arguments
/// * `markup` - Raw markup text
/// * `colors` - Placeholder name to literal color value
///
/// # Returns
/// * `String` - Markup with each color value replaced by its placeholder token
pub fn recolor(markup: &str, colors: &ColorMap) -> String {
    let mut replacements: Vec<(&str, String)> = Vec::with_capacity(colors.len());
    for (name, value) in colors {
        if value.is_empty() {
            warn!("Ignoring empty color value for '{name}'");
            continue;
        }
        replacements.push((value.as_str(), placeholder(name)));
    }
    if replacements.is_empty() {
        return markup.to_string();
    }
    // Stable sort: equal lengths keep their map order.
    replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut output = String::with_capacity(markup.len());
    let mut rest = markup;
    let mut count = 0usize;

    while !rest.is_empty() {
        match replacements.iter().find(|(value, _)| rest.starts_with(value)) {
            Some((value, token)) => {
                output.push_str(token);
                rest = &rest[value.len()..];
                count += 1;
            }
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    output.push(c);
                }
                rest = chars.as_str();
            }
        }
    }

    debug!("Replaced {count} color occurrence(s)");
    output
}
