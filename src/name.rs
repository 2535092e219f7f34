//! Component naming derived from source file names.

use crate::constants::{COMPONENT_EXTENSION, NAME_SEPARATOR, SOURCE_EXTENSION};

/// Converts a hyphenated file name into a PascalCase component name.
///
/// The `.svg` extension is stripped first. Every separator is dropped and the
/// character following it is uppercased, as is the very first character. All
/// other characters keep their case, so `arrow-leftXL.svg` becomes
/// `ArrowLeftXL`.
///
/// # Arguments
/// * `file_name` - Source file name, with or without the `.svg` extension
///
/// # Returns
/// * `String` - Canonical component name
pub fn canonical_name(file_name: &str) -> String {
    let stem = strip_source_extension(file_name);
    pascal_case(stem, NAME_SEPARATOR)
}

/// Returns the file name of the component generated from `file_name`.
pub fn component_filename(file_name: &str) -> String {
    format!("{}.{}", canonical_name(file_name), COMPONENT_EXTENSION)
}

fn strip_source_extension(file_name: &str) -> &str {
    file_name
        .strip_suffix(SOURCE_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(file_name)
}

fn pascal_case(stem: &str, separator: char) -> String {
    let mut name = String::with_capacity(stem.len());
    let mut upper = true;

    for c in stem.chars() {
        if c == separator {
            upper = true;
            continue;
        }
        if upper {
            name.extend(c.to_uppercase());
        } else {
            name.push(c);
        }
        upper = false;
    }

    name
}
