//! Ignore pattern handling for source libraries.
//! Processes the optional .graphicsignore file at the root of the sources
//! directory, similar to .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

pub use crate::constants::IGNORE_FILE;

/// Patterns that are always ignored
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["**/.DS_Store", "**/Thumbs.db", "**/.gitkeep"];

/// Reads the ignore file and combines it with the default patterns.
///
/// # Arguments
/// * `ignore_path` - Path to the .graphicsignore file
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns, matched against paths
///   relative to the sources directory
///
/// # Notes
/// - A missing ignore file yields the default patterns only
/// - Blank lines and lines starting with `#` are skipped
///
/// # Example
/// ```ignore
/// # Contents of .graphicsignore:
/// icons/drafts/**
/// **/*-old.svg
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(glob(pattern)?);
    }

    let ignore_path = ignore_path.as_ref();
    if ignore_path.exists() {
        let contents =
            std::fs::read_to_string(ignore_path).map_err(|e| Error::io(ignore_path, e))?;
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(glob(line)?);
        }
    } else {
        debug!("{} does not exist", ignore_path.display());
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("{IGNORE_FILE} loading failed: {e}")))
}

fn glob(pattern: &str) -> Result<Glob> {
    Glob::new(pattern)
        .map_err(|e| Error::IgnoreError(format!("invalid pattern '{pattern}': {e}")))
}
