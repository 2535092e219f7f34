//! Side artifacts of the published package: README, aggregator component
//! and package manifest.

use crate::constants::{
    AGGREGATOR_COMPONENT_FILE, MANIFEST_FILE, MANIFEST_REMOVED_FIELDS, README_FILE,
};
use crate::error::{Error, Result};
use crate::processor::write_file;
use log::{debug, warn};
use std::path::Path;

// npm renders ```svelte fences poorly
const SVELTE_FENCE: &str = "```svelte";
const HTML_FENCE: &str = "```html";

/// Rewrites every ```svelte code fence to ```html.
pub fn rewrite_readme(content: &str) -> String {
    content.replace(SVELTE_FENCE, HTML_FENCE)
}

/// Strips development-only fields from a package manifest and points `main`
/// at the aggregator component.
///
/// # Arguments
/// * `content` - Contents of the source `package.json`
///
/// # Returns
/// * `Result<String>` - Manifest pretty-printed with two-space indentation,
///   original field order preserved
///
/// # Errors
/// * `Error::ManifestError` if the content is not a JSON object
pub fn rewrite_manifest(content: &str) -> Result<String> {
    let mut manifest: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| Error::ManifestError(format!("invalid {MANIFEST_FILE}: {e}")))?;
    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| Error::ManifestError(format!("{MANIFEST_FILE} is not an object")))?;

    for field in MANIFEST_REMOVED_FIELDS {
        fields.shift_remove(field);
    }
    fields.insert(
        "main".to_string(),
        serde_json::Value::String(AGGREGATOR_COMPONENT_FILE.to_string()),
    );

    serde_json::to_string_pretty(&manifest).map_err(|e| Error::ManifestError(e.to_string()))
}

/// Reads a side artifact, `None` when the project does not have it.
fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        warn!("{} not found, skipping", path.display());
        return Ok(None);
    }
    std::fs::read_to_string(path).map(Some).map_err(|e| Error::io(path, e))
}

fn copy_with<F>(project_dir: &Path, output_dir: &Path, file: &str, transform: F) -> Result<()>
where
    F: FnOnce(&str) -> Result<String>,
{
    let source = project_dir.join(file);
    if let Some(content) = read_optional(&source)? {
        let target = output_dir.join(file);
        write_file(&target, &transform(&content)?)?;
        debug!("Wrote {}", target.display());
    }
    Ok(())
}

/// Writes the README, aggregator component and manifest into the output
/// directory. Missing sources are skipped with a warning.
pub fn write_side_artifacts<P: AsRef<Path>, O: AsRef<Path>>(project_dir: P, output_dir: O) -> Result<()> {
    let (project_dir, output_dir) = (project_dir.as_ref(), output_dir.as_ref());

    println!("Copying {README_FILE} to the package");
    copy_with(project_dir, output_dir, README_FILE, |content| Ok(rewrite_readme(content)))?;

    println!("Copying {AGGREGATOR_COMPONENT_FILE} to the package");
    copy_with(project_dir, output_dir, AGGREGATOR_COMPONENT_FILE, |content| Ok(content.to_string()))?;

    println!("Generating {MANIFEST_FILE} for the package");
    copy_with(project_dir, output_dir, MANIFEST_FILE, rewrite_manifest)
}
