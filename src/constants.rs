//! Common constants used throughout glyphsmith.

/// Supported configuration file names, tried in order
pub const CONFIG_FILES: [&str; 3] = ["sources.json", "sources.yml", "sources.yaml"];

/// Default directory holding `<family>/<library>/<graphic>.svg`
pub const SOURCES_DIR: &str = "sources";

/// Default directory receiving the generated package
pub const OUTPUT_DIR: &str = "dist";

/// Ignore file looked up at the root of the sources directory
pub const IGNORE_FILE: &str = ".graphicsignore";

/// Extension of accepted source graphics
pub const SOURCE_EXTENSION: &str = "svg";

/// Extension of generated components
pub const COMPONENT_EXTENSION: &str = "svelte";

/// Word separator in source file names
pub const NAME_SEPARATOR: char = '-';

/// Color map key that switches a library to the two-color template
pub const PRIMARY_COLOR_KEY: &str = "PrimaryColor";

/// Root attributes that survive normalization
pub const ALLOWED_ROOT_ATTRIBUTES: [&str; 3] = ["width", "height", "viewBox"];

/// Marker replaced by the component markup inside a template
pub const TEMPLATE_MARKER: &str = "%svg%";

/// Template file names looked up in the project directory
pub const SINGLE_COLOR_TEMPLATE_FILE: &str = "template.svelte";
pub const DUAL_COLOR_TEMPLATE_FILE: &str = "template-2-colors.svelte";

/// Side artifacts copied next to the generated components
pub const README_FILE: &str = "README.md";
pub const AGGREGATOR_COMPONENT_FILE: &str = "SvelteGraphics.svelte";
pub const MANIFEST_FILE: &str = "package.json";

/// Manifest fields that are meaningless in the published package
pub const MANIFEST_REMOVED_FIELDS: [&str; 3] = ["scripts", "bugs", "dependencies"];
