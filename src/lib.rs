//! glyphsmith turns trees of SVG graphics into themeable Svelte components.
//! Literal colors become placeholder tokens, the root element is normalized,
//! and the markup is wrapped in a component template chosen per library.

/// Command-line interface module
pub mod cli;

/// Static `family -> library -> color map` configuration
/// Supports JSON and YAML formats (sources.json, sources.yml, sources.yaml)
pub mod config;

pub mod constants;

/// Markup element tree: parsing and serialization
pub mod document;

/// Error types and handling
pub mod error;

/// Ignore patterns for stray files in source libraries
pub mod ignore;

pub mod logger;

/// PascalCase component names from hyphenated file names
pub mod name;

/// Root attribute normalization and title injection
pub mod normalize;

/// README, aggregator component and manifest of the published package
pub mod package;

/// Batch processing of the source tree
pub mod processor;

/// Color value to placeholder token replacement
pub mod recolor;

/// Per-file pipeline producing component source
pub mod synthesizer;

/// Component templates and per-library selection
pub mod template;
