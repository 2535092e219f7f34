//! Static color configuration.
//! Loads the `family -> library -> color map` tree that decides which source
//! libraries are processed and how their colors are tokenized.

use crate::constants::{CONFIG_FILES, PRIMARY_COLOR_KEY};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Placeholder name to literal color value, in declaration order.
pub type ColorMap = IndexMap<String, String>;

/// Parsed configuration file.
///
/// # Example
/// ```json
/// {
///   "icons": { "heroicons": {} },
///   "illustrations": {
///     "unDraw": { "color": "#6c63ff" },
///     "openPeeps": { "PrimaryColor": "#000000", "SecondaryColor": "#ffffff" }
///   }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct SourcesConfig {
    families: IndexMap<String, IndexMap<String, ColorMap>>,
}

impl SourcesConfig {
    pub fn has_family(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }

    /// Returns the color map of a library, `None` when either the family or
    /// the library is not configured.
    pub fn color_map(&self, family: &str, library: &str) -> Option<&ColorMap> {
        self.families.get(family).and_then(|libraries| libraries.get(library))
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }
}

/// Shape of a library's color map, resolved once per library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorScheme {
    /// No declared colors: the first root path gets a `{color}` fill.
    Empty,
    /// Declared colors without a primary color.
    Single(ColorMap),
    /// Declared colors including `PrimaryColor`: uses the two-color template.
    PrimaryAndSecondary(ColorMap),
}

impl ColorScheme {
    pub fn from_map(colors: &ColorMap) -> Self {
        if colors.is_empty() {
            ColorScheme::Empty
        } else if colors.contains_key(PRIMARY_COLOR_KEY) {
            ColorScheme::PrimaryAndSecondary(colors.clone())
        } else {
            ColorScheme::Single(colors.clone())
        }
    }

    /// Colors to tokenize. Empty for [`ColorScheme::Empty`].
    pub fn colors(&self) -> Option<&ColorMap> {
        match self {
            ColorScheme::Empty => None,
            ColorScheme::Single(colors) | ColorScheme::PrimaryAndSecondary(colors) => Some(colors),
        }
    }
}

/// Reads the first configuration file found in a directory.
///
/// # Arguments
/// * `project_dir` - Directory containing the configuration
/// * `config_files` - List of configuration files to try
///
/// # Returns
/// * `Result<String>` - Contents of the first found configuration file
///
/// # Errors
/// * `Error::ConfigError` if no config file exists
/// * `Error::Io` if the file exists but cannot be read
pub fn load_config<P: AsRef<Path>>(project_dir: P, config_files: &[&str]) -> Result<String> {
    for file in config_files {
        let config_path = project_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return std::fs::read_to_string(&config_path).map_err(|e| Error::io(&config_path, e));
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found in '{}' (tried: {})",
        project_dir.as_ref().display(),
        config_files.join(", ")
    )))
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML of the
///   expected shape
pub fn parse_config(content: &str) -> Result<SourcesConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(json_err) => {
            debug!("Configuration is not JSON ({json_err}), trying YAML");
            serde_yaml::from_str(content)
                .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))
        }
    }
}

/// Loads the configuration, either from an explicit file or from the
/// project directory.
pub fn get_config<P: AsRef<Path>>(project_dir: P, config_file: Option<&Path>) -> Result<SourcesConfig> {
    let content = match config_file {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?
        }
        None => load_config(project_dir, &CONFIG_FILES)?,
    };
    parse_config(&content)
}
