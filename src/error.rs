//! Error handling for glyphsmith.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while generating components.
///
/// Only `Io`, `ConfigError`, `IgnoreError` and `ManifestError` abort a run.
/// `DocumentError` and `ProcessError` are scoped to a single source file and
/// are collected by the processor instead of being propagated.
#[derive(Error, Debug)]
pub enum Error {
    /// File system operation failed on a specific path
    #[error("IO error at '{path}': {source}.")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Missing, unreadable or invalid configuration (including templates)
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Source markup could not be turned into a single `<svg>` root element
    #[error("Malformed document: {0}.")]
    DocumentError(String),

    /// A single source file failed to turn into a component
    #[error("Failed to process '{source_path}': {e_msg}")]
    ProcessError { source_path: String, e_msg: String },

    /// Invalid pattern in an ignore file
    #[error("Ignore file error: {0}.")]
    IgnoreError(String),

    /// The package manifest could not be parsed or rewritten
    #[error("Manifest error: {0}.")]
    ManifestError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an [`io::Error`] together with the path it occurred on.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Error::Io { path: path.as_ref().display().to_string(), source }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
