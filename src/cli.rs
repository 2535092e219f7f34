//! Command-line interface implementation for glyphsmith.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for glyphsmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "glyphsmith: themeable Svelte components from SVG libraries", long_about = None)]
pub struct Args {
    /// Project directory holding sources/, sources.json and the package files
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Directory where the package is generated [default: PROJECT_DIR/dist]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory containing <family>/<library>/<graphic>.svg [default: PROJECT_DIR/sources]
    #[arg(short, long, value_name = "DIR")]
    pub sources_dir: Option<PathBuf>,

    /// Color configuration file [default: first of sources.json, sources.yml, sources.yaml]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not copy README, aggregator component and package.json
    #[arg(long)]
    pub skip_package: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
