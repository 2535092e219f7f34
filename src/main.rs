//! glyphsmith's main application entry point.
//! Handles command-line argument parsing and coordinates the generation run.

use glyphsmith::{
    cli::{get_args, Args},
    config::get_config,
    constants::{IGNORE_FILE, OUTPUT_DIR, SOURCES_DIR},
    error::{default_error_handler, Result},
    ignore::parse_ignore_file,
    logger::init_logger,
    package::write_side_artifacts,
    processor::Processor,
    template::{LocalLoader, Templates},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the color configuration
/// 2. Loads the component templates (project overrides or built-ins)
/// 3. Processes ignore patterns
/// 4. Generates one component per configured source graphic
/// 5. Copies README, aggregator component and manifest
fn run(args: Args) -> Result<()> {
    let project_dir = args.project_dir;
    let source_root = args.sources_dir.unwrap_or_else(|| project_dir.join(SOURCES_DIR));
    let output_root = args.output_dir.unwrap_or_else(|| project_dir.join(OUTPUT_DIR));

    let config = get_config(&project_dir, args.config.as_deref())?;
    let templates = Templates::load(&LocalLoader::new(&project_dir))?;
    let ignored = parse_ignore_file(source_root.join(IGNORE_FILE))?;

    let processor = Processor::new(&config, &templates, &ignored, &source_root, &output_root)
        .with_progress(true);
    let report = processor.run()?;

    if !args.skip_package {
        write_side_artifacts(&project_dir, &output_root)?;
    }

    println!(
        "Generated {} components in {} ({} failed, {} skipped).",
        report.generated.len(),
        output_root.display(),
        report.failed.len(),
        report.skipped.len()
    );
    Ok(())
}
