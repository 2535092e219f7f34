//! Batch generation over a `<family>/<library>/<graphic>` source tree.

use globset::GlobSet;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    config::{ColorScheme, SourcesConfig},
    constants::SOURCE_EXTENSION,
    error::{Error, Result},
    synthesizer::{synthesize, ComponentArtifact},
    template::{Template, Templates},
};

/// A configured library, resolved once before its files are processed.
#[derive(Debug, Clone)]
pub struct LibraryDescriptor<'a> {
    pub family: String,
    pub library: String,
    pub scheme: ColorScheme,
    pub template: &'a Template,
}

impl LibraryDescriptor<'_> {
    pub fn synthesize(&self, file_name: &str, markup: &str) -> Result<ComponentArtifact> {
        synthesize(file_name, markup, &self.scheme, self.template)
    }
}

/// Why an entry of the source tree produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnknownFamily(String),
    UnknownLibrary { family: String, library: String },
    Ignored(PathBuf),
    NotAGraphic(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownFamily(family) => {
                write!(f, "family '{family}' is not configured")
            }
            SkipReason::UnknownLibrary { family, library } => {
                write!(f, "library '{family}/{library}' is not configured")
            }
            SkipReason::Ignored(path) => write!(f, "'{}' matches an ignore pattern", path.display()),
            SkipReason::NotAGraphic(path) => {
                write!(f, "'{}' is not a .{SOURCE_EXTENSION} file", path.display())
            }
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Paths of written components
    pub generated: Vec<PathBuf>,
    pub skipped: Vec<SkipReason>,
    /// Per-file failures, always `Error::ProcessError`
    pub failed: Vec<Error>,
}

impl BatchReport {
    fn skip(&mut self, reason: SkipReason) {
        info!("Skipping: {reason}");
        self.skipped.push(reason);
    }
}

pub struct Processor<'a> {
    config: &'a SourcesConfig,
    templates: &'a Templates,
    ignored: &'a GlobSet,
    source_root: PathBuf,
    output_root: PathBuf,
    progress: bool,
}

impl<'a> Processor<'a> {
    pub fn new<S: AsRef<Path>, O: AsRef<Path>>(
        config: &'a SourcesConfig,
        templates: &'a Templates,
        ignored: &'a GlobSet,
        source_root: S,
        output_root: O,
    ) -> Self {
        Self {
            config,
            templates,
            ignored,
            source_root: source_root.as_ref().to_path_buf(),
            output_root: output_root.as_ref().to_path_buf(),
            progress: false,
        }
    }

    /// Enables the per-library progress counter on stdout.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Resolves the color scheme and template of a library.
    ///
    /// # Returns
    /// * `Some(LibraryDescriptor)` - If the library is configured
    /// * `None` - If either the family or the library is unknown
    pub fn resolve_library(&self, family: &str, library: &str) -> Option<LibraryDescriptor<'a>> {
        let colors = self.config.color_map(family, library)?;
        let scheme = ColorScheme::from_map(colors);
        let template = self.templates.select(&scheme);
        debug!("Library '{family}/{library}' uses the {:?} template", template.kind());

        Some(LibraryDescriptor {
            family: family.to_string(),
            library: library.to_string(),
            scheme,
            template,
        })
    }

    /// Processes every configured library of the source tree.
    ///
    /// # Returns
    /// * `Result<BatchReport>` - Generated components, skips and per-file failures
    ///
    /// # Errors
    /// * `Error::Io` on any file system failure, which aborts the run
    pub fn run(&self) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        ensure_dir(&self.output_root)?;

        for family_dir in list_entries(&self.source_root, EntryKind::Dir)? {
            let family = file_name(&family_dir);
            if !self.config.has_family(&family) {
                report.skip(SkipReason::UnknownFamily(family));
                continue;
            }
            ensure_dir(self.output_root.join(&family))?;

            for library_dir in list_entries(&family_dir, EntryKind::Dir)? {
                let library = file_name(&library_dir);
                match self.resolve_library(&family, &library) {
                    Some(descriptor) => {
                        self.process_library(&descriptor, &library_dir, &mut report)?
                    }
                    None => report.skip(SkipReason::UnknownLibrary { family: family.clone(), library }),
                }
            }
        }

        Ok(report)
    }

    fn process_library(
        &self,
        descriptor: &LibraryDescriptor<'_>,
        library_dir: &Path,
        report: &mut BatchReport,
    ) -> Result<()> {
        let dest_dir = self.output_root.join(&descriptor.family).join(&descriptor.library);
        ensure_dir(&dest_dir)?;

        let mut files = Vec::new();
        for path in list_entries(library_dir, EntryKind::File)? {
            let relative = path.strip_prefix(&self.source_root).unwrap_or(&path);
            if self.ignored.is_match(relative) {
                report.skip(SkipReason::Ignored(relative.to_path_buf()));
            } else if !is_graphic(&path) {
                report.skip(SkipReason::NotAGraphic(relative.to_path_buf()));
            } else {
                files.push(path);
            }
        }

        if self.progress {
            println!(
                "Generating {} components for {} library",
                files.len(),
                descriptor.library
            );
        }

        // Component file name -> source that produced it
        let mut written: HashMap<String, &Path> = HashMap::new();

        for (i, path) in files.iter().enumerate() {
            if self.progress {
                print!("\rComponent{:>5} / {}", i + 1, files.len());
                std::io::stdout().flush().ok();
            }

            let artifact = self
                .process_file(descriptor, path)?
                .and_then(|artifact| match written.get(&artifact.filename) {
                    Some(earlier) => Err(Error::ProcessError {
                        source_path: path.display().to_string(),
                        e_msg: format!(
                            "component '{}' was already generated from '{}'",
                            artifact.filename,
                            earlier.display()
                        ),
                    }),
                    None => Ok(artifact),
                });

            match artifact {
                Ok(artifact) => {
                    let target = dest_dir.join(&artifact.filename);
                    write_file(&target, &artifact.source)?;
                    debug!("Wrote {}", target.display());
                    written.insert(artifact.filename, path.as_path());
                    report.generated.push(target);
                }
                Err(err) => {
                    warn!("{err}");
                    report.failed.push(err);
                }
            }
        }

        if self.progress {
            println!();
        }
        Ok(())
    }

    /// Reads one source file and synthesizes its component.
    ///
    /// The outer result carries fatal file system errors, the inner one a
    /// per-file `Error::ProcessError` that must not stop the batch.
    pub fn process_file(
        &self,
        descriptor: &LibraryDescriptor<'_>,
        path: &Path,
    ) -> Result<Result<ComponentArtifact>> {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let name = file_name(path);

        let artifact = String::from_utf8(bytes)
            .map_err(|e| Error::DocumentError(format!("invalid UTF-8: {e}")))
            .and_then(|markup| descriptor.synthesize(&name, &markup))
            .map_err(|e| Error::ProcessError {
                source_path: path.display().to_string(),
                e_msg: e.to_string(),
            });
        Ok(artifact)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

/// Lists the direct children of `dir` of one kind, sorted by file name.
fn list_entries(dir: &Path, kind: EntryKind) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            Error::io(path, e.into())
        })?;
        let matches = match kind {
            EntryKind::Dir => entry.file_type().is_dir(),
            EntryKind::File => entry.file_type().is_file(),
        };
        if matches {
            entries.push(entry.into_path());
        }
    }
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

pub fn is_graphic(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(SOURCE_EXTENSION)
}

/// Creates a directory and its parents. Existing directories are fine.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| Error::io(path, e))
}
