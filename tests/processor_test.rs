use glyphsmith::config::parse_config;
use glyphsmith::error::Error;
use glyphsmith::ignore::parse_ignore_file;
use glyphsmith::processor::{ensure_dir, is_graphic, write_file, Processor, SkipReason};
use glyphsmith::template::{BuiltinLoader, TemplateKind, TemplateLoader, Templates};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CONFIG: &str = r##"{
    "icons": { "heroicons": {} },
    "illustrations": { "openPeeps": { "PrimaryColor": "#000000", "SecondaryColor": "#ffffff" } }
}"##;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

struct Fixture {
    _temp_dir: TempDir,
    sources: PathBuf,
    dist: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let sources = temp_dir.path().join("sources");
        let dist = temp_dir.path().join("dist");
        std::fs::create_dir_all(&sources).unwrap();
        Self { _temp_dir: temp_dir, sources, dist }
    }
}

#[test_log::test]
fn test_colorless_library_generates_one_component_per_file() {
    let fixture = Fixture::new();
    for name in ["arrow-left.svg", "arrow-right.svg", "home.svg"] {
        write(&fixture.sources, &format!("icons/heroicons/{name}"), r#"<svg><path d="M0 0"/></svg>"#);
    }

    let config = parse_config(CONFIG).unwrap();
    let templates = Templates::load(&BuiltinLoader).unwrap();
    let ignored = parse_ignore_file(fixture.sources.join(".graphicsignore")).unwrap();
    let report = Processor::new(&config, &templates, &ignored, &fixture.sources, &fixture.dist)
        .run()
        .unwrap();

    assert_eq!(report.generated.len(), 3);
    assert!(report.failed.is_empty());
    assert!(report.skipped.is_empty());
    assert_eq!(
        file_names(&fixture.dist.join("icons/heroicons")),
        ["ArrowLeft.svelte", "ArrowRight.svelte", "Home.svelte"]
    );
}

#[test_log::test]
fn test_output_tree_mirrors_configured_sources() {
    let fixture = Fixture::new();
    write(
        &fixture.sources,
        "icons/heroicons/arrow-left.svg",
        r##"<svg width="24" height="24" fill="#123456"><path d="M0 0"/></svg>"##,
    );
    write(
        &fixture.sources,
        "illustrations/openPeeps/bust-1.svg",
        r##"<svg viewBox="0 0 4 4"><path fill="#000000"/><path fill="#ffffff"/></svg>"##,
    );
    write(&fixture.sources, "icons/feather/x.svg", "<svg/>");
    write(&fixture.sources, "emoji/twemoji/smile.svg", "<svg/>");

    let config = parse_config(CONFIG).unwrap();
    let templates = Templates::load(&BuiltinLoader).unwrap();
    let ignored = parse_ignore_file(fixture.sources.join(".graphicsignore")).unwrap();
    Processor::new(&config, &templates, &ignored, &fixture.sources, &fixture.dist).run().unwrap();

    let expected = TempDir::new().unwrap();
    let single = BuiltinLoader.load(TemplateKind::SingleColor).unwrap();
    let dual = BuiltinLoader.load(TemplateKind::DualColor).unwrap();
    write(
        expected.path(),
        "icons/heroicons/ArrowLeft.svelte",
        &single.render(r#"<svg width="{width}" height="{height}"><title>ArrowLeft</title><path d="M0 0" fill="{color}"/></svg>"#),
    );
    write(
        expected.path(),
        "illustrations/openPeeps/Bust1.svelte",
        &dual.render(r#"<svg viewBox="0 0 4 4" width="{width}" height="{height}"><title>Bust1</title><path fill="{PrimaryColor}"/><path fill="{SecondaryColor}"/></svg>"#),
    );

    assert!(!dir_diff::is_different(&fixture.dist, expected.path()).unwrap());
}

#[test_log::test]
fn test_unconfigured_entries_are_skipped_without_errors() {
    let fixture = Fixture::new();
    write(&fixture.sources, "icons/feather/x.svg", "<svg/>");
    write(&fixture.sources, "emoji/twemoji/smile.svg", "<svg/>");

    let config = parse_config(CONFIG).unwrap();
    let templates = Templates::load(&BuiltinLoader).unwrap();
    let ignored = parse_ignore_file(fixture.sources.join(".graphicsignore")).unwrap();
    let report = Processor::new(&config, &templates, &ignored, &fixture.sources, &fixture.dist)
        .run()
        .unwrap();

    assert!(report.generated.is_empty());
    assert!(report.failed.is_empty());
    assert_eq!(
        report.skipped,
        [
            SkipReason::UnknownFamily("emoji".to_string()),
            SkipReason::UnknownLibrary { family: "icons".to_string(), library: "feather".to_string() },
        ]
    );
    assert!(!fixture.dist.join("emoji").exists());
    assert!(!fixture.dist.join("icons/feather").exists());
}

#[test_log::test]
fn test_malformed_file_does_not_stop_the_library() {
    let fixture = Fixture::new();
    write(&fixture.sources, "icons/heroicons/a.svg", "<svg><path/></svg>");
    write(&fixture.sources, "icons/heroicons/b.svg", "<svg><path></svg>");
    write(&fixture.sources, "icons/heroicons/c.svg", "<svg><path/></svg>");

    let config = parse_config(CONFIG).unwrap();
    let templates = Templates::load(&BuiltinLoader).unwrap();
    let ignored = parse_ignore_file(fixture.sources.join(".graphicsignore")).unwrap();
    let report = Processor::new(&config, &templates, &ignored, &fixture.sources, &fixture.dist)
        .run()
        .unwrap();

    assert_eq!(report.generated.len(), 2);
    assert_eq!(report.failed.len(), 1);
    match &report.failed[0] {
        Error::ProcessError { source_path, .. } => assert!(source_path.ends_with("b.svg")),
        other => panic!("Expected ProcessError, got {other:?}"),
    }
    assert_eq!(file_names(&fixture.dist.join("icons/heroicons")), ["A.svelte", "C.svelte"]);
}

#[test_log::test]
fn test_colliding_component_names_keep_the_first_source() {
    let fixture = Fixture::new();
    write(&fixture.sources, "icons/heroicons/arrow-left.svg", "<svg><path d=\"M1 1\"/></svg>");
    write(&fixture.sources, "icons/heroicons/arrowLeft.svg", "<svg><path d=\"M2 2\"/></svg>");

    let config = parse_config(CONFIG).unwrap();
    let templates = Templates::load(&BuiltinLoader).unwrap();
    let ignored = parse_ignore_file(fixture.sources.join(".graphicsignore")).unwrap();
    let report = Processor::new(&config, &templates, &ignored, &fixture.sources, &fixture.dist)
        .run()
        .unwrap();

    assert_eq!(report.generated.len(), 1);
    assert_eq!(report.failed.len(), 1);
    match &report.failed[0] {
        Error::ProcessError { source_path, e_msg } => {
            assert!(source_path.ends_with("arrowLeft.svg"));
            assert!(e_msg.contains("ArrowLeft.svelte"));
            assert!(e_msg.contains("arrow-left.svg"));
        }
        other => panic!("Expected ProcessError, got {other:?}"),
    }

    let dest = fixture.dist.join("icons/heroicons");
    assert_eq!(file_names(&dest), ["ArrowLeft.svelte"]);
    let written = std::fs::read_to_string(dest.join("ArrowLeft.svelte")).unwrap();
    assert!(written.contains("M1 1"));
    assert!(!written.contains("M2 2"));
}

#[test_log::test]
fn test_ignored_and_foreign_files_are_skipped() {
    let fixture = Fixture::new();
    write(&fixture.sources, ".graphicsignore", "**/*-old.svg\n");
    write(&fixture.sources, "icons/heroicons/.DS_Store", "");
    write(&fixture.sources, "icons/heroicons/home-old.svg", "<svg/>");
    write(&fixture.sources, "icons/heroicons/LICENSE.txt", "MIT");
    write(&fixture.sources, "icons/heroicons/home.svg", "<svg/>");

    let config = parse_config(CONFIG).unwrap();
    let templates = Templates::load(&BuiltinLoader).unwrap();
    let ignored = parse_ignore_file(fixture.sources.join(".graphicsignore")).unwrap();
    let report = Processor::new(&config, &templates, &ignored, &fixture.sources, &fixture.dist)
        .run()
        .unwrap();

    assert_eq!(report.generated.len(), 1);
    assert_eq!(report.skipped.len(), 3);
    assert!(report
        .skipped
        .contains(&SkipReason::NotAGraphic(PathBuf::from("icons/heroicons/LICENSE.txt"))));
    assert_eq!(file_names(&fixture.dist.join("icons/heroicons")), ["Home.svelte"]);
}

#[test]
fn test_resolve_library() {
    let fixture = Fixture::new();
    let config = parse_config(CONFIG).unwrap();
    let templates = Templates::load(&BuiltinLoader).unwrap();
    let ignored = parse_ignore_file(fixture.sources.join(".graphicsignore")).unwrap();
    let processor = Processor::new(&config, &templates, &ignored, &fixture.sources, &fixture.dist);

    let peeps = processor.resolve_library("illustrations", "openPeeps").unwrap();
    assert_eq!(peeps.template.kind(), TemplateKind::DualColor);
    let heroicons = processor.resolve_library("icons", "heroicons").unwrap();
    assert_eq!(heroicons.template.kind(), TemplateKind::SingleColor);
    assert!(processor.resolve_library("icons", "feather").is_none());
}

#[test]
fn test_missing_sources_directory_is_fatal() {
    let fixture = Fixture::new();
    let config = parse_config(CONFIG).unwrap();
    let templates = Templates::load(&BuiltinLoader).unwrap();
    let ignored = parse_ignore_file(fixture.sources.join(".graphicsignore")).unwrap();
    let missing = fixture.sources.join("nope");

    let result = Processor::new(&config, &templates, &ignored, &missing, &fixture.dist).run();
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_ensure_dir_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("dist/icons");

    assert!(ensure_dir(&dir).is_ok());
    assert!(ensure_dir(&dir).is_ok());
    assert!(dir.is_dir());
}

#[test]
fn test_write_file_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("dist/icons/heroicons/Home.svelte");

    write_file(&target, "<svg/>").unwrap();
    assert_eq!(std::fs::read_to_string(target).unwrap(), "<svg/>");
}

#[test]
fn test_is_graphic() {
    assert!(is_graphic(Path::new("icons/home.svg")));
    assert!(!is_graphic(Path::new("icons/home.svg.bak")));
    assert!(!is_graphic(Path::new("icons/home")));
}
