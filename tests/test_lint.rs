use std::path::Path;

use preview_lint::config::Config;
use preview_lint::lint::{collect_markdown, run_lint, validate_file};
use preview_lint::report::{ErrorKind, PreviewState, ValidationResult, ValidationSummary};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn post(title: &str, preview_line: &str) -> String {
    format!("---\nlayout: post\ntitle: {title}\n{preview_line}\n---\n\nBody text.\n")
}

fn lint(root: &Path) -> ValidationSummary {
    run_lint(root, &Config::default())
}

fn result_for<'a>(summary: &'a ValidationSummary, file: &str) -> &'a ValidationResult {
    summary
        .results
        .iter()
        .find(|r| r.file == file)
        .unwrap_or_else(|| panic!("no result for {file}"))
}

fn kinds(result: &ValidationResult) -> Vec<ErrorKind> {
    result.errors.iter().map(|e| e.kind).collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn existing_absolute_preview_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "assets/img/hero.png", "png");
    write(
        dir.path(),
        "pages/_posts/hero.md",
        &post("Hero", "preview: /assets/img/hero.png"),
    );

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_posts/hero.md");
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.title, "Hero");
    assert_eq!(result.preview, PreviewState::Value("/assets/img/hero.png".into()));
    assert_eq!(result.line, Some(4));
    assert_eq!(summary.valid_previews, 1);
    assert!(summary.passed());
}

#[test]
fn quoted_null_is_string_null() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pages/_docs/a.md", &post("A", "preview: \"null\""));

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_docs/a.md");
    assert_eq!(kinds(result), vec![ErrorKind::StringNull]);
    assert!(result.errors[0]
        .suggestion
        .as_deref()
        .unwrap()
        .contains("preview: null"));
    assert_eq!(summary.missing_files, 0);
}

#[test]
fn missing_image_suggests_similar_sibling() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "img/missing-2023.png", "png");
    write(
        dir.path(),
        "pages/_posts/m.md",
        &post("M", "preview: /img/missing.png"),
    );

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_posts/m.md");
    assert_eq!(kinds(result), vec![ErrorKind::FileNotFound]);
    assert_eq!(
        result.errors[0].suggestion.as_deref(),
        Some("Did you mean: /img/missing-2023.png")
    );
    assert_eq!(summary.missing_files, 1);
}

#[test]
fn relative_uppercase_png_is_relative_path_only() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "assets/pic.PNG", "png");
    write(
        dir.path(),
        "pages/_about/me.md",
        &post("Me", "preview: assets/pic.PNG"),
    );

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_about/me.md");
    assert_eq!(kinds(result), vec![ErrorKind::RelativePath]);
    assert_eq!(summary.format_errors, 1);
}

#[test]
fn missing_frontmatter_is_parse_error_and_scan_continues() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "assets/ok.png", "png");
    write(dir.path(), "pages/_posts/a-broken.md", "# No frontmatter here\n");
    write(dir.path(), "pages/_posts/b-fine.md", &post("Fine", "preview: /assets/ok.png"));

    let summary = lint(dir.path());
    assert_eq!(summary.total_files, 2);

    let broken = result_for(&summary, "pages/_posts/a-broken.md");
    assert!(!broken.valid);
    assert_eq!(kinds(broken), vec![ErrorKind::ParseError]);
    assert_eq!(broken.title, "(parse error)");
    assert_eq!(broken.errors[0].preview, "(none)");

    assert!(result_for(&summary, "pages/_posts/b-fine.md").valid);
    assert_eq!(summary.parse_errors, 1);
    assert!(!summary.passed());
}

#[test]
fn broken_yaml_keeps_raw_preview_for_display() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "pages/_posts/bad.md",
        "---\ntitle: [oops\npreview: /img/a.png\n---\n",
    );

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_posts/bad.md");
    assert_eq!(kinds(result), vec![ErrorKind::ParseError]);
    assert_eq!(result.preview, PreviewState::Unparsed(Some("/img/a.png".into())));
    assert_eq!(result.line, Some(3));
}

#[test]
fn non_utf8_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pages/_posts/binary.md");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_posts/binary.md");
    assert_eq!(kinds(result), vec![ErrorKind::ParseError]);
}

// ---------------------------------------------------------------------------
// Absent / null previews
// ---------------------------------------------------------------------------

#[test]
fn absent_preview_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pages/_posts/a.md", "---\ntitle: A\n---\n");

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_posts/a.md");
    assert!(result.valid);
    assert_eq!(result.preview, PreviewState::Absent);
    assert_eq!(summary.files_without_preview, 1);
    assert!(summary.passed());
}

#[test]
fn null_preview_forms_are_valid() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pages/_posts/a.md", &post("A", "preview:"));
    write(dir.path(), "pages/_posts/b.md", &post("B", "preview: null"));
    write(dir.path(), "pages/_posts/c.md", &post("C", "preview: ~"));

    let summary = lint(dir.path());
    assert_eq!(summary.files_with_null_preview, 3);
    assert_eq!(summary.files_with_preview, 0);
    assert!(summary.results.iter().all(|r| r.valid && r.errors.is_empty()));
}

#[test]
fn quoted_empty_preview_is_empty_value() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pages/_posts/a.md", &post("A", "preview: \"  \""));

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_posts/a.md");
    assert_eq!(kinds(result), vec![ErrorKind::EmptyValue]);
    assert_eq!(summary.invalid_previews, 1);
}

#[test]
fn numeric_preview_is_checked_as_text() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pages/_posts/a.md", &post("A", "preview: 2024"));

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_posts/a.md");
    assert_eq!(result.preview.text(), Some("2024"));
    assert!(kinds(result).contains(&ErrorKind::RelativePath));
    assert!(kinds(result).contains(&ErrorKind::NoExtension));
}

// ---------------------------------------------------------------------------
// Walking
// ---------------------------------------------------------------------------

#[test]
fn missing_content_dirs_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let summary = lint(dir.path());
    assert_eq!(summary.total_files, 0);
    assert!(summary.passed());
}

#[test]
fn nested_markdown_is_found_and_other_files_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pages/_docs/guide/deep/page.md", "---\ntitle: Deep\n---\n");
    write(dir.path(), "pages/_docs/notes.txt", "not markdown");
    write(dir.path(), "pages/_docs/page.markdown", "---\ntitle: Other\n---\n");

    let files = collect_markdown(&dir.path().join("pages/_docs"));
    assert_eq!(files, vec![dir.path().join("pages/_docs/guide/deep/page.md")]);

    let summary = lint(dir.path());
    assert_eq!(summary.total_files, 1);
    assert_eq!(summary.results[0].file, "pages/_docs/guide/deep/page.md");
}

#[cfg(unix)]
#[test]
fn symlinked_markdown_is_linted() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "drafts/post.md", &post("Linked", "preview: img/x.bmp"));
    std::fs::create_dir_all(dir.path().join("pages/_posts")).unwrap();
    std::os::unix::fs::symlink(
        dir.path().join("drafts/post.md"),
        dir.path().join("pages/_posts/post.md"),
    )
    .unwrap();

    let summary = lint(dir.path());
    assert_eq!(summary.total_files, 1);
    let result = result_for(&summary, "pages/_posts/post.md");
    assert!(kinds(result).contains(&ErrorKind::RelativePath));
    assert!(kinds(result).contains(&ErrorKind::InvalidExtension));
    assert!(!summary.passed());
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_walked() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "shared/guide.md", "---\ntitle: Guide\n---\n");
    std::fs::create_dir_all(dir.path().join("pages/_docs")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("shared"), dir.path().join("pages/_docs/shared"))
        .unwrap();

    let summary = lint(dir.path());
    assert_eq!(summary.total_files, 1);
    assert_eq!(summary.results[0].file, "pages/_docs/shared/guide.md");
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_skipped_and_walk_continues() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pages/_posts/real.md", "---\ntitle: Real\n---\n");
    std::os::unix::fs::symlink(
        dir.path().join("nowhere.md"),
        dir.path().join("pages/_posts/gone.md"),
    )
    .unwrap();

    let files = collect_markdown(&dir.path().join("pages/_posts"));
    assert_eq!(files, vec![dir.path().join("pages/_posts/real.md")]);
}

#[test]
fn files_outside_content_dirs_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "README.md", &post("Readme", "preview: nope"));
    write(dir.path(), "pages/_drafts/x.md", &post("Draft", "preview: nope"));

    assert_eq!(lint(dir.path()).total_files, 0);
}

#[test]
fn all_five_default_dirs_are_scanned() {
    let dir = tempfile::tempdir().unwrap();
    for sub in ["_posts", "_docs", "_quickstart", "_about", "_quests"] {
        write(dir.path(), &format!("pages/{sub}/a.md"), "---\ntitle: A\n---\n");
    }
    assert_eq!(lint(dir.path()).total_files, 5);
}

#[test]
fn configured_content_dirs_replace_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "content/a.md", &post("A", "preview: /missing.png"));
    write(dir.path(), "pages/_posts/b.md", &post("B", "preview: /missing.png"));

    let config = Config {
        content_dirs: vec!["content".to_string()],
        ..Config::default()
    };
    let summary = run_lint(dir.path(), &config);
    assert_eq!(summary.total_files, 1);
    assert_eq!(summary.results[0].file, "content/a.md");
}

#[test]
fn validate_file_tells_null_from_absent() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.md", &post("A", "preview: null"));
    write(dir.path(), "b.md", "---\ntitle: B\n---\n");

    let config = Config::default();
    let a = validate_file(dir.path(), &dir.path().join("a.md"), &config);
    assert_eq!(a.preview, PreviewState::Null);
    assert_eq!(a.line, Some(4));
    let b = validate_file(dir.path(), &dir.path().join("b.md"), &config);
    assert_eq!(b.preview, PreviewState::Absent);
    assert_eq!(b.line, None);
}

#[test]
fn repeated_keys_keep_the_last_value() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "pages/_posts/dup.md",
        "---\ntitle: First\npreview: /img/ok.png\ntitle: Second\npreview: img/x.bmp\n---\n",
    );

    let summary = lint(dir.path());
    let result = result_for(&summary, "pages/_posts/dup.md");
    assert_eq!(result.title, "Second");
    assert_eq!(result.preview.text(), Some("img/x.bmp"));
    assert_eq!(result.line, Some(5));
    assert!(kinds(result).contains(&ErrorKind::RelativePath));
    assert!(kinds(result).contains(&ErrorKind::InvalidExtension));
    assert_eq!(summary.parse_errors, 0);
    assert_eq!(summary.invalid_previews, 1);
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_yield_identical_summaries() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "img/missing-2023.png", "png");
    write(dir.path(), "img/missing-2024.png", "png");
    write(dir.path(), "pages/_posts/a.md", &post("A", "preview: /img/missing.png"));
    write(dir.path(), "pages/_posts/b.md", &post("B", "preview: img/x.bmp"));
    write(dir.path(), "pages/_docs/c.md", "no frontmatter");
    write(dir.path(), "pages/_docs/d.md", &post("D", "preview: null"));

    let first = lint(dir.path());
    let second = lint(dir.path());
    assert_eq!(first, second);
    assert_eq!(first.total_files, 4);
}
