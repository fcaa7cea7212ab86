//! Lint orchestration.
//!
//! [`run_lint`] is the main entry-point: it walks every configured content
//! directory, lints each Markdown file with [`validate_file`], and folds the
//! results into a [`ValidationSummary`]. Files are handled one at a time and
//! independently; a file that cannot be read or parsed becomes a
//! `PARSE_ERROR` result and the walk carries on.

use crate::checks;
use crate::config::Config;
use crate::error::FrontmatterError;
use crate::frontmatter;
use crate::report::{ErrorKind, PreviewState, ValidationError, ValidationResult, ValidationSummary};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lints every Markdown file under the configured content directories of
/// `root`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use preview_lint::{config::Config, lint};
///
/// let root = Path::new(".");
/// let config = Config::load(root, None).unwrap();
/// let summary = lint::run_lint(root, &config);
///
/// std::process::exit(if summary.passed() { 0 } else { 1 });
/// ```
pub fn run_lint(root: &Path, config: &Config) -> ValidationSummary {
    let mut summary = ValidationSummary::default();

    for dir in &config.content_dirs {
        let dir_path = root.join(dir);
        if !dir_path.is_dir() {
            tracing::debug!("Directory not found: {}", dir_path.display());
            continue;
        }
        tracing::info!("Scanning: {dir}");

        for file in collect_markdown(&dir_path) {
            summary.record(validate_file(root, &file, config));
        }
    }

    summary
}

/// Recursively collects `.md` files under `dir`, sorted by path.
///
/// Symlinks are followed, so a linked post is linted like any other file.
/// Entries that cannot be read (including dangling links) are logged and
/// skipped.
pub fn collect_markdown(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {e}", dir.display());
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .map(|e| e.into_path())
        .collect()
}

/// Lints a single content file.
pub fn validate_file(root: &Path, path: &Path, config: &Config) -> ValidationResult {
    let rel = relative_display(root, path);
    tracing::debug!("Checking: {rel}");

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to read {}: {e}", path.display());
            let err = FrontmatterError::from(e);
            return parse_error(rel, None, &err);
        }
    };

    let raw = frontmatter::raw_preview(&content);
    let fm = match frontmatter::extract(&content) {
        Ok(fm) => fm,
        Err(e) => {
            match &e {
                FrontmatterError::Missing => tracing::debug!("{rel}: no front matter"),
                _ => tracing::error!("YAML parse error in {rel}: {e}"),
            }
            return parse_error(rel, raw, &e);
        }
    };

    let line = raw.map(|r| r.line);
    let title = fm.title();
    let preview = match fm.get("preview") {
        None => {
            return ValidationResult::new(rel, title, PreviewState::Absent, None, vec![]);
        }
        Some(Value::Null) => {
            return ValidationResult::new(rel, title, PreviewState::Null, line, vec![]);
        }
        Some(value) => frontmatter::scalar_to_string(value).trim().to_string(),
    };

    let errors = checks::check_preview(root, &rel, &preview, config);
    if !errors.is_empty() {
        tracing::debug!("{rel}: {} problem(s) in preview", errors.len());
    }
    ValidationResult::new(rel, title, PreviewState::Value(preview), line, errors)
}

fn parse_error(
    rel: String,
    raw: Option<frontmatter::RawPreview>,
    err: &FrontmatterError,
) -> ValidationResult {
    let shown = raw
        .as_ref()
        .map_or_else(|| "(none)".to_string(), |r| r.text.clone());
    let error = ValidationError::new(&rel, &shown, ErrorKind::ParseError, err.to_string())
        .with_suggestion(ErrorKind::ParseError.remediation());
    let line = raw.as_ref().map(|r| r.line);
    ValidationResult::new(
        rel,
        "(parse error)".to_string(),
        PreviewState::Unparsed(raw.map(|r| r.text)),
        line,
        vec![error],
    )
}

/// `path` relative to `root`, `/`-separated.
fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
