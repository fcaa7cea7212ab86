//! On-disk resolution of a `preview` path.
//!
//! Site generators serve images from a few places, so a preview counts as
//! present if any of these exist (with the leading `/` stripped):
//!
//! 1. `<root>/<path>`
//! 2. `<root>/assets/<path>`
//! 3. `<root>/<path>` with its first `assets` segment dropped
//!
//! When none do, the directory the image was expected in is searched for a
//! similarly named image to offer as a `Did you mean` suggestion.

use crate::config::Config;
use crate::report::{ErrorKind, ValidationError};
use std::path::{Path, PathBuf};

/// Number of leading stem characters compared when looking for a rename.
const SIMILAR_PREFIX_LEN: usize = 10;

/// Returns a `FILE_NOT_FOUND` error when no candidate location exists.
pub fn check_exists(
    root: &Path,
    file: &str,
    preview: &str,
    config: &Config,
) -> Option<ValidationError> {
    let value = preview.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("null") {
        return None;
    }

    let clean = value.trim_start_matches('/');
    if let Some(found) = resolve(root, clean) {
        tracing::debug!("{file}: preview resolved to {}", found.display());
        return None;
    }

    let suggestion = match find_similar(root, clean, config) {
        Some(similar) => format!("Did you mean: {similar}"),
        None => "Verify the file path and ensure the image exists".to_string(),
    };

    Some(
        ValidationError::new(
            file,
            value,
            ErrorKind::FileNotFound,
            format!("Preview image file not found: {clean}"),
        )
        .with_suggestion(suggestion),
    )
}

/// Candidate locations for `clean` (a preview path without its leading `/`),
/// in probe order.
pub fn candidates(root: &Path, clean: &str) -> Vec<PathBuf> {
    let mut paths = vec![root.join(clean), root.join("assets").join(clean)];

    let segments: Vec<&str> = clean.split('/').collect();
    if let Some(pos) = segments.iter().position(|s| *s == "assets") {
        let stripped: Vec<&str> = segments
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != pos)
            .map(|(_, s)| *s)
            .collect();
        paths.push(root.join(stripped.join("/")));
    }

    paths
}

/// The first candidate that exists on disk.
pub fn resolve(root: &Path, clean: &str) -> Option<PathBuf> {
    candidates(root, clean).into_iter().find(|p| p.exists())
}

/// Looks beside the expected location for an accepted image whose stem
/// overlaps the target's.
///
/// Two stems match when the first [`SIMILAR_PREFIX_LEN`] characters of one
/// (lowercased) occur anywhere in the other. Siblings are visited in
/// file-name order and the first match is returned as a root-relative
/// `/`-prefixed path.
pub fn find_similar(root: &Path, clean: &str, config: &Config) -> Option<String> {
    let target = root.join(clean);
    let target_stem = target.file_stem()?.to_string_lossy().to_lowercase();
    if target_stem.is_empty() {
        return None;
    }
    let parent = target.parent()?;

    let mut siblings: Vec<PathBuf> = std::fs::read_dir(parent)
        .ok()?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .collect();
    siblings.sort();

    let target_prefix = prefix(&target_stem);
    siblings
        .iter()
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| config.is_accepted_extension(e))
        })
        .find(|p| {
            let stem = p
                .file_stem()
                .map(|s| s.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            !stem.is_empty() && (stem.contains(&target_prefix) || target_stem.contains(&prefix(&stem)))
        })
        .map(|p| site_path(root, p))
}

fn prefix(stem: &str) -> String {
    stem.chars().take(SIMILAR_PREFIX_LEN).collect()
}

/// `/`-prefixed, `/`-separated path of `path` relative to `root`.
fn site_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", parts.join("/"))
}
