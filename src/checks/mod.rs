//! Checks applied to a `preview` value.
//!
//! - [`format`] inspects the string itself (path shape, extension,
//!   whitespace, percent-encoding).
//! - [`existence`] resolves the path against the project tree and looks
//!   for a likely rename when the image is missing.
//!
//! [`check_preview`] runs both in order and is what the lint loop calls.

pub mod existence;
pub mod format;

use crate::config::Config;
use crate::report::ValidationError;
use std::path::Path;

/// Runs every check against one trimmed `preview` value.
///
/// The existence probe is skipped when a terminal format error
/// (`EMPTY_VALUE`, `STRING_NULL`) fired, since there is no path to look up.
pub fn check_preview(
    root: &Path,
    file: &str,
    preview: &str,
    config: &Config,
) -> Vec<ValidationError> {
    let mut errors = format::check_format(file, preview, config);
    if !errors.iter().any(|e| e.kind.is_terminal()) {
        errors.extend(existence::check_exists(root, file, preview, config));
    }
    errors
}
