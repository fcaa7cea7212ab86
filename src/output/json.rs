//! JSON output formatter.
//!
//! Produces a pretty-printed document with the headline counts and every
//! invalid result:
//!
//! ```json
//! {
//!   "total_files": 3,
//!   "files_with_preview": 2,
//!   "valid_previews": 1,
//!   "invalid_previews": 1,
//!   "errors": [
//!     {
//!       "file": "pages/_posts/a.md",
//!       "title": "A",
//!       "preview": "img/a.png",
//!       "errors": [{ "type": "RELATIVE_PATH", "message": "...", "suggestion": "..." }]
//!     }
//!   ]
//! }
//! ```

use crate::report::{ErrorKind, ValidationSummary};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    total_files: usize,
    files_with_preview: usize,
    valid_previews: usize,
    invalid_previews: usize,
    errors: Vec<JsonResult<'a>>,
}

#[derive(serde::Serialize)]
struct JsonResult<'a> {
    file: &'a str,
    title: &'a str,
    preview: Option<&'a str>,
    errors: Vec<JsonError<'a>>,
}

#[derive(serde::Serialize)]
struct JsonError<'a> {
    #[serde(rename = "type")]
    kind: ErrorKind,
    message: &'a str,
    suggestion: Option<&'a str>,
}

/// Formats a [`ValidationSummary`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the summary cannot be serialized (should not happen with valid data).
pub fn format(summary: &ValidationSummary) -> String {
    let output = JsonOutput {
        total_files: summary.total_files,
        files_with_preview: summary.files_with_preview,
        valid_previews: summary.valid_previews,
        invalid_previews: summary.invalid_previews,
        errors: summary
            .invalid_results()
            .map(|r| JsonResult {
                file: &r.file,
                title: &r.title,
                preview: r.preview.text(),
                errors: r
                    .errors
                    .iter()
                    .map(|e| JsonError {
                        kind: e.kind,
                        message: &e.message,
                        suggestion: e.suggestion.as_deref(),
                    })
                    .collect(),
            })
            .collect(),
    };

    let mut json = serde_json::to_string_pretty(&output).expect("JSON serialization failed");
    json.push('\n');
    json
}
