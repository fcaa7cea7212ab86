//! String-level validation of a `preview` value.
//!
//! | Kind | Fires when |
//! |------|------------|
//! | `EMPTY_VALUE` | value is empty or whitespace (stops further checks) |
//! | `STRING_NULL` | value is the text `null`, any case (stops further checks) |
//! | `RELATIVE_PATH` | value does not start with `/` |
//! | `INVALID_EXTENSION` | extension present but not accepted |
//! | `NO_EXTENSION` | no extension at all |
//! | `DOUBLE_SPACE` | value contains two consecutive spaces |
//! | `WHITESPACE_CHARS` | value contains a newline or tab |
//! | `ENCODING_ISSUE` | a `%` is not followed by two hex digits |

use crate::config::Config;
use crate::report::{ErrorKind, ValidationError};
use std::path::Path;

/// Applies every format rule to `preview` and returns the errors found.
///
/// Leading and trailing whitespace is ignored; interior whitespace is not.
pub fn check_format(file: &str, preview: &str, config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let value = preview.trim();
    if value.is_empty() {
        errors.push(
            ValidationError::new(
                file,
                &format!("{preview:?}"),
                ErrorKind::EmptyValue,
                "Preview value is empty or whitespace only",
            )
            .with_suggestion(ErrorKind::EmptyValue.remediation()),
        );
        return errors;
    }

    if value.eq_ignore_ascii_case("null") {
        errors.push(
            ValidationError::new(
                file,
                value,
                ErrorKind::StringNull,
                "Preview is string 'null' instead of YAML null",
            )
            .with_suggestion(ErrorKind::StringNull.remediation()),
        );
        return errors;
    }

    if !value.starts_with('/') {
        errors.push(
            ValidationError::new(
                file,
                value,
                ErrorKind::RelativePath,
                "Preview URL should start with /",
            )
            .with_suggestion(format!("Use '/{value}' for absolute path")),
        );
    }

    match extension(value) {
        Some(ext) if config.is_accepted_extension(ext) => {}
        Some(ext) => errors.push(
            ValidationError::new(
                file,
                value,
                ErrorKind::InvalidExtension,
                format!("Invalid image extension: .{}", ext.to_lowercase()),
            )
            .with_suggestion(format!("Valid extensions: {}", config.extension_list())),
        ),
        None => errors.push(
            ValidationError::new(
                file,
                value,
                ErrorKind::NoExtension,
                "Preview URL has no file extension",
            )
            .with_suggestion("Add an image extension like .png, .jpg, .webp"),
        ),
    }

    if value.contains("  ") {
        errors.push(
            ValidationError::new(
                file,
                value,
                ErrorKind::DoubleSpace,
                "Preview URL contains double spaces",
            )
            .with_suggestion(ErrorKind::DoubleSpace.remediation()),
        );
    }

    if value.contains(['\n', '\t']) {
        errors.push(
            ValidationError::new(
                file,
                &format!("{value:?}"),
                ErrorKind::WhitespaceChars,
                "Preview URL contains newline or tab characters",
            )
            .with_suggestion(ErrorKind::WhitespaceChars.remediation()),
        );
    }

    if has_bad_percent_escape(value) {
        errors.push(
            ValidationError::new(
                file,
                value,
                ErrorKind::EncodingIssue,
                "Preview URL may have encoding issues",
            )
            .with_suggestion(ErrorKind::EncodingIssue.remediation()),
        );
    }

    errors
}

/// Extension of the last path component, without the dot.
///
/// Dot-files such as `/img/.png` and names ending in a bare `.` have no
/// extension.
pub fn extension(value: &str) -> Option<&str> {
    Path::new(value)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
}

/// `true` if any `%` in `value` is not followed by two hex digits.
pub fn has_bad_percent_escape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}
