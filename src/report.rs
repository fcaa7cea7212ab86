use std::collections::BTreeMap;
use std::fmt;

/// Category of a problem found in a `preview` value.
///
/// Serialized in `SCREAMING_SNAKE_CASE` (e.g. `FILE_NOT_FOUND`), which is
/// also the identifier accepted by `preview-lint explain`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    ParseError,
    EmptyValue,
    StringNull,
    RelativePath,
    InvalidExtension,
    NoExtension,
    DoubleSpace,
    WhitespaceChars,
    EncodingIssue,
    FileNotFound,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 10] = [
        ErrorKind::ParseError,
        ErrorKind::EmptyValue,
        ErrorKind::StringNull,
        ErrorKind::RelativePath,
        ErrorKind::InvalidExtension,
        ErrorKind::NoExtension,
        ErrorKind::DoubleSpace,
        ErrorKind::WhitespaceChars,
        ErrorKind::EncodingIssue,
        ErrorKind::FileNotFound,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ErrorKind::ParseError => "PARSE_ERROR",
            ErrorKind::EmptyValue => "EMPTY_VALUE",
            ErrorKind::StringNull => "STRING_NULL",
            ErrorKind::RelativePath => "RELATIVE_PATH",
            ErrorKind::InvalidExtension => "INVALID_EXTENSION",
            ErrorKind::NoExtension => "NO_EXTENSION",
            ErrorKind::DoubleSpace => "DOUBLE_SPACE",
            ErrorKind::WhitespaceChars => "WHITESPACE_CHARS",
            ErrorKind::EncodingIssue => "ENCODING_ISSUE",
            ErrorKind::FileNotFound => "FILE_NOT_FOUND",
        }
    }

    /// Looks up a kind by its identifier, ignoring case.
    pub fn from_id(id: &str) -> Option<ErrorKind> {
        ErrorKind::ALL
            .into_iter()
            .find(|k| k.id().eq_ignore_ascii_case(id))
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::ParseError => "Front matter block is missing or cannot be parsed",
            ErrorKind::EmptyValue => "Preview value is empty or whitespace only",
            ErrorKind::StringNull => "Preview is the string 'null' instead of a YAML null",
            ErrorKind::RelativePath => "Preview URL does not start with /",
            ErrorKind::InvalidExtension => "Preview URL has an unrecognized image extension",
            ErrorKind::NoExtension => "Preview URL has no file extension",
            ErrorKind::DoubleSpace => "Preview URL contains double spaces",
            ErrorKind::WhitespaceChars => "Preview URL contains newline or tab characters",
            ErrorKind::EncodingIssue => "Preview URL has a '%' that is not a valid escape",
            ErrorKind::FileNotFound => "Preview image does not exist on disk",
        }
    }

    pub fn remediation(self) -> &'static str {
        match self {
            ErrorKind::ParseError => {
                "Open the file with a '---' line, close the block with '---', and keep valid YAML between them"
            }
            ErrorKind::EmptyValue => "Set a valid image path or remove the preview field",
            ErrorKind::StringNull => "Use 'preview: null' (without quotes) or 'preview: ~'",
            ErrorKind::RelativePath => "Prefix the path with / so it resolves from the site root",
            ErrorKind::InvalidExtension | ErrorKind::NoExtension => {
                "Point at an image with an accepted extension (.png, .jpg, .jpeg, .gif, .webp, .svg by default)"
            }
            ErrorKind::DoubleSpace => "Remove extra spaces from path",
            ErrorKind::WhitespaceChars => "Use a clean single-line path",
            ErrorKind::EncodingIssue => "Use properly URL-encoded characters or plain ASCII",
            ErrorKind::FileNotFound => {
                "Verify the file path and ensure the image exists under the project root or assets/"
            }
        }
    }

    /// Kinds tallied under [`ValidationSummary::format_errors`].
    pub fn is_format_error(self) -> bool {
        matches!(
            self,
            ErrorKind::RelativePath
                | ErrorKind::InvalidExtension
                | ErrorKind::NoExtension
                | ErrorKind::EmptyValue
        )
    }

    /// Kinds after which no further check runs on the same value.
    pub fn is_terminal(self) -> bool {
        matches!(self, ErrorKind::EmptyValue | ErrorKind::StringNull)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single problem detected in one file's `preview` value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationError {
    pub file: String,
    pub preview: String,
    pub kind: ErrorKind,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(file: &str, preview: &str, kind: ErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            file: file.to_string(),
            preview: preview.to_string(),
            kind,
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// What a file's frontmatter said about `preview`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewState {
    /// No `preview` key.
    Absent,
    /// `preview:`, `preview: null` or `preview: ~`.
    Null,
    /// A value that went through the checks.
    Value(String),
    /// The frontmatter could not be parsed. Holds the raw text of the
    /// `preview:` line when one was found.
    Unparsed(Option<String>),
}

impl PreviewState {
    /// Text to show for the preview, if there is any.
    pub fn text(&self) -> Option<&str> {
        match self {
            PreviewState::Value(text) => Some(text),
            PreviewState::Unparsed(raw) => raw.as_deref(),
            PreviewState::Absent | PreviewState::Null => None,
        }
    }
}

/// Outcome of linting one Markdown file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationResult {
    /// Path relative to the project root, `/`-separated.
    pub file: String,
    pub title: String,
    pub preview: PreviewState,
    /// 1-based line of the `preview:` key in the file, when it could be located.
    pub line: Option<usize>,
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Builds a result whose validity follows from `errors` being empty.
    pub fn new(
        file: String,
        title: String,
        preview: PreviewState,
        line: Option<usize>,
        errors: Vec<ValidationError>,
    ) -> Self {
        ValidationResult {
            valid: errors.is_empty(),
            file,
            title,
            preview,
            line,
            errors,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self.preview, PreviewState::Unparsed(_))
    }
}

/// Aggregate counters over every linted file plus the per-file results.
///
/// Filled one result at a time through [`ValidationSummary::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationSummary {
    pub total_files: usize,
    pub files_with_preview: usize,
    pub files_without_preview: usize,
    pub files_with_null_preview: usize,
    pub valid_previews: usize,
    pub invalid_previews: usize,
    pub missing_files: usize,
    pub format_errors: usize,
    pub parse_errors: usize,
    pub error_counts: BTreeMap<ErrorKind, usize>,
    pub results: Vec<ValidationResult>,
}

impl ValidationSummary {
    /// Folds one file's result into the counters and keeps the result.
    pub fn record(&mut self, result: ValidationResult) {
        self.total_files += 1;

        for error in &result.errors {
            *self.error_counts.entry(error.kind).or_insert(0) += 1;
        }

        match &result.preview {
            PreviewState::Unparsed(_) => self.parse_errors += 1,
            PreviewState::Absent => self.files_without_preview += 1,
            PreviewState::Null => self.files_with_null_preview += 1,
            PreviewState::Value(_) => self.record_value(&result),
        }

        self.results.push(result);
    }

    fn record_value(&mut self, result: &ValidationResult) {
        self.files_with_preview += 1;
        if result.valid {
            self.valid_previews += 1;
            return;
        }
        self.invalid_previews += 1;
        for error in &result.errors {
            if error.kind == ErrorKind::FileNotFound {
                self.missing_files += 1;
            } else if error.kind.is_format_error() {
                self.format_errors += 1;
            }
        }
    }

    /// `true` when no preview is invalid and every file parsed.
    pub fn passed(&self) -> bool {
        self.invalid_previews == 0 && self.parse_errors == 0
    }

    /// Results that carry at least one error, in scan order.
    pub fn invalid_results(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.valid)
    }

    /// Total number of errors across every result.
    pub fn error_count(&self) -> usize {
        self.error_counts.values().sum()
    }
}
