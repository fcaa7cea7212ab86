//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes: one block per
//! invalid file, followed by a counts table and a one-line verdict.

use crate::report::ValidationSummary;
use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// Formats a [`ValidationSummary`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header**: tool banner and timestamp.
/// 2. **Errors**: per file: path, title, preview, and each error, with
///    its suggestion when `show_suggestions` is set.
/// 3. **Summary**: file and preview counts.
/// 4. **Verdict**: all valid, or how many previews are broken.
pub fn format(summary: &ValidationSummary, show_suggestions: bool) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    // Header
    out.push_str(&format!(
        "\n{}\n",
        "  Preview URL Validator  ".bold().on_blue().white()
    ));
    out.push_str(&format!(
        "  Timestamp: {}\n",
        chrono::Utc::now().to_rfc3339()
    ));

    // Errors
    let mut invalid = summary.invalid_results().peekable();
    if invalid.peek().is_some() {
        out.push_str(&format!("\n{}\n", rule.red()));
        out.push_str(&format!("{}\n", "Validation Errors Found".red().bold()));
        out.push_str(&format!("{}\n\n", rule.red()));

        for result in invalid {
            let location = match result.line {
                Some(line) => format!("{}:{}", result.file, line),
                None => result.file.clone(),
            };
            out.push_str(&format!("{}\n", location.bold()));
            out.push_str(&format!("  Title: {}\n", result.title));
            out.push_str(&format!(
                "  Preview: {}\n",
                result.preview.text().unwrap_or("(none)")
            ));
            for error in &result.errors {
                out.push_str(&format!(
                    "  {} {}\n",
                    format!("✗ [{}]", error.kind).red(),
                    error.message
                ));
                if show_suggestions {
                    if let Some(ref suggestion) = error.suggestion {
                        out.push_str(&format!("    {}\n", format!("→ {suggestion}").yellow()));
                    }
                }
            }
            out.push('\n');
        }
    }

    // Summary
    out.push_str(&format!("\n{}\n", rule.cyan()));
    out.push_str(&format!("{}\n", "Validation Summary".cyan().bold()));
    out.push_str(&format!("{}\n\n", rule.cyan()));

    out.push_str(&format!("  Total files scanned:     {}\n", summary.total_files));
    out.push_str(&format!("  Files with preview:      {}\n", summary.files_with_preview));
    out.push_str(&format!("  Files without preview:   {}\n", summary.files_without_preview));
    out.push_str(&format!("  Files with null preview: {}\n", summary.files_with_null_preview));
    if summary.parse_errors > 0 {
        out.push_str(&format!(
            "  {}\n",
            format!("Files failing to parse:  {}", summary.parse_errors).red()
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "  {}\n",
        format!("✓ Valid previews:        {}", summary.valid_previews).green()
    ));
    out.push_str(&format!(
        "  {}\n",
        format!("✗ Invalid previews:      {}", summary.invalid_previews).red()
    ));
    out.push_str(&format!("    - Missing files:       {}\n", summary.missing_files));
    out.push_str(&format!("    - Format errors:       {}\n", summary.format_errors));

    if !summary.error_counts.is_empty() {
        out.push('\n');
        for (kind, count) in &summary.error_counts {
            out.push_str(&format!("    {:<20} {count}\n", kind.to_string().dimmed()));
        }
    }
    out.push('\n');

    // Verdict
    if summary.passed() {
        out.push_str(&format!(
            "{}\n",
            "All preview URLs are valid!".green().bold()
        ));
    } else if summary.invalid_previews > 0 {
        out.push_str(&format!(
            "{}\n",
            format!(
                "Found {} invalid preview URL(s)",
                summary.invalid_previews
            )
            .red()
            .bold()
        ));
    } else {
        out.push_str(&format!(
            "{}\n",
            format!(
                "Found {} file(s) with unreadable front matter",
                summary.parse_errors
            )
            .red()
            .bold()
        ));
    }

    out
}
