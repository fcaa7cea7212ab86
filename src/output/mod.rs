//! Output formatting for lint summaries.
//!
//! Three formats are supported:
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | CI/CD integration       |
//!
//! Use [`format_report`] to render a [`ValidationSummary`] in any of the
//! above formats.

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::report::ValidationSummary;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text with a summary table.
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Formats a [`ValidationSummary`] in the requested [`OutputFormat`].
///
/// `show_suggestions` only affects the pretty format; JSON and SARIF always
/// carry suggestion text.
///
/// ```rust,no_run
/// use preview_lint::output::{format_report, OutputFormat};
/// # use preview_lint::report::ValidationSummary;
/// # fn example(summary: &ValidationSummary) {
/// let json = format_report(summary, OutputFormat::Json, false);
/// println!("{json}");
/// # }
/// ```
pub fn format_report(
    summary: &ValidationSummary,
    format: OutputFormat,
    show_suggestions: bool,
) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(summary, show_suggestions),
        OutputFormat::Json => json::format(summary),
        OutputFormat::Sarif => sarif::format(summary),
    }
}
