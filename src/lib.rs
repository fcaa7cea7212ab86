//! # preview-lint
//!
//! Frontmatter `preview` validator for static-site content.
//!
//! `preview-lint` walks a site's content directories, reads the YAML
//! frontmatter of every Markdown file, and checks that the `preview` image
//! reference is well-formed (absolute, an image extension, no stray
//! whitespace or broken percent-escapes) and points at a file that exists.
//! Results are rendered as human-readable text, JSON, or [SARIF].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use preview_lint::{config::Config, lint, output};
//!
//! let root = Path::new(".");
//! let config = Config::load(root, None).expect("failed to load config");
//! let summary = lint::run_lint(root, &config);
//!
//! if !summary.passed() {
//!     let text = output::format_report(&summary, output::OutputFormat::Pretty, true);
//!     print!("{text}");
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]**: content directories and accepted extensions.
//! 2. **[`frontmatter`]**: isolate and parse the `---` block.
//! 3. **[`checks`]**: format rules and the on-disk existence probe.
//! 4. **[`lint`]**: walk content directories and build the summary.
//! 5. **[`report`]**: data types ([`report::ValidationResult`],
//!    [`report::ValidationSummary`]).
//! 6. **[`output`]**: pretty text, JSON, or SARIF.
//!
//! A missing or null `preview` is always valid; only a present value is
//! checked.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod checks;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod lint;
pub mod logging;
pub mod output;
pub mod report;
