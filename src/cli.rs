use clap::{Args, Parser, Subcommand};
use preview_lint::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "preview-lint",
    version,
    about = "Validate preview image URLs in static-site content frontmatter",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub check: CheckArgs,
}

/// Options for the default lint run.
#[derive(Args)]
pub struct CheckArgs {
    /// Project root containing the content directories
    #[arg(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output (one debug line per file)
    #[arg(long, short)]
    pub verbose: bool,

    /// Show fix suggestions for errors
    #[arg(long, short = 's', visible_alias = "fix-suggestions")]
    pub suggestions: bool,

    /// Output results as JSON (same as --format json)
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Custom config file path (defaults to <ROOT>/preview-lint.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CheckArgs {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every error kind with a description
    ListRules,

    /// Show full explanation for an error kind
    Explain {
        /// Error kind (e.g., "FILE_NOT_FOUND")
        kind: String,
    },
}
