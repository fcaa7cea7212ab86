//! Error types.
//!
//! Problems with a `preview` value are *data* ([`ValidationError`](crate::report::ValidationError))
//! and never surface here. These enums cover the cases where the linter
//! itself cannot proceed: a broken configuration file, or a content file
//! whose frontmatter cannot be read at all.

use std::path::PathBuf;

/// Failure to load a [`Config`](crate::config::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Reasons a content file produces a `PARSE_ERROR` result.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("No front matter block found")]
    Missing,

    #[error("Could not parse front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Front matter is empty or not a key/value mapping")]
    NotAMapping,
}
