//! Configuration loading and management.
//!
//! The linter works out of the box with the built-in defaults. A
//! `preview-lint.toml` file at the project root (or a path passed with
//! `--config`) overrides them:
//!
//! ```toml
//! content_dirs = ["pages/_posts", "pages/_docs"]
//!
//! [preview]
//! extensions = ["png", "jpg", "webp"]
//! ```
//!
//! ```rust,no_run
//! use std::path::Path;
//! use preview_lint::config::Config;
//!
//! let config = Config::load(Path::new("."), None).expect("failed to load config");
//! assert!(config.is_accepted_extension("PNG"));
//! ```

use crate::error::ConfigError;
use std::path::Path;

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "preview-lint.toml";

/// Content directories scanned when no configuration overrides them.
pub const DEFAULT_CONTENT_DIRS: &[&str] = &[
    "pages/_posts",
    "pages/_docs",
    "pages/_quickstart",
    "pages/_about",
    "pages/_quests",
];

/// Image extensions accepted for `preview` when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Main configuration for a lint run.
///
/// All fields carry defaults so the config file can be omitted entirely.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Directories, relative to the project root, searched recursively for
    /// Markdown files.
    pub content_dirs: Vec<String>,
    /// Rules for the `preview` field itself.
    pub preview: PreviewConfig,
}

/// Settings for validating `preview` values.
///
/// Extensions are normalized to lowercase without a leading dot at load
/// time via [`PreviewConfig::normalize`].
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Accepted image extensions (e.g. `png`, `webp`).
    pub extensions: Vec<String>,
}

impl PreviewConfig {
    /// Lowercases every extension and strips a leading `.` in place.
    pub fn normalize(&mut self) {
        for ext in &mut self.extensions {
            *ext = ext.trim_start_matches('.').to_lowercase();
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dirs: DEFAULT_CONTENT_DIRS.iter().map(|d| d.to_string()).collect(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try [`CONFIG_FILE_NAME`] inside `root`.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the explicit path does not exist, the
    /// file cannot be read, or its TOML content fails to parse.
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Config, ConfigError> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(ConfigError::NotFound(p.to_path_buf())),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                default_path.exists().then_some(default_path)
            }
        };

        let Some(path) = config_path else {
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;
        config.preview.normalize();
        Ok(config)
    }

    /// Returns `true` if `ext` (with or without a leading dot, any case) is
    /// an accepted image extension.
    ///
    /// ```
    /// use preview_lint::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.is_accepted_extension(".JPEG"));
    /// assert!(!config.is_accepted_extension("bmp"));
    /// ```
    pub fn is_accepted_extension(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.');
        self.preview
            .extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(ext))
    }

    /// Accepted extensions as a sorted, dot-prefixed, comma-separated list
    /// (e.g. `.gif, .jpeg, .png`), for suggestion text.
    pub fn extension_list(&self) -> String {
        let mut exts: Vec<String> = self
            .preview
            .extensions
            .iter()
            .map(|e| format!(".{e}"))
            .collect();
        exts.sort();
        exts.dedup();
        exts.join(", ")
    }
}
