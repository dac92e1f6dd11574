//! Project configuration management for `pagelens.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── paths      # [paths]
//! │   ├── metrics    # [metrics]
//! │   └── display    # [display]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError, ConfigDiagnostics
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                         |
//! |---------------|-------------------------------------------------|
//! | `[paths]`     | Content/pages roots and their extensions        |
//! | `[metrics]`   | Analytics snapshot location, cache TTL          |
//! | `[display]`   | Bounce-rate thresholds for colored output       |
//!
//! A missing config file is not an error: defaults apply and the current
//! directory becomes the workspace.

pub mod section;
pub mod types;
mod util;

pub use section::{DisplayConfig, MetricsConfig, PathsConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use util::{find_config_file, find_config_file_from};

use crate::{cli::Cli, core::ProjectLayout, debug, log, utils::path::normalize_path};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file name searched for when `-C` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "pagelens.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pagelens.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Workspace root - parent of config file, or cwd
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl ProjectConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The workspace root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let path = normalize_path(&path);
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = Some(path);
                config
            }
            None if cli.config != Path::new(DEFAULT_CONFIG_NAME) => {
                bail!(ConfigError::Io(
                    cli.config.clone(),
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                ));
            }
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG_NAME);
                Self {
                    root: normalize_path(&cwd),
                    ..Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.validate()?;
        debug!("config"; "workspace: {}", config.root.display());

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} (ignored): {}", display_path, fields.join(", "));
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Router layout rooted at the workspace.
    pub fn layout(&self) -> ProjectLayout {
        self.paths.layout(&self.root)
    }

    /// Absolute snapshot path.
    ///
    /// A relative path is taken from cwd when it exists there, otherwise
    /// from the workspace root.
    pub fn snapshot_path(&self) -> PathBuf {
        crate::utils::path::resolve_path(&self.metrics.snapshot, &self.root)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply `--content`, `--pages` and `--snapshot` overrides.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(content) = &cli.content {
            self.paths.content = self.workspace_relative(content);
        }
        if let Some(pages) = &cli.pages {
            self.paths.pages = self.workspace_relative(pages);
        }
        Self::update_option(&mut self.metrics.snapshot, cli.snapshot.as_ref());
    }

    /// Absolute roots inside the workspace are made relative to it.
    fn workspace_relative(&self, path: &Path) -> PathBuf {
        if path.is_absolute()
            && let Ok(rel) = normalize_path(path).strip_prefix(&self.root)
        {
            return rel.to_path_buf();
        }
        path.to_path_buf()
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, returning all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.paths.validate(&mut diag);
        self.metrics.validate(&mut diag);
        self.display.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
