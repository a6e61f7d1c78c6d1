//! Wiki configuration management for `_wiki/config.toml`.
//!
//! The input and output directories always come from the command line; the
//! config file only tunes the build. Command-line flags override file values.
//!
//! # Example
//!
//! ```toml
//! [build]
//! tab_size = 2
//! minify = false
//!
//! [build.recent]
//! enable = true
//! max_length = 10
//!
//! [build.dump]
//! enable = false
//! ```

mod build;
pub mod defaults;
mod error;

pub use build::BuildConfig;
pub use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Largest accepted `[build] tab_size`.
const MAX_TAB_SIZE: usize = 16;

/// Root configuration structure representing `_wiki/config.toml`
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct WikiConfig {
    /// Path to the config file it was loaded from, if any
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl WikiConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Directory with frame, index page, stylesheets and config.
    pub fn wiki_dir(&self) -> PathBuf {
        self.build.input.join(crate::scan::WIKI_DIR)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        self.build.input = cli.input.clone();
        self.build.output = cli.output.clone();

        let args = &cli.build_args;
        Self::update_option(&mut self.build.clean, args.clean.then_some(&true));
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.recent.enable, args.recent_list.as_ref());
        Self::update_option(
            &mut self.build.recent.max_length,
            args.recent_list_length.as_ref(),
        );
        Self::update_option(&mut self.build.dump.enable, args.full_dump.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute form for reliable comparison.
    ///
    /// The output directory may not exist yet, so the nearest existing
    /// ancestor is canonicalized and the missing components re-appended.
    fn normalize_path(path: &Path) -> PathBuf {
        if let Ok(path) = path.canonicalize() {
            return path;
        }
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        let mut missing = Vec::new();
        let mut current = absolute.as_path();
        while let (Some(parent), Some(name)) = (current.parent(), current.file_name()) {
            missing.push(name);
            if let Ok(mut resolved) = parent.canonicalize() {
                resolved.extend(missing.iter().rev());
                return resolved;
            }
            current = parent;
        }
        absolute
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        if !self.build.input.is_dir() {
            bail!("Input folder not found: {}", self.build.input.display());
        }

        let input = Self::normalize_path(&self.build.input);
        if Self::normalize_path(&self.build.output).starts_with(&input) {
            bail!(ConfigError::Validation(
                "output directory must not be inside the input directory".into()
            ));
        }

        if self.build.tab_size > MAX_TAB_SIZE {
            bail!(ConfigError::Validation(format!(
                "[build.tab_size] must be at most {MAX_TAB_SIZE}"
            )));
        }

        if self.build.recent.enable && self.build.recent.max_length == 0 {
            bail!(ConfigError::Validation(
                "[build.recent.max_length] must be positive when the recent list is enabled".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
