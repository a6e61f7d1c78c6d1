//! `[build]` section configuration.
//!
//! Contains build settings: paths, tab expansion, minification and the
//! aggregate views on the index page.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in config.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// tab_size = 4
/// minify = true
///
/// [build.recent]
/// enable = true
/// max_length = 20
///
/// [build.dump]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory holding the wiki pages (set from the command line).
    #[serde(skip)]
    #[educe(Default = defaults::build::input())]
    pub input: PathBuf,

    /// Build output directory (set from the command line).
    #[serde(skip)]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Spaces substituted for each tab in rendered markup.
    #[serde(default = "defaults::build::tab_size")]
    #[educe(Default = defaults::build::tab_size())]
    pub tab_size: usize,

    /// Minify written HTML.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Delete existing `*.html` files in the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Most-recently-modified list on the index page.
    #[serde(default)]
    pub recent: RecentConfig,

    /// Full-content dump page.
    #[serde(default)]
    pub dump: DumpConfig,
}

/// `[build.recent]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RecentConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Maximum number of pages listed.
    #[serde(default = "defaults::build::recent::max_length")]
    #[educe(Default = defaults::build::recent::max_length())]
    pub max_length: usize,
}

/// `[build.dump]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DumpConfig {
    /// Write every page into one `full.html`.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,
}

#[cfg(test)]
mod tests {
    use super::super::WikiConfig;

    #[test]
    fn test_build_config_defaults() {
        let config: WikiConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.tab_size, 2);
        assert!(!config.build.minify);
        assert!(!config.build.clean);
        assert!(!config.build.recent.enable);
        assert_eq!(config.build.recent.max_length, 10);
        assert!(!config.build.dump.enable);
    }

    #[test]
    fn test_build_config_full() {
        let config: WikiConfig = toml::from_str(
            r#"
            [build]
            tab_size = 4
            minify = true
            clean = true

            [build.recent]
            enable = true
            max_length = 3

            [build.dump]
            enable = true
        "#,
        )
        .unwrap();

        assert_eq!(config.build.tab_size, 4);
        assert!(config.build.minify);
        assert!(config.build.clean);
        assert!(config.build.recent.enable);
        assert_eq!(config.build.recent.max_length, 3);
        assert!(config.build.dump.enable);
    }

    #[test]
    fn test_build_config_rejects_unknown_fields() {
        let result: Result<WikiConfig, _> = toml::from_str(
            r#"
            [build]
            typo = 1
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_build_config_paths_not_deserialized() {
        let result: Result<WikiConfig, _> = toml::from_str(
            r#"
            [build]
            output = "elsewhere"
        "#,
        );
        assert!(result.is_err());
    }
}
