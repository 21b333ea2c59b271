//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for a Nimbus site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Command palette settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Copy-to-clipboard feedback settings.
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Path prefix the static export is served under (e.g. "/nimbus-design-library").
    #[serde(default)]
    pub base_path: String,

    /// Whether page hrefs end with a slash, matching the static export layout.
    #[serde(default = "default_true")]
    pub trailing_slash: bool,
}

/// Command palette configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Whether the search palette is available.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Placeholder shown in the search input.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Key that opens the palette together with Cmd/Ctrl.
    #[serde(default = "default_shortcut_key")]
    pub shortcut_key: String,

    /// Optional JSON catalog replacing the built-in records.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// Copy-to-clipboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// How long the "copied" indicator stays visible, in milliseconds.
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Nimbus Design System".to_string()
}

fn default_placeholder() -> String {
    "Search components, guidelines, patterns...".to_string()
}

fn default_shortcut_key() -> String {
    "k".to_string()
}

fn default_feedback_ms() -> u64 {
    2000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_path: String::new(),
            trailing_slash: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            placeholder: default_placeholder(),
            shortcut_key: default_shortcut_key(),
            catalog: None,
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            feedback_ms: default_feedback_ms(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `NIMBUS__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix("NIMBUS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration embedded as a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        let base = &self.site.base_path;
        if !base.is_empty() && !base.starts_with('/') {
            return Err(CoreError::config(format!(
                "site.base_path must start with '/': {base}"
            )));
        }

        if base.len() > 1 && base.ends_with('/') {
            tracing::warn!("site.base_path should not have a trailing slash");
        }

        if self.search.shortcut_key.chars().count() != 1 {
            return Err(CoreError::config(format!(
                "search.shortcut_key must be a single character, got {:?}",
                self.search.shortcut_key
            )));
        }

        if self.clipboard.feedback_ms == 0 {
            return Err(CoreError::config("clipboard.feedback_ms must be positive"));
        }

        Ok(())
    }

    /// Get the site href for a navigation target such as "/design/colors".
    pub fn href_for(&self, target: &str) -> String {
        let base = self.site.base_path.trim_end_matches('/');
        format!("{base}{}", self.route_for(target))
    }

    /// Get the router path for a navigation target, without the base path.
    ///
    /// The client router adds `site.base_path` itself, so in-app navigation
    /// uses this rather than [`Config::href_for`].
    pub fn route_for(&self, target: &str) -> String {
        let path = target.trim_matches('/');

        if path.is_empty() {
            return "/".to_string();
        }

        if self.site.trailing_slash {
            format!("/{path}/")
        } else {
            format!("/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Nimbus Design System"
base_path = "/nimbus-design-library"
trailing_slash = true

[search]
enabled = true
placeholder = "Search..."
shortcut_key = "p"
catalog = "catalog.json"

[clipboard]
feedback_ms = 1500
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nimbus.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Nimbus Design System");
        assert_eq!(config.site.base_path, "/nimbus-design-library");
        assert!(config.site.trailing_slash);
        assert!(config.search.enabled);
        assert_eq!(config.search.placeholder, "Search...");
        assert_eq!(config.search.shortcut_key, "p");
        assert_eq!(config.search.catalog, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.clipboard.feedback_ms, 1500);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Minimal Site"
"#,
        )
        .expect("parse config");

        assert_eq!(config.site.base_path, "");
        assert!(config.site.trailing_slash);
        assert!(config.search.enabled);
        assert_eq!(config.search.shortcut_key, "k");
        assert!(config.search.catalog.is_none());
        assert_eq!(config.clipboard.feedback_ms, 2000);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.site.title, "Nimbus Design System");
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nimbus.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.site.base_path, "/nimbus-design-library");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_validation_errors() {
        let empty_title = Config::from_toml_str("[site]\ntitle = \"  \"\n");
        assert!(empty_title.is_err());

        let relative_base = Config::from_toml_str("[site]\ntitle = \"T\"\nbase_path = \"docs\"\n");
        assert!(relative_base.is_err());

        let long_key =
            Config::from_toml_str("[site]\ntitle = \"T\"\n[search]\nshortcut_key = \"ctrl\"\n");
        assert!(long_key.is_err());

        let no_feedback =
            Config::from_toml_str("[site]\ntitle = \"T\"\n[clipboard]\nfeedback_ms = 0\n");
        assert!(no_feedback.is_err());
    }

    #[test]
    fn test_href_for() {
        let mut config = Config::default();
        assert_eq!(config.href_for("/design/colors"), "/design/colors/");
        assert_eq!(config.href_for("/"), "/");

        config.site.base_path = "/nimbus-design-library".to_string();
        assert_eq!(
            config.href_for("/design/colors"),
            "/nimbus-design-library/design/colors/"
        );
        assert_eq!(config.href_for("/"), "/nimbus-design-library/");

        config.site.trailing_slash = false;
        assert_eq!(
            config.href_for("components/buttons"),
            "/nimbus-design-library/components/buttons"
        );
    }

    #[test]
    fn test_route_for_leaves_out_base_path() {
        let mut config = Config::default();
        config.site.base_path = "/docs".to_string();

        assert_eq!(config.route_for("/design/colors"), "/design/colors/");
        assert_eq!(config.route_for("/"), "/");
        assert_eq!(config.href_for("/design/colors"), "/docs/design/colors/");

        config.site.trailing_slash = false;
        assert_eq!(config.route_for("design/colors/"), "/design/colors");
    }
}
