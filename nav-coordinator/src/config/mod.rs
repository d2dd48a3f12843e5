//! TOML-backed configuration for the coordinator
//!
//! Every field has a default, so a missing file or a partial file is valid.
//! The file lives in the XDG config directory on Linux and in a dot
//! directory under home elsewhere.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::events::ITEM_IN_VIEWPORT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CoordinatorConfig {
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Create/edit form limits and the server the mutation targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default = "default_min_name_length")]
    pub min_display_name_length: usize,
    #[serde(default = "default_max_name_length")]
    pub max_display_name_length: usize,
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Debounce window for committing scroll positions
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
    /// Prefix of published item keys
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_topic")]
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_item_height")]
    pub item_height: u32,
    #[serde(default = "default_separator_height")]
    pub separator_height: u32,
    /// Bottom safe-area inset added to the expanded sheet height
    #[serde(default)]
    pub bottom_inset: u32,
    #[serde(default = "default_close_button_id")]
    pub close_button_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default = "default_header_text_color")]
    pub header_text_color: String,
    #[serde(default = "default_close_icon_size")]
    pub close_icon_size: u16,
}

fn default_min_name_length() -> usize {
    2
}

fn default_max_name_length() -> usize {
    64
}

fn default_server_url() -> String {
    "http://localhost:8065".to_string()
}

fn default_scroll_debounce_ms() -> u64 {
    200
}

fn default_namespace() -> String {
    "Mentions".to_string()
}

fn default_topic() -> String {
    ITEM_IN_VIEWPORT.to_string()
}

fn default_item_height() -> u32 {
    48
}

fn default_separator_height() -> u32 {
    17
}

fn default_close_button_id() -> String {
    "close-your-servers".to_string()
}

fn default_header_text_color() -> String {
    "#ffffff".to_string()
}

fn default_close_icon_size() -> u16 {
    24
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            min_display_name_length: default_min_name_length(),
            max_display_name_length: default_max_name_length(),
            server_url: default_server_url(),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scroll_debounce_ms: default_scroll_debounce_ms(),
            namespace: default_namespace(),
            topic: default_topic(),
        }
    }
}

impl ViewportConfig {
    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            item_height: default_item_height(),
            separator_height: default_separator_height(),
            bottom_inset: 0,
            close_button_id: default_close_button_id(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            header_text_color: default_header_text_color(),
            close_icon_size: default_close_icon_size(),
        }
    }
}

impl CoordinatorConfig {
    /// Create a new builder for CoordinatorConfig
    pub fn builder() -> CoordinatorConfigBuilder {
        CoordinatorConfigBuilder::new()
    }

    /// Preset for phones with a home indicator: the sheet sits above the
    /// bottom safe area
    pub fn notched() -> Self {
        let mut config = Self::default();
        config.menu.bottom_inset = 34;
        config
    }

    /// Preset for a local development server with a snappier scroll sampler
    pub fn local(server_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.submission.server_url = server_url.into();
        config.viewport.scroll_debounce_ms = 50;
        config
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("nav-coordinator")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".nav-coordinator")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config = Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CoordinatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(dir) = config_path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
                info!("Created config directory: {:?}", dir);
            }
        }

        fs::write(config_path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved to {:?}", config_path);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let submission = &self.submission;
        if submission.min_display_name_length == 0 {
            bail!("submission.min_display_name_length must be at least 1");
        }
        if submission.min_display_name_length > submission.max_display_name_length {
            bail!(
                "submission.min_display_name_length ({}) exceeds max_display_name_length ({})",
                submission.min_display_name_length,
                submission.max_display_name_length
            );
        }
        if self.viewport.namespace.is_empty() {
            bail!("viewport.namespace must not be empty");
        }
        Ok(())
    }
}

/// Builder for CoordinatorConfig
pub struct CoordinatorConfigBuilder {
    config: CoordinatorConfig,
}

impl CoordinatorConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: CoordinatorConfig::default(),
        }
    }

    pub fn display_name_length(mut self, min: usize, max: usize) -> Self {
        self.config.submission.min_display_name_length = min;
        self.config.submission.max_display_name_length = max;
        self
    }

    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.config.submission.server_url = url.into();
        self
    }

    pub fn scroll_debounce(mut self, debounce: Duration) -> Self {
        self.config.viewport.scroll_debounce_ms = debounce.as_millis() as u64;
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.viewport.namespace = namespace.into();
        self
    }

    pub fn bottom_inset(mut self, inset: u32) -> Self {
        self.config.menu.bottom_inset = inset;
        self
    }

    pub fn header_text_color(mut self, color: impl Into<String>) -> Self {
        self.config.appearance.header_text_color = color.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<CoordinatorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for CoordinatorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoordinatorConfig::default();

        assert_eq!(config.submission.min_display_name_length, 2);
        assert_eq!(config.submission.max_display_name_length, 64);
        assert_eq!(config.viewport.scroll_debounce(), Duration::from_millis(200));
        assert_eq!(config.viewport.topic, ITEM_IN_VIEWPORT);
        assert_eq!(config.menu.close_button_id, "close-your-servers");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CoordinatorConfig::from_toml(
            r#"
            [viewport]
            scroll_debounce_ms = 50

            [menu]
            bottom_inset = 34
            "#,
        )
        .unwrap();

        assert_eq!(config.viewport.scroll_debounce_ms, 50);
        assert_eq!(config.viewport.namespace, "Mentions");
        assert_eq!(config.menu.bottom_inset, 34);
        assert_eq!(config.menu.item_height, 48);
        assert_eq!(config.submission, SubmissionConfig::default());
    }

    #[test]
    fn test_invalid_lengths_rejected() {
        let result = CoordinatorConfig::from_toml(
            r#"
            [submission]
            min_display_name_length = 10
            max_display_name_length = 5
            "#,
        );
        assert!(result.is_err());
        assert!(CoordinatorConfig::builder().display_name_length(0, 5).build().is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(CoordinatorConfig::notched().menu.bottom_inset, 34);

        let local = CoordinatorConfig::local("http://127.0.0.1:8065");
        assert_eq!(local.submission.server_url, "http://127.0.0.1:8065");
        assert_eq!(local.viewport.scroll_debounce_ms, 50);
        assert!(local.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CoordinatorConfig::builder()
            .display_name_length(3, 32)
            .scroll_debounce(Duration::from_millis(100))
            .namespace("Saved")
            .bottom_inset(20)
            .build()
            .unwrap();

        assert_eq!(config.submission.min_display_name_length, 3);
        assert_eq!(config.viewport.scroll_debounce_ms, 100);
        assert_eq!(config.viewport.namespace, "Saved");
        assert_eq!(config.menu.bottom_inset, 20);
    }

    #[test]
    fn test_toml_roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("nav-coordinator-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let config = CoordinatorConfig::builder().server_url("https://chat.example.com").build().unwrap();

        config.save_to(&path).unwrap();
        let loaded = CoordinatorConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("nav-coordinator-does-not-exist/config.toml");
        assert_eq!(CoordinatorConfig::load_from(&path).unwrap(), CoordinatorConfig::default());
    }
}
