//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::dashboard::{RenderOptions, MAX_BAR_WIDTH};
use crate::view::{RegionFilter, Tab, ViewError, ViewState};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Fixed seed for the data generator; random when unset
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_tab")]
    pub default_tab: String,

    #[serde(default = "default_region")]
    pub default_region: String,
}

fn default_tab() -> String {
    Tab::default().id().to_string()
}

fn default_region() -> String {
    "All".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_tab: default_tab(),
            default_region: default_region(),
        }
    }
}

impl DashboardConfig {
    /// Replace the configured defaults with explicitly chosen ones
    pub fn select(&mut self, tab: Option<Tab>, region: Option<RegionFilter>) {
        if let Some(tab) = tab {
            self.default_tab = tab.id().to_string();
        }
        if let Some(region) = region {
            self.default_region = region.to_string();
        }
    }

    /// Initial tab and region, rejecting unknown identifiers
    pub fn initial_state(&self) -> Result<ViewState, ViewError> {
        Ok(ViewState {
            tab: self.default_tab.parse::<Tab>()?,
            region: self.default_region.parse::<RegionFilter>()?,
        })
    }
}

/// Terminal rendering settings
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    #[serde(default = "default_color")]
    pub color: bool,

    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Accepted `bar_width` values
pub const BAR_WIDTH_RANGE: RangeInclusive<usize> = 1..=MAX_BAR_WIDTH;

fn default_bar_width() -> usize {
    32
}

fn default_color() -> bool {
    true
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
            color: default_color(),
            currency: default_currency(),
        }
    }
}

impl DisplayConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            bar_width: self.bar_width,
            color: self.color,
            currency: self.currency.clone(),
        }
    }

    /// Render options for an output stream; colour only on a terminal
    pub fn render_options_for(&self, terminal: bool) -> RenderOptions {
        RenderOptions {
            color: self.color && terminal,
            ..self.render_options()
        }
    }

    fn set_bar_width(&mut self, width: usize) {
        if BAR_WIDTH_RANGE.contains(&width) {
            self.bar_width = width;
        } else {
            tracing::warn!(
                "Ignoring bar_width {} outside {}..={}",
                width,
                BAR_WIDTH_RANGE.start(),
                BAR_WIDTH_RANGE.end()
            );
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        let mut config: Self = toml::from_str(content).map_err(|e| e.to_string())?;

        let width = config.display.bar_width;
        config.display.bar_width = default_bar_width();
        config.display.set_bar_width(width);

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("shoplens").join("config.toml")),
            Some(PathBuf::from("/etc/shoplens/config.toml")),
            Some(PathBuf::from("./shoplens.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Dashboard overrides
        if let Some(seed) = lookup("SHOPLENS_SEED") {
            match seed.parse() {
                Ok(s) => self.dashboard.seed = Some(s),
                Err(_) => tracing::warn!("Ignoring invalid SHOPLENS_SEED: {}", seed),
            }
        }
        if let Some(tab) = lookup("SHOPLENS_TAB") {
            self.dashboard.default_tab = tab;
        }
        if let Some(region) = lookup("SHOPLENS_REGION") {
            self.dashboard.default_region = region;
        }

        // Display overrides
        if let Some(width) = lookup("SHOPLENS_BAR_WIDTH") {
            match width.parse() {
                Ok(w) => self.display.set_bar_width(w),
                Err(_) => tracing::warn!("Ignoring invalid SHOPLENS_BAR_WIDTH: {}", width),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("SHOPLENS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SHOPLENS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# shoplens Configuration
#
# Environment variables override these settings:
# - SHOPLENS_SEED
# - SHOPLENS_TAB
# - SHOPLENS_REGION
# - SHOPLENS_BAR_WIDTH
# - SHOPLENS_LOG_LEVEL
# - SHOPLENS_LOG_FORMAT

[dashboard]
# Fixed seed for the mock data generator (omit for fresh data every session)
# seed = 42

# Tab shown when a session starts: overview, sales, customers, churn
default_tab = "overview"

# Region filter when a session starts: All, North, South, East, West
default_region = "All"

[display]
# Width of bar charts in characters (1-200)
bar_width = 32

# Emit ANSI colours (only when writing to a terminal)
color = true

# Currency symbol for money figures
currency = "$"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
