//! # Configuration
//!
//! Configuration loading and management.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `LADDER__`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `LADDER_CONFIG_FILE` | Config file path | `ladder.toml` |
//! | `LADDER__LOG__LEVEL` | Log level | `info` |
//! | `LADDER__LOG__FORMAT` | Log format (json/pretty) | `json` |
//! | `LADDER__GAS__MARGIN_BPS` | Gas margin in basis points | `1000` |
//! | `LADDER__SLIPPAGE__DEFAULT_BPS` | Default slippage in basis points | `50` |
//!
//! Explorers can only be added through the file:
//!
//! ```toml
//! [[explorers]]
//! chain_id = 66
//! url = "https://www.oklink.com/okexchain"
//! family = "okex"
//! ```

use crate::application::services::slippage::{DEFAULT_SLIPPAGE_BPS, MAX_SLIPPAGE_BPS};
use crate::infrastructure::blockchain::explorer::ExplorerFamily;
use crate::infrastructure::blockchain::gas::GasMargin;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_FILE_ENV: &str = "LADDER_CONFIG_FILE";

/// Configuration file used when [`CONFIG_FILE_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "ladder.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "LADDER";

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse a configuration source.
    #[error("failed to load config: {0}")]
    Load(#[from] ::config::ConfigError),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include target (module path) in logs.
    #[serde(default = "default_true")]
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
            include_target: true,
        }
    }
}

// ============================================================================
// Helper Configuration
// ============================================================================

/// Gas estimate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasConfig {
    /// Margin added to gas estimates, in basis points.
    #[serde(default = "default_gas_margin_bps")]
    pub margin_bps: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            margin_bps: default_gas_margin_bps(),
        }
    }
}

impl GasConfig {
    /// Returns the configured margin.
    #[must_use]
    pub const fn margin(&self) -> GasMargin {
        GasMargin::new(self.margin_bps)
    }
}

/// Slippage configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlippageConfig {
    /// Tolerance used when the user has not set one, in basis points.
    #[serde(default = "default_slippage_bps")]
    pub default_bps: u32,
}

impl Default for SlippageConfig {
    fn default() -> Self {
        Self {
            default_bps: default_slippage_bps(),
        }
    }
}

/// A block explorer registered for a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Numeric chain ID.
    pub chain_id: u64,
    /// Explorer base URL.
    pub url: String,
    /// Explorer family; defaults to etherscan.
    #[serde(default)]
    pub family: ExplorerFamily,
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Gas configuration.
    #[serde(default)]
    pub gas: GasConfig,

    /// Slippage configuration.
    #[serde(default)]
    pub slippage: SlippageConfig,

    /// Explorer overrides and additions.
    #[serde(default)]
    pub explorers: Vec<ExplorerConfig>,
}

impl AppConfig {
    /// Loads configuration from the optional config file and environment variables.
    ///
    /// The file path comes from [`CONFIG_FILE_ENV`], falling back to
    /// [`DEFAULT_CONFIG_FILE`].
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path, env_source())
    }

    /// Loads configuration from `path` (optional) overlaid with `environment`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    pub fn load_from(path: &str, environment: Environment) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(File::with_name(path).format(FileFormat::Toml).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        tracing::debug!(path = %path, explorers = config.explorers.len(), "configuration loaded");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed or the result is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slippage.default_bps > MAX_SLIPPAGE_BPS {
            return Err(ConfigError::invalid(
                "slippage.default_bps",
                format!("must be at most {MAX_SLIPPAGE_BPS}"),
            ));
        }

        for (i, explorer) in self.explorers.iter().enumerate() {
            if !explorer.url.starts_with("http://") && !explorer.url.starts_with("https://") {
                return Err(ConfigError::invalid(
                    format!("explorers[{i}].url"),
                    "must be an http(s) URL",
                ));
            }
        }

        Ok(())
    }
}

/// Environment source for `LADDER__SECTION__KEY` variables.
#[must_use]
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_gas_margin_bps() -> u64 {
    GasMargin::DEFAULT_MARGIN_BPS
}

fn default_slippage_bps() -> u32 {
    DEFAULT_SLIPPAGE_BPS
}
