//! Engine configuration.
//!
//! Provides the tunable bounds the declarative rule table and the level-based
//! sizing path are built from, with YAML loading and environment variable
//! interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use position_engine::config::{EngineConfig, load_config};
//!
//! // Load from default path (engine.yaml)
//! let config = load_config(None)?;
//!
//! // Access configuration values
//! println!("level risk: {}%", config.sizing.level_risk_pct);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Sizing defaults.
    #[serde(default)]
    pub sizing: SizingConfig,
    /// Validation rule bounds.
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Sizing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Percentage of account size risked by level-based sizing.
    ///
    /// The level-based field contract carries no explicit risk input, so the
    /// risk budget comes from here. Product owners tune this; it defaults to
    /// a conservative 1%.
    #[serde(default = "default_level_risk_pct")]
    pub level_risk_pct: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            level_risk_pct: default_level_risk_pct(),
        }
    }
}

const fn default_level_risk_pct() -> f64 {
    1.0
}

/// Validation rule bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Hard upper bound on `risk_percentage` (blocking).
    #[serde(default = "default_risk_pct_hard_max")]
    pub risk_pct_hard_max: f64,
    /// Lower edge of the advisory risk-percentage band.
    #[serde(default = "default_risk_pct_warn_min")]
    pub risk_pct_warn_min: f64,
    /// Upper edge of the advisory risk-percentage band.
    #[serde(default = "default_risk_pct_warn_max")]
    pub risk_pct_warn_max: f64,
    /// Maximum symbol length in characters.
    #[serde(default = "default_symbol_max_length")]
    pub symbol_max_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            risk_pct_hard_max: default_risk_pct_hard_max(),
            risk_pct_warn_min: default_risk_pct_warn_min(),
            risk_pct_warn_max: default_risk_pct_warn_max(),
            symbol_max_length: default_symbol_max_length(),
        }
    }
}

const fn default_risk_pct_hard_max() -> f64 {
    100.0
}

const fn default_risk_pct_warn_min() -> f64 {
    0.25
}

const fn default_risk_pct_warn_max() -> f64 {
    5.0
}

const fn default_symbol_max_length() -> usize {
    10
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "engine.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let path = path.unwrap_or("engine.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<EngineConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: EngineConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let mut result = input.to_string();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let Some(var_match) = cap.get(1) else {
            continue;
        };
        let full_match = full_match.as_str();
        let var_name = var_match.as_str();
        let default_value = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        };

        result = result.replace(full_match, &value);
    }

    result
}

/// Validate configuration values.
fn validate_config(config: &EngineConfig) -> Result<(), ConfigError> {
    let level = config.sizing.level_risk_pct;
    if level <= 0.0 || level > 100.0 {
        return Err(ConfigError::ValidationError(format!(
            "sizing.level_risk_pct must be in (0, 100], got {level}"
        )));
    }

    let v = &config.validation;
    if v.risk_pct_hard_max <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "validation.risk_pct_hard_max must be positive, got {}",
            v.risk_pct_hard_max
        )));
    }
    if v.risk_pct_warn_min >= v.risk_pct_warn_max {
        return Err(ConfigError::ValidationError(format!(
            "validation.risk_pct_warn_min ({}) must be below risk_pct_warn_max ({})",
            v.risk_pct_warn_min, v.risk_pct_warn_max
        )));
    }
    if v.symbol_max_length == 0 {
        return Err(ConfigError::ValidationError(
            "validation.symbol_max_length must be at least 1".to_string(),
        ));
    }

    Ok(())
}
