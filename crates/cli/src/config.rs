//! Environment-driven configuration for the demo binary.

use armory_observability::tracing::UnknownLogFormat;
use armory_observability::LogFormat;
use thiserror::Error;

pub const MIN_PRICE_VAR: &str = "ARMORY_MIN_PRICE";
pub const MAX_PRICE_VAR: &str = "ARMORY_MAX_PRICE";
pub const LOG_FORMAT_VAR: &str = "ARMORY_LOG_FORMAT";

const DEFAULT_MIN_PRICE: f64 = 250.0;
const DEFAULT_MAX_PRICE: f64 = 556.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got `{value}`")]
    InvalidNumber { var: &'static str, value: String },

    #[error("ARMORY_LOG_FORMAT: {0}")]
    LogFormat(#[from] UnknownLogFormat),
}

/// Settings for one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Inclusive lower bound of the price filter.
    pub min_price: f64,
    /// Inclusive upper bound of the price filter.
    pub max_price: f64,
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            log_format: LogFormat::default(),
        }
    }
}

impl DemoConfig {
    /// Read settings from the process environment; unset variables keep their
    /// defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let min_price = match lookup(MIN_PRICE_VAR) {
            Some(value) => parse_price(MIN_PRICE_VAR, value)?,
            None => defaults.min_price,
        };
        let max_price = match lookup(MAX_PRICE_VAR) {
            Some(value) => parse_price(MAX_PRICE_VAR, value)?,
            None => defaults.max_price,
        };
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            min_price,
            max_price,
            log_format,
        })
    }
}

fn parse_price(var: &'static str, value: String) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(price) if !price.is_nan() => Ok(price),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}
