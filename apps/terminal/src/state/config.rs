//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIP_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use tip_core::validation::validate_max_split;
use tip_core::{Money, SliderSteps, ValidationError, DEFAULT_MAX_SPLIT};

/// Environment variable for the split stepper maximum.
pub const ENV_MAX_SPLIT: &str = "TIP_MAX_SPLIT";

/// Environment variable for slider quantization (0 = continuous).
pub const ENV_SLIDER_STEPS: &str = "TIP_SLIDER_STEPS";

/// Environment variable for the currency symbol shown in the summary.
pub const ENV_CURRENCY_SYMBOL: &str = "TIP_CURRENCY_SYMBOL";

/// Environment variable for the default log filter.
pub const ENV_LOG: &str = "TIP_LOG";

const DEFAULT_LOG_FILTER: &str = "info,tip=debug";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Highest split count the stepper allows
    pub max_split: u32,

    /// Tip slider quantization
    pub slider_steps: SliderSteps,

    /// Currency symbol (display only, no conversion)
    pub currency_symbol: String,

    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Split: up to 100 people
    /// - Slider: 5 steps (0, 17, 33, 50, 67, 83, 100 percent)
    /// - Currency: $
    fn default() -> Self {
        ConfigState {
            max_split: DEFAULT_MAX_SPLIT,
            slider_steps: SliderSteps::default(),
            currency_symbol: "$".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Creates a ConfigState from any key lookup.
    ///
    /// Unset keys keep their defaults. Set but unparsable keys are errors.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup(ENV_MAX_SPLIT) {
            let max: u32 = parse_value(ENV_MAX_SPLIT, &raw)?;
            config.max_split = validate_max_split(max)?;
        }

        if let Some(raw) = lookup(ENV_SLIDER_STEPS) {
            let steps: u32 = parse_value(ENV_SLIDER_STEPS, &raw)?;
            config.slider_steps = SliderSteps::try_from(steps)?;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Formats a calculated amount as a currency string.
    ///
    /// Amounts that cannot be shown in cents (NaN, infinity) render as `n/a`.
    ///
    /// ## Example
    /// ```rust
    /// use tip_terminal_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(12.5), "$12.50");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        match Money::from_amount(amount) {
            Some(money) => money.format_with(&self.currency_symbol),
            None => "n/a".to_string(),
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    OutOfRange(#[from] ValidationError),
}
