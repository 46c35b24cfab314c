//! Environment handling and engine configuration.

use std::env;

/// Deployment environment from `ENVIRONMENT`, defaulting to "sandbox".
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Tunable windows and margins for the detectors.
///
/// Defaults are the production heuristics; tests override individual
/// fields to probe boundary values without touching the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Short SMA window for crossover detection.
    pub short_window: usize,
    /// Long SMA window for crossover detection.
    pub long_window: usize,
    /// Number of observations before the latest that form the sweep envelope.
    pub sweep_lookback: usize,
    /// Relative margin above the envelope high that counts as an upward sweep.
    pub sweep_up_margin: f64,
    /// Relative margin below the envelope low that counts as a downward sweep.
    pub sweep_down_margin: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            short_window: 3,
            long_window: 7,
            sweep_lookback: 5,
            sweep_up_margin: 1.002,
            sweep_down_margin: 0.998,
        }
    }
}

/// Application settings for the I/O shells, sourced from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base currency of the pair (`PAIR_BASE`).
    pub base: String,
    /// Quote currency of the pair (`PAIR_QUOTE`).
    pub quote: String,
    /// How many days of daily rates to fetch (`LOOKBACK_DAYS`).
    pub lookback_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base: "AUD".to_string(),
            quote: "USD".to_string(),
            lookback_days: 30,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base: env::var("PAIR_BASE").unwrap_or(defaults.base),
            quote: env::var("PAIR_QUOTE").unwrap_or(defaults.quote),
            lookback_days: env::var("LOOKBACK_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.lookback_days),
        }
    }

    /// "BASE/QUOTE" label used in report headers.
    pub fn pair(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }
}
