//! Market data provider interface for daily exchange rates.

use crate::models::price::RatePoint;
use async_trait::async_trait;
use std::fmt;

/// Failure modes of a rate provider.
#[derive(Debug)]
pub enum MarketDataError {
    /// Transport-level failure (connect, timeout, TLS).
    Http(String),
    /// Upstream answered with a non-success status.
    Status(u16),
    /// Payload did not match the expected shape.
    Malformed(String),
    /// Upstream answered but carried no usable rates.
    Empty,
}

impl MarketDataError {
    /// Transient transport failures and upstream 5xx are worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            MarketDataError::Http(_) => true,
            MarketDataError::Status(code) => *code >= 500,
            _ => false,
        }
    }
}

impl fmt::Display for MarketDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataError::Http(msg) => write!(f, "HTTP request failed: {}", msg),
            MarketDataError::Status(code) => write!(f, "upstream returned status {}", code),
            MarketDataError::Malformed(msg) => write!(f, "malformed response: {}", msg),
            MarketDataError::Empty => write!(f, "no rates in response"),
        }
    }
}

impl std::error::Error for MarketDataError {}

#[async_trait]
pub trait DailyRateProvider {
    /// Daily closing rates for base/quote over the trailing `days` days,
    /// oldest first.
    async fn timeseries(
        &self,
        base: &str,
        quote: &str,
        days: i64,
    ) -> Result<Vec<RatePoint>, MarketDataError>;

    /// Latest available rate for base/quote.
    async fn latest_rate(&self, base: &str, quote: &str) -> Result<f64, MarketDataError>;
}
