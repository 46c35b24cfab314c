//! Price series types produced by the market data layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily closing rate for the configured pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub rate: f64,
}
