//! Tagged outcome types for the detectors and the combined report.
//!
//! Each detector reports its outcome as an explicit variant so the
//! combiner's conflict handling is exhaustively checked by the compiler.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalAction::Buy => write!(f, "BUY"),
            SignalAction::Sell => write!(f, "SELL"),
        }
    }
}

/// Breach of the recent high/low envelope by more than the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquiditySweep {
    #[serde(rename = "LIQ_UP")]
    Up,
    #[serde(rename = "LIQ_DOWN")]
    Down,
}

impl fmt::Display for LiquiditySweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiquiditySweep::Up => write!(f, "LIQ_UP"),
            LiquiditySweep::Down => write!(f, "LIQ_DOWN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImbalanceDirection {
    #[serde(rename = "BULL")]
    Bullish,
    #[serde(rename = "BEAR")]
    Bearish,
}

impl fmt::Display for ImbalanceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImbalanceDirection::Bullish => write!(f, "BULL"),
            ImbalanceDirection::Bearish => write!(f, "BEAR"),
        }
    }
}

/// Directional gap between the 3rd-from-last and the latest observation.
///
/// The zone is always stored as (low, high) regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Imbalance {
    pub direction: ImbalanceDirection,
    pub low: f64,
    pub high: f64,
}

/// Combined outcome of one analysis pass.
///
/// `reasons` preserves evaluation order: crossover first, then imbalance,
/// then liquidity, then the veto note when liquidity contradicts the
/// crossover. Rendering depends on that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub crossover: Option<SignalAction>,
    pub liquidity: Option<LiquiditySweep>,
    pub imbalance: Option<Imbalance>,
    /// Final recommendation after conflict resolution; `None` means no trade.
    pub action: Option<SignalAction>,
    pub reasons: Vec<String>,
}
