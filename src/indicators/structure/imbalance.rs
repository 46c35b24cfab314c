//! Three-point imbalance (gap) detection

use crate::models::signal::{Imbalance, ImbalanceDirection};

/// Detect a directional gap between the 3rd-from-last and the latest
/// observation.
///
/// The middle observation is read but deliberately left out of the
/// decision; it is reserved for a three-bar refinement. The reported zone
/// is always (low, high) regardless of direction, and an exact tie means
/// no signal.
pub fn detect_imbalance(prices: &[f64]) -> Option<Imbalance> {
    if prices.len() < 3 {
        return None;
    }

    let a = prices[prices.len() - 3];
    let c = prices[prices.len() - 1];

    if a < c {
        return Some(Imbalance {
            direction: ImbalanceDirection::Bullish,
            low: a,
            high: c,
        });
    }
    if a > c {
        return Some(Imbalance {
            direction: ImbalanceDirection::Bearish,
            low: c,
            high: a,
        });
    }
    None
}
