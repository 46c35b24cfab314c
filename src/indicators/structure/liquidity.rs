//! Liquidity sweep detection against the recent high/low envelope

use crate::models::signal::LiquiditySweep;

/// Flag the latest price breaching the high or low of the `lookback`
/// observations immediately before it by more than the relative margin.
///
/// Margins are relative so the detector reads the same across price
/// magnitudes. Both comparisons are strict: a price landing exactly on
/// the threshold does not fire.
pub fn detect_liquidity_sweep(
    prices: &[f64],
    lookback: usize,
    up_margin: f64,
    down_margin: f64,
) -> Option<LiquiditySweep> {
    if lookback == 0 || prices.len() < lookback + 1 {
        return None;
    }

    let last = *prices.last()?;
    let window = &prices[prices.len() - 1 - lookback..prices.len() - 1];
    let prev_high = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let prev_low = window.iter().cloned().fold(f64::INFINITY, f64::min);

    if last > prev_high * up_margin {
        return Some(LiquiditySweep::Up);
    }
    if last < prev_low * down_margin {
        return Some(LiquiditySweep::Down);
    }
    None
}
