//! SMA (Simple Moving Average) indicator and crossover detection

use crate::models::signal::SignalAction;

/// Trailing arithmetic mean of the last `period` prices.
///
/// Returns `None` when the series holds fewer than `period` observations.
/// Early in a series that is the common case, not an error.
pub fn sma(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }
    let tail = &prices[prices.len() - period..];
    Some(tail.iter().sum::<f64>() / period as f64)
}

/// Detect a short/long SMA cross completing at the latest observation.
///
/// Compares the averages over the series excluding its last element with
/// the averages over the full series. Equality on the previous bar counts
/// as "not yet crossed", so a cross fires exactly once rather than on
/// every bar where the inequality already holds.
pub fn detect_sma_crossover(
    prices: &[f64],
    short: usize,
    long: usize,
) -> Option<SignalAction> {
    if prices.len() < long + 1 {
        return None;
    }

    let previous = &prices[..prices.len() - 1];
    let prev_short = sma(previous, short)?;
    let prev_long = sma(previous, long)?;
    let cur_short = sma(prices, short)?;
    let cur_long = sma(prices, long)?;

    if prev_short <= prev_long && cur_short > cur_long {
        return Some(SignalAction::Buy);
    }
    if prev_short >= prev_long && cur_short < cur_long {
        return Some(SignalAction::Sell);
    }
    None
}
