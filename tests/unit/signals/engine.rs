//! Unit tests for the signal engine

use fxpulse::config::EngineConfig;
use fxpulse::models::signal::{LiquiditySweep, SignalAction};
use fxpulse::signals::SignalEngine;

#[test]
fn test_insufficient_history_degrades_to_no_trade() {
    let engine = SignalEngine::default();
    let report = engine.analyze(&[1.0, 1.1]);

    assert!(report.crossover.is_none());
    assert!(report.liquidity.is_none());
    assert!(report.imbalance.is_none());
    assert!(report.action.is_none());
    assert!(report.reasons.is_empty());
}

#[test]
fn test_analyze_is_idempotent() {
    let engine = SignalEngine::default();
    let prices = [1.010, 1.008, 1.006, 1.004, 1.002, 1.000, 0.998, 1.030];
    assert_eq!(engine.analyze(&prices), engine.analyze(&prices));
}

#[test]
fn test_reason_order_is_crossover_imbalance_liquidity() {
    let engine = SignalEngine::default();
    // Downtrend into a spike: BUY cross, bullish gap, upward sweep.
    let prices = [1.010, 1.008, 1.006, 1.004, 1.002, 1.000, 0.998, 1.030];
    let report = engine.analyze(&prices);

    assert_eq!(report.crossover, Some(SignalAction::Buy));
    assert_eq!(report.liquidity, Some(LiquiditySweep::Up));
    assert!(report.imbalance.is_some());

    assert_eq!(report.reasons.len(), 3);
    assert!(report.reasons[0].starts_with("SMA crossover suggests"));
    assert!(report.reasons[1].starts_with("Imbalance detected"));
    assert!(report.reasons[2].starts_with("Liquidity event:"));
}

#[test]
fn test_agreeing_sweep_does_not_veto() {
    let engine = SignalEngine::default();
    let prices = [1.010, 1.008, 1.006, 1.004, 1.002, 1.000, 0.998, 1.030];
    let report = engine.analyze(&prices);

    // LIQ_UP does not contradict BUY, so the action survives.
    assert_eq!(report.action, Some(SignalAction::Buy));
    assert!(!report
        .reasons
        .iter()
        .any(|r| r.contains("contradicts")));
}

#[test]
fn test_opposing_sweep_vetoes_the_crossover() {
    let engine = SignalEngine::default();
    // SELL cross while the last price sweeps above the recent highs.
    let prices = [0.5, 1.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.01];
    let report = engine.analyze(&prices);

    assert_eq!(report.crossover, Some(SignalAction::Sell));
    assert_eq!(report.liquidity, Some(LiquiditySweep::Up));
    assert!(report.action.is_none());
    assert_eq!(
        report.reasons.last().map(String::as_str),
        Some("Liquidity sweep contradicts SMA -> hold")
    );
}

#[test]
fn test_imbalance_is_informational_only() {
    let engine = SignalEngine::default();
    // Quiet tail with a gap: no crossover, no sweep, but a bullish gap.
    let prices = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0005, 1.0004, 1.001];
    let report = engine.analyze(&prices);

    assert!(report.imbalance.is_some());
    assert!(report.crossover.is_none());
    assert!(report.action.is_none());
    assert_eq!(report.reasons.len(), 1);
    assert!(report.reasons[0].starts_with("Imbalance detected"));
}

#[test]
fn test_boundary_windows_are_configurable() {
    let config = EngineConfig {
        short_window: 2,
        long_window: 3,
        ..EngineConfig::default()
    };
    let engine = SignalEngine::new(config);

    // Four observations are enough once the long window shrinks to 3.
    let prices = [1.0, 1.0, 0.9, 1.2];
    let report = engine.analyze(&prices);
    assert_eq!(report.crossover, Some(SignalAction::Buy));
}
