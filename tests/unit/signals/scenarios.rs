//! Market scenario tests for the full analysis pass

use fxpulse::signals::{render_report, SignalEngine};
use fxpulse::models::signal::{ImbalanceDirection, LiquiditySweep};

#[test]
fn test_flat_market_reads_no_trade() {
    let engine = SignalEngine::default();
    let prices = [2.0; 10];
    let report = engine.analyze(&prices);

    assert!(report.crossover.is_none());
    assert!(report.liquidity.is_none());
    assert!(report.imbalance.is_none());
    assert!(report.action.is_none());
    assert!(report.reasons.is_empty());

    let rendered = render_report(Some(&report), "AUD/USD", 2.0, "2026-08-06");
    assert!(rendered.contains("Signal: NO TRADE"));
    assert!(!rendered.contains("Reasons:"));
}

#[test]
fn test_steady_rise_into_a_spike() {
    // Eight rising closes ending in a spike: the short average has been
    // above the long one the whole way, so no fresh cross completes; the
    // spike does clear the recent-high envelope.
    let engine = SignalEngine::default();
    let prices = [1.000, 1.001, 1.002, 1.003, 1.004, 1.005, 1.006, 1.010];
    let report = engine.analyze(&prices);

    assert_eq!(report.liquidity, Some(LiquiditySweep::Up));
    assert!(report.crossover.is_none());
    // Nothing to veto, so no override line and the action follows the
    // crossover result.
    assert_eq!(report.action, report.crossover);
    assert!(!report.reasons.iter().any(|r| r.contains("contradicts")));

    let gap = report.imbalance.expect("gap");
    assert_eq!(gap.direction, ImbalanceDirection::Bullish);
    assert_eq!((gap.low, gap.high), (1.005, 1.010));
}

#[test]
fn test_breakdown_after_a_rally() {
    // A rally rolling over hard enough to complete a downward cross and
    // undercut the recent lows: both detectors agree on the sell side.
    let engine = SignalEngine::default();
    let prices = [0.998, 1.000, 1.002, 1.004, 1.006, 1.008, 1.010, 0.980];
    let report = engine.analyze(&prices);

    assert_eq!(
        report.crossover,
        Some(fxpulse::models::signal::SignalAction::Sell)
    );
    assert_eq!(report.liquidity, Some(LiquiditySweep::Down));
    assert_eq!(report.action, report.crossover);
    assert!(!report.reasons.iter().any(|r| r.contains("contradicts")));
}
