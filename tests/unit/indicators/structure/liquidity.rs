//! Unit tests for the liquidity sweep detector

use fxpulse::indicators::structure::detect_liquidity_sweep;
use fxpulse::models::signal::LiquiditySweep;

const UP: f64 = 1.002;
const DOWN: f64 = 0.998;

#[test]
fn test_insufficient_data() {
    let prices = [1.0, 1.0, 1.0, 1.0, 1.5];
    assert!(detect_liquidity_sweep(&prices, 5, UP, DOWN).is_none());
}

#[test]
fn test_upward_sweep() {
    let prices = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0021];
    assert_eq!(
        detect_liquidity_sweep(&prices, 5, UP, DOWN),
        Some(LiquiditySweep::Up)
    );
}

#[test]
fn test_downward_sweep() {
    let prices = [1.0, 1.0, 1.0, 1.0, 1.0, 0.9978];
    assert_eq!(
        detect_liquidity_sweep(&prices, 5, UP, DOWN),
        Some(LiquiditySweep::Down)
    );
}

#[test]
fn test_threshold_is_strict() {
    // Landing exactly on the margin must not fire, in either direction.
    let at_high = [1.0, 1.0, 1.0, 1.0, 1.0, 1.002];
    assert!(detect_liquidity_sweep(&at_high, 5, UP, DOWN).is_none());

    let at_low = [1.0, 1.0, 1.0, 1.0, 1.0, 0.998];
    assert!(detect_liquidity_sweep(&at_low, 5, UP, DOWN).is_none());
}

#[test]
fn test_envelope_excludes_the_latest_observation() {
    // The window is the five observations before the latest; the high at
    // the head of an older series must not count.
    let prices = [9.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0021];
    assert_eq!(
        detect_liquidity_sweep(&prices, 5, UP, DOWN),
        Some(LiquiditySweep::Up)
    );
}

#[test]
fn test_margins_are_scale_invariant() {
    let small: Vec<f64> = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0021].to_vec();
    let big: Vec<f64> = small.iter().map(|p| p * 10_000.0).collect();
    assert_eq!(
        detect_liquidity_sweep(&small, 5, UP, DOWN),
        detect_liquidity_sweep(&big, 5, UP, DOWN)
    );
}

#[test]
fn test_inside_the_envelope_is_quiet() {
    let prices = [1.0, 1.01, 0.99, 1.0, 1.005, 1.002];
    assert!(detect_liquidity_sweep(&prices, 5, UP, DOWN).is_none());
}
