//! Trend indicators: SMA and SMA crossover

pub mod sma;

pub use sma::*;
