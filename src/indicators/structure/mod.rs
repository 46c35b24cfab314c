//! Market structure indicators: liquidity sweeps and imbalances

pub mod imbalance;
pub mod liquidity;

pub use imbalance::*;
pub use liquidity::*;
