//! Fxpulse signal engine: heuristic trade recommendations for a currency
//! pair from a daily price series.
//!
//! The engine itself ([`signals::SignalEngine`]) is pure and stateless;
//! everything else here is the plumbing around it: fetching the daily
//! series, configuration, logging, metrics, and the HTTP surface.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
