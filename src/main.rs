//! One-shot signal run: fetch the daily series, analyze it, and print the
//! rendered report.

use dotenvy::dotenv;
use fxpulse::config::{AppConfig, EngineConfig};
use fxpulse::services::exchangerate::ExchangeRateHostProvider;
use fxpulse::services::market_data::DailyRateProvider;
use fxpulse::signals::{render_report, SignalEngine};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    fxpulse::logging::init_logging();

    let config = AppConfig::from_env();
    info!(
        base = %config.base,
        quote = %config.quote,
        days = config.lookback_days,
        "Fetching daily rates"
    );

    let provider = ExchangeRateHostProvider::new()?;
    let points = provider
        .timeseries(&config.base, &config.quote, config.lookback_days)
        .await?;

    let prices: Vec<f64> = points.iter().map(|point| point.rate).collect();
    let engine = SignalEngine::new(EngineConfig::default());
    let report = engine.analyze(&prices);

    let last = points.last().ok_or("no rates returned")?;
    println!(
        "{}",
        render_report(Some(&report), &config.pair(), last.rate, &last.date.to_string())
    );

    Ok(())
}
