//! exchangerate.host client for daily FX rates.

use crate::models::price::RatePoint;
use crate::services::market_data::{DailyRateProvider, MarketDataError};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration as StdDuration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.exchangerate.host";
const REQUEST_TIMEOUT_SECS: u64 = 15;
const RETRY_MIN_DELAY_MS: u64 = 100;
const RETRY_MAX_TIMES: usize = 2;

#[derive(Debug, Deserialize)]
struct TimeseriesResponse {
    #[serde(default)]
    rates: HashMap<NaiveDate, HashMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

pub struct ExchangeRateHostProvider {
    client: reqwest::Client,
    base_url: String,
}

impl ExchangeRateHostProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host. Tests use a local mock.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| MarketDataError::Http(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, MarketDataError> {
        let url = format!("{}{}", self.base_url, path);
        let fetch = || async {
            let response = self
                .client
                .get(&url)
                .query(query)
                .send()
                .await
                .map_err(|e| MarketDataError::Http(e.to_string()))?;
            if !response.status().is_success() {
                return Err(MarketDataError::Status(response.status().as_u16()));
            }
            response
                .json::<T>()
                .await
                .map_err(|e| MarketDataError::Malformed(e.to_string()))
        };

        fetch
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(StdDuration::from_millis(RETRY_MIN_DELAY_MS))
                    .with_max_times(RETRY_MAX_TIMES),
            )
            .when(MarketDataError::is_retryable)
            .notify(|err, dur| {
                warn!(error = %err, backoff_ms = dur.as_millis() as u64, "retrying rate request");
            })
            .await
    }
}

#[async_trait]
impl DailyRateProvider for ExchangeRateHostProvider {
    async fn timeseries(
        &self,
        base: &str,
        quote: &str,
        days: i64,
    ) -> Result<Vec<RatePoint>, MarketDataError> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(days);
        let query = [
            ("base", base.to_string()),
            ("symbols", quote.to_string()),
            ("start_date", start.to_string()),
            ("end_date", end.to_string()),
        ];

        let body: TimeseriesResponse = self.get_json("/timeseries", &query).await?;

        let mut points: Vec<RatePoint> = body
            .rates
            .into_iter()
            .filter_map(|(date, rates)| {
                rates.get(quote).map(|&rate| RatePoint { date, rate })
            })
            .collect();
        points.sort_by_key(|point| point.date);

        if points.is_empty() {
            return Err(MarketDataError::Empty);
        }

        debug!(base, quote, count = points.len(), "fetched daily timeseries");
        Ok(points)
    }

    async fn latest_rate(&self, base: &str, quote: &str) -> Result<f64, MarketDataError> {
        let query = [("base", base.to_string()), ("symbols", quote.to_string())];
        let body: LatestResponse = self.get_json("/latest", &query).await?;
        body.rates
            .get(quote)
            .copied()
            .ok_or(MarketDataError::Empty)
    }
}
