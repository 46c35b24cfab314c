//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::{AppConfig, EngineConfig};
use crate::metrics::Metrics;
use crate::services::exchangerate::ExchangeRateHostProvider;
use crate::services::market_data::{DailyRateProvider, MarketDataError};
use crate::signals::{render_report, SignalEngine};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub provider: Arc<dyn DailyRateProvider + Send + Sync>,
    pub engine: Arc<SignalEngine>,
    pub config: Arc<AppConfig>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "fxpulse-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct SignalQuery {
    base: Option<String>,
    quote: Option<String>,
    days: Option<i64>,
}

/// Fetch the daily series for the requested pair, analyze it, and return
/// the recommendation plus the rendered report.
async fn get_signal(
    State(state): State<AppState>,
    Query(params): Query<SignalQuery>,
) -> Result<Json<Value>, StatusCode> {
    let base = params.base.unwrap_or_else(|| state.config.base.clone());
    let quote = params.quote.unwrap_or_else(|| state.config.quote.clone());
    let days = params.days.unwrap_or(state.config.lookback_days);

    let points = state
        .provider
        .timeseries(&base, &quote, days)
        .await
        .map_err(|e| {
            state.metrics.provider_errors_total.inc();
            error!(error = %e, base = %base, quote = %quote, "Failed to fetch timeseries");
            match e {
                MarketDataError::Empty => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_GATEWAY,
            }
        })?;

    let prices: Vec<f64> = points.iter().map(|point| point.rate).collect();
    let report = state.engine.analyze(&prices);
    state.metrics.signal_evaluations_total.inc();

    let last = points.last().ok_or(StatusCode::NOT_FOUND)?;
    let pair = format!("{}/{}", base, quote);
    let rendered = render_report(Some(&report), &pair, last.rate, &last.date.to_string());

    Ok(Json(json!({
        "pair": pair,
        "date": last.date,
        "price": last.rate,
        "action": report.action,
        "reasons": report.reasons,
        "report": rendered,
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/signal", get(get_signal))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());
    let config = Arc::new(AppConfig::from_env());
    let provider = Arc::new(ExchangeRateHostProvider::new()?);
    let engine = Arc::new(SignalEngine::new(EngineConfig::default()));

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time,
        provider,
        engine,
        config,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
