//! HTTP endpoint server using Axum
//!
//! The serving boundary between the computation engine and whatever renders
//! the bands. Every bands request recomputes the full series from the current
//! candle data and settings; there is no cached indicator state.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::indicators::calculate_bollinger_bands;
use crate::models::{BollingerBandsSettings, Candle, SourceType};
use crate::services::MarketDataProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MarketDataProvider + Send + Sync>,
    pub start_time: Arc<Instant>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "bandtrix-engine"
    }))
}

#[derive(Debug, Deserialize)]
struct CandlesQuery {
    symbol: Option<String>,
    limit: Option<usize>,
}

/// Raw candle series, most recent `limit` entries (default all)
async fn get_candles(
    State(state): State<AppState>,
    Query(params): Query<CandlesQuery>,
) -> Result<Json<Vec<Candle>>, StatusCode> {
    let symbol = params.symbol.as_deref().unwrap_or("default");
    let candles = state
        .provider
        .get_candles(symbol, params.limit.unwrap_or(0))
        .map_err(|e| {
            error!(error = %e, "Failed to load candles");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(candles))
}

/// Query overrides applied on top of the default settings. Fractional
/// `length` or `offset` fail query deserialization; an unrecognized `source`
/// falls back to close.
#[derive(Debug, Deserialize)]
struct BandsQuery {
    symbol: Option<String>,
    limit: Option<usize>,
    length: Option<usize>,
    source: Option<String>,
    multiplier: Option<f64>,
    offset: Option<i32>,
}

impl BandsQuery {
    fn to_settings(&self) -> BollingerBandsSettings {
        let mut settings = BollingerBandsSettings::default();
        if let Some(length) = self.length {
            settings.length = length;
        }
        if let Some(source) = &self.source {
            settings.source = SourceType::from_name(source);
        }
        if let Some(multiplier) = self.multiplier {
            settings.std_dev_multiplier = multiplier;
        }
        if let Some(offset) = self.offset {
            settings.offset = offset;
        }
        settings
    }
}

/// Compute Bollinger Bands over the current candle series.
///
/// Invalid parameter combinations (validator rejections) yield an empty
/// `points` list with a 200 status, mirroring the fail-soft behavior at the
/// settings-form boundary. Only data-loading failures are server errors.
async fn get_bands(
    State(state): State<AppState>,
    Query(params): Query<BandsQuery>,
) -> Result<Json<Value>, StatusCode> {
    let symbol = params.symbol.as_deref().unwrap_or("default");
    let candles = state
        .provider
        .get_candles(symbol, params.limit.unwrap_or(0))
        .map_err(|e| {
            error!(error = %e, "Failed to load candles");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let settings = params.to_settings();
    let points = calculate_bollinger_bands(&candles, &settings);

    Ok(Json(json!({
        "settings": {
            "length": settings.length,
            "source": settings.source,
            "std_dev_multiplier": settings.std_dev_multiplier,
            "offset": settings.offset,
        },
        "candle_count": candles.len(),
        "points": points,
        "generated_at": chrono::Utc::now(),
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/candles", get(get_candles))
        .route("/api/bands", get(get_bands))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState {
        provider,
        start_time: Arc::new(Instant::now()),
    };

    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "HTTP server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
