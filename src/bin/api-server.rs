//! Bandtrix API Server
//!
//! Serves OHLCV candles and computed Bollinger Bands over HTTP for the chart
//! frontend. Stateless: every bands request recomputes from the data file.

use bandtrix::config::{get_environment, AppConfig};
use bandtrix::core::http::start_server;
use bandtrix::logging;
use bandtrix::services::FileMarketDataProvider;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env();
    let env = get_environment();
    info!("Starting Bandtrix API Server");
    info!(environment = %env, "Environment");
    info!(port = config.port, data_path = %config.data_path, "HTTP Server: http://0.0.0.0:{}", config.port);

    let provider = Arc::new(FileMarketDataProvider::new(&config.data_path));

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config.port, provider).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
