//! Environment-driven runtime configuration.

use std::env;

/// Get the current environment name (`ENVIRONMENT` var, defaults to "sandbox")
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: String,
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults suitable for local development.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let data_path =
            env::var("DATA_PATH").unwrap_or_else(|_| "data/ohlcv.json".to_string());

        Self { port, data_path }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            data_path: "data/ohlcv.json".to_string(),
        }
    }
}
