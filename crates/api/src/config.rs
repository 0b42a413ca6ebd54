//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Slipway API
//! server. It retrieves configuration values from environment variables and
//! provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `OCCUPANCY_SERVICE_URL`: Base URL of the occupancy service (required)
//! - `PRICING_SERVICE_URL`: Base URL of the pricing service (required)
//! - `DEFAULT_ASSET_ID`: Boat used when a request names none (default: "primary")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Inbound request timeout (default: 30)
//! - `COLLABORATOR_TIMEOUT_SECONDS`: Timeout for outbound collaborator calls (default: 10)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the Slipway API server
///
/// Encapsulates networking, collaborator endpoints, and logging settings.
/// The business-day window itself is not configured here: it lives in
/// `slipway_core::config::ScheduleConfig` and is fixed platform-wide.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Base URL of the occupancy service
    pub occupancy_service_url: String,

    /// Base URL of the pricing service
    pub pricing_service_url: String,

    /// Asset id used when the caller does not specify one
    pub default_asset_id: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Inbound request timeout in seconds
    pub request_timeout: u64,

    /// Outbound collaborator call timeout in seconds
    pub collaborator_timeout: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// Collaborator base URLs are required and cause an error when unset;
    /// everything else falls back to a sensible default.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `OCCUPANCY_SERVICE_URL` or `PRICING_SERVICE_URL` is not set
    /// - The `API_PORT` value cannot be parsed as a u16
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Collaborator endpoints
        let occupancy_service_url = env::var("OCCUPANCY_SERVICE_URL")
            .wrap_err("OCCUPANCY_SERVICE_URL environment variable must be set")?;
        let pricing_service_url = env::var("PRICING_SERVICE_URL")
            .wrap_err("PRICING_SERVICE_URL environment variable must be set")?;
        let default_asset_id =
            env::var("DEFAULT_ASSET_ID").unwrap_or_else(|_| "primary".to_string());

        // Logging settings
        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let collaborator_timeout = env::var("COLLABORATOR_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Ok(Self {
            host,
            port,
            occupancy_service_url,
            pricing_service_url,
            default_asset_id,
            log_level,
            cors_origins,
            request_timeout,
            collaborator_timeout,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
