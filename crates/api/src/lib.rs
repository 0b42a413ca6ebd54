//! # Slipway API
//!
//! The API crate provides the web server for the Slipway slot-availability
//! service. It exposes the full-day slot listing and the priced end-slot
//! quoting flow over REST.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic around the pure engine
//!   in `slipway-core`
//! - **Middleware**: Provide cross-cutting concerns like principal extraction
//!   and error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; all persistence lives behind the
//! occupancy and pricing collaborators in `slipway-clients`.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for authorization and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use slipway_clients::{occupancy::OccupancyApi, pricing::PricingApi};
use slipway_core::config::ScheduleConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Encapsulates the collaborator clients and the fixed schedule parameters.
/// Handlers hold the collaborators as trait objects so tests can swap in
/// mocks.
pub struct ApiState {
    /// Business-day window used for slot generation
    pub schedule: ScheduleConfig,

    /// Asset id used when a request names none
    pub default_asset_id: String,

    /// Occupancy service client
    pub occupancy: Arc<dyn OccupancyApi>,

    /// Pricing service client
    pub pricing: Arc<dyn PricingApi>,
}

/// Builds the application router over the given state
///
/// Separate from [`start_server`] so route-level tests can drive the router
/// directly with mock collaborators.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot availability endpoints
        .merge(routes::slots::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and collaborators
///
/// This function initializes logging, configures routes, and starts the
/// HTTP server.
pub async fn start_server(
    config: config::ApiConfig,
    occupancy: Arc<dyn OccupancyApi>,
    pricing: Arc<dyn PricingApi>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        schedule: ScheduleConfig::default(),
        default_asset_id: config.default_asset_id.clone(),
        occupancy,
        pricing,
    });

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
