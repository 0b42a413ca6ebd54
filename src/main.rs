use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use slipway_api::config::ApiConfig;
use slipway_clients::{
    build_http_client,
    occupancy::{HttpOccupancyClient, OccupancyApi},
    pricing::{HttpPricingClient, PricingApi},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Build collaborator clients
    let http_client = build_http_client(config.collaborator_timeout)?;
    let occupancy: Arc<dyn OccupancyApi> = Arc::new(HttpOccupancyClient::new(
        http_client.clone(),
        config.occupancy_service_url.clone(),
    ));
    let pricing: Arc<dyn PricingApi> = Arc::new(HttpPricingClient::new(
        http_client,
        config.pricing_service_url.clone(),
    ));

    // Start API server
    slipway_api::start_server(config, occupancy, pricing).await?;

    Ok(())
}
