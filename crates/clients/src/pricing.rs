//! # Pricing Service Client
//!
//! Stateless quote lookups: one call per candidate end slot, each a pure
//! function of the requested time range from this side of the wire.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use slipway_core::errors::{BookingError, BookingResult};
use slipway_core::models::pricing::PriceQuote;
use tracing::error;

/// Price quotes consumed by the end-slot handler.
#[async_trait]
pub trait PricingApi: Send + Sync {
    /// Quotes a booking spanning `[start_time, end_time]`.
    async fn quote(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BookingResult<PriceQuote>;
}

/// REST implementation backed by the pricing service.
#[derive(Debug, Clone)]
pub struct HttpPricingClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPricingClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PricingApi for HttpPricingClient {
    async fn quote(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BookingResult<PriceQuote> {
        let url = format!("{}/api/prices", self.base_url);
        let start_param = start_time.to_rfc3339_opts(SecondsFormat::Secs, true);
        let end_param = end_time.to_rfc3339_opts(SecondsFormat::Secs, true);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("startTime", start_param.as_str()),
                ("endTime", end_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(%start_time, %end_time, "Pricing request failed: {}", e);
                BookingError::Upstream(eyre::eyre!("Pricing service unreachable: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(%start_time, %end_time, %status, "Pricing service returned error status");
            return Err(BookingError::Upstream(eyre::eyre!(
                "Pricing service returned status {}",
                status
            )));
        }

        let quote = response.json::<PriceQuote>().await.map_err(|e| {
            error!(%start_time, %end_time, "Pricing response could not be decoded: {}", e);
            BookingError::Upstream(eyre::eyre!("Invalid pricing response: {}", e))
        })?;

        Ok(quote)
    }
}
