//! # Occupancy Service Client
//!
//! Read-only view of existing reservations. The occupancy service returns
//! every occupancy whose interval intersects the requested window; nothing
//! is re-filtered locally, the asset id is passed straight through.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use slipway_core::errors::{BookingError, BookingResult};
use slipway_core::models::occupancy::OccupancyInterval;
use tracing::error;

/// Occupancy lookups consumed by the slot handlers.
#[async_trait]
pub trait OccupancyApi: Send + Sync {
    /// Returns all occupancies for `asset_id` intersecting
    /// `[window_start, window_end]`.
    async fn occupancies_for_window(
        &self,
        asset_id: &str,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> BookingResult<Vec<OccupancyInterval>>;
}

/// REST implementation backed by the occupancy service.
#[derive(Debug, Clone)]
pub struct HttpOccupancyClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOccupancyClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl OccupancyApi for HttpOccupancyClient {
    async fn occupancies_for_window(
        &self,
        asset_id: &str,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> BookingResult<Vec<OccupancyInterval>> {
        let url = format!("{}/api/occupancies", self.base_url);
        let window_start_param = window_start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let window_end_param = window_end.to_rfc3339_opts(SecondsFormat::Secs, true);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("assetId", asset_id),
                ("windowStart", window_start_param.as_str()),
                ("windowEnd", window_end_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(asset_id, %window_start, %window_end, "Occupancy request failed: {}", e);
                BookingError::Upstream(eyre::eyre!("Occupancy service unreachable: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(asset_id, %window_start, %window_end, %status, "Occupancy service returned error status");
            return Err(BookingError::Upstream(eyre::eyre!(
                "Occupancy service returned status {}",
                status
            )));
        }

        let occupancies = response.json::<Vec<OccupancyInterval>>().await.map_err(|e| {
            error!(asset_id, "Occupancy response could not be decoded: {}", e);
            BookingError::Upstream(eyre::eyre!("Invalid occupancy response: {}", e))
        })?;

        Ok(occupancies)
    }
}
