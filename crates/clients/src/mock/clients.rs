use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use slipway_core::errors::BookingResult;
use slipway_core::models::{occupancy::OccupancyInterval, pricing::PriceQuote};

use crate::{occupancy::OccupancyApi, pricing::PricingApi};

// Mock collaborator clients for testing
mock! {
    pub OccupancyClient {}

    #[async_trait]
    impl OccupancyApi for OccupancyClient {
        async fn occupancies_for_window(
            &self,
            asset_id: &str,
            window_start: DateTime<Utc>,
            window_end: DateTime<Utc>,
        ) -> BookingResult<Vec<OccupancyInterval>>;
    }
}

mock! {
    pub PricingClient {}

    #[async_trait]
    impl PricingApi for PricingClient {
        async fn quote(
            &self,
            start_time: DateTime<Utc>,
            end_time: DateTime<Utc>,
        ) -> BookingResult<PriceQuote>;
    }
}
