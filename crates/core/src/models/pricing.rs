use serde::{Deserialize, Serialize};

/// Quote returned by the pricing service for one start/end time pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub total_amount: f64,
    pub currency: String,
}
