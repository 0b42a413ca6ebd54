use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An existing reservation or maintenance interval that blocks a boat.
///
/// Supplied by the occupancy service per query window; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyInterval {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
