//! # Slipway Collaborator Clients
//!
//! REST clients for the external services the availability engine depends
//! on: the occupancy service (existing reservations per boat and window) and
//! the pricing service (quotes per time range). Each collaborator is modeled
//! as an async trait so handlers can run against mocks in tests; the
//! `reqwest`-backed implementations live alongside.

pub mod occupancy;
pub mod pricing;

pub mod mock;

use std::time::Duration;

use eyre::Result;

/// Builds the shared HTTP client used by all collaborator calls.
///
/// Collaborator requests get a short timeout of their own; a slow upstream
/// fails the whole booking request rather than holding it open.
pub fn build_http_client(timeout_seconds: u64) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;

    Ok(client)
}
