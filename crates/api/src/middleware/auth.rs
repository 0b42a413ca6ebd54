//! # Authorization Module
//!
//! Authentication itself happens upstream at the platform gateway, which
//! verifies the caller's token and forwards the resolved identity in plain
//! headers. This module extracts that principal and gates the slot endpoints
//! on booking group membership. Both checks run before any computation or
//! collaborator I/O.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use slipway_core::errors::{BookingError, BookingResult};

use crate::middleware::error_handling::AppError;

/// Group granting full booking administration rights
pub const BOOKING_ADMIN: &str = "BOOKING_ADMIN";
/// Group granting regular booking access
pub const BOOKING_USER: &str = "BOOKING_USER";

/// Header carrying the authenticated user id, set by the gateway
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the user's comma-separated groups, set by the gateway
pub const USER_GROUPS_HEADER: &str = "x-user-groups";

/// An already-authenticated caller as forwarded by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
    pub groups: Vec<String>,
}

impl Principal {
    /// Checks that the caller belongs to one of the booking groups.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Authorization` when neither `BOOKING_ADMIN`
    /// nor `BOOKING_USER` is present.
    pub fn require_booking_access(&self) -> BookingResult<()> {
        let allowed = self
            .groups
            .iter()
            .any(|group| group == BOOKING_ADMIN || group == BOOKING_USER);

        if allowed {
            Ok(())
        } else {
            Err(BookingError::Authorization(format!(
                "User {} lacks booking access (requires {} or {})",
                self.user_id, BOOKING_ADMIN, BOOKING_USER
            )))
        }
    }
}

/// Extracts the gateway-forwarded principal from request headers.
///
/// A missing or unreadable user id header means the request never passed
/// the gateway and is rejected as unauthenticated.
#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                AppError(BookingError::Authentication(
                    "Missing authenticated user identity".to_string(),
                ))
            })?
            .to_string();

        let groups = parts
            .headers
            .get(USER_GROUPS_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|group| !group.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Principal { user_id, groups })
    }
}
