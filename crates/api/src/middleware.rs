/// Principal extraction and group-membership checks
pub mod auth;
/// Error-to-HTTP response mapping
pub mod error_handling;
