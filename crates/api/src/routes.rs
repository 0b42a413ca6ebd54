/// Liveness endpoints
pub mod health;
/// Slot availability endpoints
pub mod slots;
