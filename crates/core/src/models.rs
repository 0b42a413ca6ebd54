pub mod booking;
pub mod occupancy;
pub mod pricing;
pub mod slot;
