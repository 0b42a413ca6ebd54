//! # Slipway Core
//!
//! Domain types and the pure slot-availability engine for the boat-rental
//! booking platform. This crate has no I/O: the HTTP layer fetches
//! occupancies and prices, the engine here turns them into annotated slot
//! lattices and end-slot candidates.

pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
