//! # Slot Engine
//!
//! The pure computational pipeline behind slot availability:
//!
//! 1. [`day_window`] resolves a target date plus caller UTC offset into the
//!    business day's UTC boundaries.
//! 2. [`lattice`] partitions that window into fixed 30-minute slots.
//! 3. [`availability`] marks slots unavailable against existing occupancies,
//!    elapsed time, and the customer minimum-duration rule.
//! 4. [`end_slots`] walks the annotated lattice forward from a chosen start
//!    slot to bound the valid end times.
//!
//! Every stage is a pure function over owned slot vectors, so each is
//! independently unit-testable and the whole pipeline is idempotent per
//! request. All I/O (fetching occupancies, pricing candidates) happens in the
//! HTTP layer around this pipeline.

pub mod availability;
pub mod day_window;
pub mod end_slots;
pub mod lattice;
