/// Slot listing and end-slot quoting handlers
pub mod slots;
