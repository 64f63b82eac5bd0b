//! telemetry/mod.rs
//! Allocation telemetry: live counters and immutable snapshots.
//!
//! Notes:
//! - The ledger is the only state that outlives a call; it is statistics only.
//! - Snapshots are plain data for JSON export and the C mirror struct.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
