//! telemetry/snapshot.rs
//!
//! Immutable view of the allocation ledger.
//!
//! Design notes:
//! - Plain u64 fields only, so the FFI crate can mirror it field for field.
//! - Live counts are derived, never stored, so they cannot drift.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub buffers_issued: u64,
    pub buffers_released: u64,
    pub bytes_issued: u64,
    pub bytes_released: u64,
    pub compress_calls: u64,
    pub decompress_calls: u64,
    pub failures: u64,
}

impl LedgerSnapshot {
    pub fn live_buffers(&self) -> u64 {
        self.buffers_issued.saturating_sub(self.buffers_released)
    }

    pub fn live_bytes(&self) -> u64 {
        self.bytes_issued.saturating_sub(self.bytes_released)
    }

    /// Every buffer issued so far has been released exactly once.
    pub fn is_balanced(&self) -> bool {
        self.buffers_issued == self.buffers_released && self.bytes_issued == self.bytes_released
    }

    /// Counter growth between an earlier snapshot and this one.
    pub fn since(&self, earlier: &LedgerSnapshot) -> LedgerSnapshot {
        LedgerSnapshot {
            buffers_issued: self.buffers_issued.saturating_sub(earlier.buffers_issued),
            buffers_released: self.buffers_released.saturating_sub(earlier.buffers_released),
            bytes_issued: self.bytes_issued.saturating_sub(earlier.bytes_issued),
            bytes_released: self.bytes_released.saturating_sub(earlier.bytes_released),
            compress_calls: self.compress_calls.saturating_sub(earlier.compress_calls),
            decompress_calls: self.decompress_calls.saturating_sub(earlier.decompress_calls),
            failures: self.failures.saturating_sub(earlier.failures),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
