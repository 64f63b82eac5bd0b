//! telemetry/counters.rs
//! Process-wide allocation counters for the boundary.
//!
//! Summary: Counts buffers issued and released, live bytes, calls and failures.
//! Converted into an immutable LedgerSnapshot on request.
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::telemetry::snapshot::LedgerSnapshot;

/// The two transforms the boundary wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Compress,
    Decompress,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Compress   => "compress",
            Operation::Decompress => "decompress",
        };
        f.write_str(name)
    }
}

/// Lock-free counters shared by every call.
///
/// Relaxed ordering throughout: the counters are statistics and never gate
/// an operation, so no happens-before edges are needed between them.
#[derive(Debug, Default)]
pub struct AllocationLedger {
    buffers_issued: AtomicU64,
    buffers_released: AtomicU64,
    bytes_issued: AtomicU64,
    bytes_released: AtomicU64,
    compress_calls: AtomicU64,
    decompress_calls: AtomicU64,
    failures: AtomicU64,
}

impl AllocationLedger {
    pub const fn new() -> Self {
        Self {
            buffers_issued: AtomicU64::new(0),
            buffers_released: AtomicU64::new(0),
            bytes_issued: AtomicU64::new(0),
            bytes_released: AtomicU64::new(0),
            compress_calls: AtomicU64::new(0),
            decompress_calls: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    /// Record one buffer handed out with `len` valid bytes.
    pub fn record_issue(&self, len: usize) {
        self.buffers_issued.fetch_add(1, Ordering::Relaxed);
        self.bytes_issued.fetch_add(len as u64, Ordering::Relaxed);
    }

    /// Record one buffer returned through release.
    pub fn record_release(&self, len: usize) {
        self.buffers_released.fetch_add(1, Ordering::Relaxed);
        self.bytes_released.fetch_add(len as u64, Ordering::Relaxed);
    }

    pub fn record_call(&self, op: Operation) {
        let counter = match op {
            Operation::Compress => &self.compress_calls,
            Operation::Decompress => &self.decompress_calls,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            buffers_issued: self.buffers_issued.load(Ordering::Relaxed),
            buffers_released: self.buffers_released.load(Ordering::Relaxed),
            bytes_issued: self.bytes_issued.load(Ordering::Relaxed),
            bytes_released: self.bytes_released.load(Ordering::Relaxed),
            compress_calls: self.compress_calls.load(Ordering::Relaxed),
            decompress_calls: self.decompress_calls.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}
