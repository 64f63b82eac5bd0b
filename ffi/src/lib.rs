//! lz4-bridge-ffi
//!
//! C ABI over lz4-bridge-core. Owns the lifecycle of every buffer that
//! crosses the boundary: allocate once, report the length out-of-band,
//! release once through the same allocator.
//!
//! Rust callers can skip the raw surface and use [`compress`] /
//! [`decompress`], which return an [`OwnedBuffer`] that frees itself on drop.

mod boundary;
mod buffer;
mod error;
mod ffi;

pub use boundary::{
    compress, compress_using, compress_with, decompress, decompress_using, decompress_with,
};
pub use buffer::OwnedBuffer;
pub use error::{BoundaryError, ErrorKind};
pub use ffi::{lz4_bridge_stats, lz4_compress, lz4_decompress, lz4_free, Lz4BridgeStats};

use bridge_core::telemetry::LedgerSnapshot;

/// Current process-wide allocation counters.
pub fn ledger_snapshot() -> LedgerSnapshot {
    buffer::LEDGER.snapshot()
}
