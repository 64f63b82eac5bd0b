//! lz4-bridge-core
//!
//! Pure Rust side of the LZ4 boundary: codec engine integration, limits and
//! allocation telemetry.
//! No raw pointers, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;

pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        CompressionError, Compressor, Decompressor, Lz4Compressor, Lz4Decompressor,
    };
    pub use crate::config::BoundaryConfig;
    pub use crate::telemetry::{AllocationLedger, LedgerSnapshot};
}
