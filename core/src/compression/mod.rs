//! compression/mod.rs
//! Codec engine integration.
//!
//! Notes:
//! - The engine is a black box: block compression comes from `lz4_flex`.
//! - Each call is independent; codecs carry configuration only, never state.
//! - Wire format is the LZ4 block with a 4-byte little-endian size prefix.

pub mod codecs;
pub mod constants;
pub mod types;

pub use codecs::*;
pub use constants::*;
pub use types::*;
