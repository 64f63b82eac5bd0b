//! compression/codecs/mod.rs
//! Codec implementations.

pub mod lz4;

pub use lz4::*;
