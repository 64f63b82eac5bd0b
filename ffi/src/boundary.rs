//! boundary.rs
//! Safe Success/Failure path around the codec engine.
//!
//! Every operation allocates at most one `OwnedBuffer`, and only after the
//! codec has produced its complete output. On failure nothing is allocated.
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use bridge_core::compression::{
    CompressionError, Compressor, Decompressor, Lz4Compressor, Lz4Decompressor,
};
use bridge_core::config::BoundaryConfig;
use bridge_core::telemetry::Operation;
use tracing::{debug, warn};

use crate::buffer::{OwnedBuffer, LEDGER};
use crate::error::BoundaryError;

/// Compress `input` with the default limits.
pub fn compress(input: &[u8]) -> Result<OwnedBuffer, BoundaryError> {
    compress_with(input, &BoundaryConfig::default())
}

pub fn compress_with(input: &[u8], config: &BoundaryConfig) -> Result<OwnedBuffer, BoundaryError> {
    compress_using(&Lz4Compressor::from_config(config), input)
}

/// Decompress `input` with the default limits.
pub fn decompress(input: &[u8]) -> Result<OwnedBuffer, BoundaryError> {
    decompress_with(input, &BoundaryConfig::default())
}

pub fn decompress_with(input: &[u8], config: &BoundaryConfig) -> Result<OwnedBuffer, BoundaryError> {
    decompress_using(&Lz4Decompressor::from_config(config), input)
}

/// Run an arbitrary compressor through the boundary's allocation discipline.
pub fn compress_using<C>(codec: &C, input: &[u8]) -> Result<OwnedBuffer, BoundaryError>
where
    C: Compressor + ?Sized,
{
    transform(Operation::Compress, codec.name(), input, |bytes| codec.compress(bytes))
}

/// Run an arbitrary decompressor through the boundary's allocation discipline.
pub fn decompress_using<D>(codec: &D, input: &[u8]) -> Result<OwnedBuffer, BoundaryError>
where
    D: Decompressor + ?Sized,
{
    transform(Operation::Decompress, codec.name(), input, |bytes| codec.decompress(bytes))
}

fn transform<F>(
    op: Operation,
    codec: &'static str,
    input: &[u8],
    f: F,
) -> Result<OwnedBuffer, BoundaryError>
where
    F: FnOnce(&[u8]) -> Result<Vec<u8>, CompressionError>,
{
    LEDGER.record_call(op);

    let result = run_codec(codec, input, f).and_then(|output| OwnedBuffer::copy_from(&output));

    match &result {
        Ok(buf) => debug!(op = %op, codec, input_len = input.len(), output_len = buf.len(), "transform complete"),
        Err(e) => {
            LEDGER.record_failure();
            warn!(op = %op, codec, input_len = input.len(), kind = ?e.kind(), error = %e, "transform failed");
        }
    }
    result
}

/// Empty input is an empty stream in both directions and never reaches the codec.
/// Panics inside the codec are contained here and never unwind further.
fn run_codec<F>(codec: &'static str, input: &[u8], f: F) -> Result<Vec<u8>, BoundaryError>
where
    F: FnOnce(&[u8]) -> Result<Vec<u8>, CompressionError>,
{
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let output = catch_unwind(AssertUnwindSafe(|| f(input))).map_err(|payload| {
        CompressionError::CodecPanicked { codec, msg: panic_message(payload.as_ref()) }
    })??;
    Ok(output)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
