//! C FFI surface.
//!
//! Memory management follows these rules:
//! - Buffers returned by `lz4_compress()` / `lz4_decompress()` must be released
//!   with `lz4_free()`, exactly once. `free()` or any other allocator's
//!   release function on these pointers is forbidden.
//! - A null return means failure; `*out_len` is then `0`.
//! - `*out_len` is always a `uint64_t`, whatever the platform's `size_t`.
//!
//! # Safety
//! All functions in this module expect callers to provide valid pointers.
//! This is standard for C FFI - the caller is responsible for pointer validity.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ptr;
use std::slice;

use bridge_core::telemetry::LedgerSnapshot;
use libc::{c_uchar, c_void, size_t};
use tracing::{trace, warn};

use crate::boundary;
use crate::buffer::{OwnedBuffer, LEDGER};
use crate::error::BoundaryError;

/// FFI-safe mirror of the allocation ledger.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lz4BridgeStats {
    pub buffers_issued: u64,
    pub buffers_released: u64,
    pub live_buffers: u64,
    pub live_bytes: u64,
    pub compress_calls: u64,
    pub decompress_calls: u64,
    pub failures: u64,
}

impl From<LedgerSnapshot> for Lz4BridgeStats {
    fn from(s: LedgerSnapshot) -> Self {
        Self {
            buffers_issued: s.buffers_issued,
            buffers_released: s.buffers_released,
            live_buffers: s.live_buffers(),
            live_bytes: s.live_bytes(),
            compress_calls: s.compress_calls,
            decompress_calls: s.decompress_calls,
            failures: s.failures,
        }
    }
}

// ============================================================================
// Transform functions
// ============================================================================

/// Compresses `input_len` bytes at `input`.
///
/// # Returns
/// A buffer holding the compressed bytes, or NULL on failure.
///
/// # Safety
/// - `input` must be valid for `input_len` bytes (can be NULL if `input_len` is 0).
/// - `out_len` must be a valid pointer; it receives the buffer length, or 0 on failure.
/// - The returned buffer must be freed with `lz4_free()`.
#[no_mangle]
pub extern "C" fn lz4_compress(
    input: *const c_uchar,
    input_len: size_t,
    out_len: *mut u64,
) -> *mut c_uchar {
    export("compress", input, input_len, out_len, boundary::compress)
}

/// Decompresses a stream produced by `lz4_compress()` (or any encoder writing
/// the same size-prefixed LZ4 block layout).
///
/// # Returns
/// A buffer holding the original bytes, or NULL if the stream is malformed
/// or allocation fails.
///
/// # Safety
/// - `input` must be valid for `input_len` bytes (can be NULL if `input_len` is 0).
/// - `out_len` must be a valid pointer; it receives the buffer length, or 0 on failure.
/// - The returned buffer must be freed with `lz4_free()`.
#[no_mangle]
pub extern "C" fn lz4_decompress(
    input: *const c_uchar,
    input_len: size_t,
    out_len: *mut u64,
) -> *mut c_uchar {
    export("decompress", input, input_len, out_len, boundary::decompress)
}

// ============================================================================
// Release
// ============================================================================

/// Releases a buffer returned by `lz4_compress()` or `lz4_decompress()`.
///
/// # Safety
/// - `ptr` must be NULL (no-op) or a pointer returned by this library that
///   has not been released yet.
/// - The pointer must not be used after this call.
#[no_mangle]
pub extern "C" fn lz4_free(ptr: *mut c_void) {
    if let Some(buf) = unsafe { OwnedBuffer::from_raw(ptr as *mut u8) } {
        trace!(len = buf.len(), "releasing buffer");
        drop(buf);
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Writes the current allocation statistics to `out`. NULL `out` is a no-op.
#[no_mangle]
pub extern "C" fn lz4_bridge_stats(out: *mut Lz4BridgeStats) {
    if out.is_null() {
        return;
    }
    unsafe {
        *out = Lz4BridgeStats::from(LEDGER.snapshot());
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn export(
    op: &'static str,
    input: *const c_uchar,
    input_len: size_t,
    out_len: *mut u64,
    run: fn(&[u8]) -> Result<OwnedBuffer, BoundaryError>,
) -> *mut c_uchar {
    if out_len.is_null() {
        reject(op, BoundaryError::NullArgument("out_len"));
        return ptr::null_mut();
    }
    unsafe {
        *out_len = 0;
    }

    let input = match input_slice(input, input_len) {
        Ok(input) => input,
        Err(e) => {
            reject(op, e);
            return ptr::null_mut();
        }
    };

    // Codec and allocation failures are already logged and counted.
    match run(input) {
        Ok(buf) => {
            let (data, len) = buf.into_raw();
            unsafe {
                *out_len = len as u64;
            }
            data
        }
        Err(_) => ptr::null_mut(),
    }
}

fn input_slice<'a>(input: *const c_uchar, input_len: size_t) -> Result<&'a [u8], BoundaryError> {
    if input_len == 0 {
        return Ok(&[]);
    }
    if input.is_null() {
        return Err(BoundaryError::NullArgument("input"));
    }
    Ok(unsafe { slice::from_raw_parts(input, input_len) })
}

fn reject(op: &'static str, e: BoundaryError) {
    LEDGER.record_failure();
    warn!(op, kind = ?e.kind(), error = %e, "call rejected");
}
