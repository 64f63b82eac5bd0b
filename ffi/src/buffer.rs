//! buffer.rs
//! Single-owner output buffers.
//!
//! Layout of every allocation (one `libc::malloc` block):
//!
//! ```text
//! base                 data (handed to the caller)
//! │                    │
//! ▼                    ▼
//! [ u64 length header ][ len bytes ...            ]
//! ```
//!
//! The header lets release rebuild the handle from the data pointer alone.
//! Zero-length buffers still own a header, so their data pointer is never null.
use std::fmt;
use std::mem::{size_of, ManuallyDrop};
use std::ops::Deref;
use std::ptr::{self, NonNull};
use std::slice;

use bridge_core::telemetry::AllocationLedger;

use crate::error::BoundaryError;

/// Accounting for every buffer this crate allocates.
pub(crate) static LEDGER: AllocationLedger = AllocationLedger::new();

const HEADER_LEN: usize = size_of::<u64>();

/// Bytes owned by exactly one side of the boundary.
///
/// There is no public constructor. Buffers come from `compress`/`decompress`
/// and are destroyed either by `Drop` or, after `into_raw`, by `lz4_free`.
/// Both paths end in the same `libc::free`.
pub struct OwnedBuffer {
    data: NonNull<u8>,
    len: usize,
}

// The allocation is exclusively owned and only read through `&self`.
unsafe impl Send for OwnedBuffer {}
unsafe impl Sync for OwnedBuffer {}

/// Reserve `len` data bytes plus the header. Returns the base pointer with
/// the header already written.
fn allocate(len: usize) -> Result<NonNull<u8>, BoundaryError> {
    let total = len
        .checked_add(HEADER_LEN)
        .ok_or(BoundaryError::AllocationFailure { requested: len })?;

    let base = unsafe { libc::malloc(total) } as *mut u8;
    let base = NonNull::new(base).ok_or(BoundaryError::AllocationFailure { requested: len })?;

    unsafe { ptr::write_unaligned(base.as_ptr() as *mut u64, len as u64) };
    Ok(base)
}

impl OwnedBuffer {
    /// Allocate exactly `bytes.len()` bytes and copy `bytes` in.
    pub(crate) fn copy_from(bytes: &[u8]) -> Result<Self, BoundaryError> {
        let base = allocate(bytes.len())?;
        let data = unsafe {
            let data = base.as_ptr().add(HEADER_LEN);
            ptr::copy_nonoverlapping(bytes.as_ptr(), data, bytes.len());
            NonNull::new_unchecked(data)
        };

        LEDGER.record_issue(bytes.len());
        Ok(Self { data, len: bytes.len() })
    }

    /// Rebuild a handle from a pointer produced by `into_raw`.
    ///
    /// # Safety
    /// `data` must be null or come from `OwnedBuffer::into_raw` and not have
    /// been rebuilt before. Anything else is a caller contract violation.
    pub(crate) unsafe fn from_raw(data: *mut u8) -> Option<Self> {
        let data = NonNull::new(data)?;
        let base = data.as_ptr().sub(HEADER_LEN);
        let len = ptr::read_unaligned(base as *const u64) as usize;
        Some(Self { data, len })
    }

    /// Give up ownership. The pointer must reach `lz4_free` exactly once.
    pub fn into_raw(self) -> (*mut u8, usize) {
        let this = ManuallyDrop::new(self);
        (this.data.as_ptr(), this.len)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }
}

impl Deref for OwnedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for OwnedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for OwnedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("data", &self.data)
            .field("len", &self.len)
            .finish()
    }
}

impl Drop for OwnedBuffer {
    fn drop(&mut self) {
        LEDGER.record_release(self.len);
        unsafe {
            let base = self.data.as_ptr().sub(HEADER_LEN);
            libc::free(base as *mut libc::c_void);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_overflow_is_allocation_failure() {
        let err = allocate(usize::MAX).unwrap_err();
        assert!(matches!(err, BoundaryError::AllocationFailure { requested } if requested == usize::MAX));
    }

    #[test]
    fn oversized_request_is_allocation_failure() {
        // No allocator can satisfy half the address space.
        let err = allocate(usize::MAX / 2).unwrap_err();
        assert!(matches!(err, BoundaryError::AllocationFailure { .. }));
    }

    #[test]
    fn raw_round_trip_recovers_length() {
        let buf = OwnedBuffer::copy_from(b"boundary").unwrap();
        let (ptr, len) = buf.into_raw();
        assert_eq!(len, 8);

        let rebuilt = unsafe { OwnedBuffer::from_raw(ptr) }.unwrap();
        assert_eq!(rebuilt.len(), 8);
        assert_eq!(&rebuilt[..], b"boundary");
    }

    #[test]
    fn empty_buffer_has_non_null_pointer() {
        let buf = OwnedBuffer::copy_from(&[]).unwrap();
        assert!(buf.is_empty());
        let (ptr, len) = buf.into_raw();
        assert!(!ptr.is_null());
        assert_eq!(len, 0);
        drop(unsafe { OwnedBuffer::from_raw(ptr) });
    }

    #[test]
    fn null_pointer_rebuilds_nothing() {
        assert!(unsafe { OwnedBuffer::from_raw(ptr::null_mut()) }.is_none());
    }
}
