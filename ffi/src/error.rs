//! error.rs
//! Boundary failures. Translated to a null return only at the C surface.
use bridge_core::compression::CompressionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoundaryError {
    /// The system allocator could not size the output buffer.
    #[error("allocation of {requested} bytes failed")]
    AllocationFailure { requested: usize },

    /// The codec engine rejected the input or hit an internal limit.
    #[error(transparent)]
    Codec(#[from] CompressionError),

    /// A required pointer argument was null.
    #[error("null {0} pointer")]
    NullArgument(&'static str),
}

/// Coarse failure classes reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AllocationFailure,
    CodecFailure,
    InvalidArgument,
}

impl BoundaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoundaryError::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            BoundaryError::Codec(_) => ErrorKind::CodecFailure,
            BoundaryError::NullArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}
