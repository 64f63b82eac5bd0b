//! compression/types.rs
//! Codec traits and the codec failure taxonomy.
use thiserror::Error;

/// Everything the codec engine can reject.
///
/// All variants are terminal for the call that produced them; nothing is
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressionError {
    #[error("codec {codec}: input of {have} bytes exceeds limit of {max} bytes")]
    InputTooLarge { codec: &'static str, have: usize, max: usize },

    #[error("codec {codec}: stream of {have} bytes is shorter than the {need}-byte size prefix")]
    Truncated { codec: &'static str, have: usize, need: usize },

    #[error("codec {codec}: declared size {declared} exceeds bound {max}")]
    DeclaredSizeTooLarge { codec: &'static str, declared: usize, max: usize },

    #[error("codec {codec}: corrupt stream: {msg}")]
    Corrupt { codec: &'static str, msg: String },

    #[error("codec {codec}: decoded {actual} bytes, stream declared {declared}")]
    LengthMismatch { codec: &'static str, declared: usize, actual: usize },

    #[error("codec {codec} panicked: {msg}")]
    CodecPanicked { codec: &'static str, msg: String },
}

impl CompressionError {
    pub fn codec(&self) -> &'static str {
        use CompressionError::*;
        match self {
            InputTooLarge { codec, .. }
            | Truncated { codec, .. }
            | DeclaredSizeTooLarge { codec, .. }
            | Corrupt { codec, .. }
            | LengthMismatch { codec, .. }
            | CodecPanicked { codec, .. } => codec,
        }
    }
}

// Require Send + Sync so one engine value can serve calls from any thread.
pub trait Compressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Compress a whole input into a fresh vector (`transform_forward`).
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}

pub trait Decompressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Decompress a whole stream into a fresh vector (`transform_inverse`).
    /// Malformed input must be rejected, never decoded into garbage.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}
