//! codecs/lz4.rs
//! LZ4 block compressor/decompressor with a 4-byte size prefix.
use lz4_flex::block::{compress_prepend_size, decompress as decompress_block};

use crate::compression::constants::{codec_names, MAX_EXPANSION_RATIO, SIZE_PREFIX_LEN};
use crate::compression::types::{CompressionError, Compressor, Decompressor};
use crate::config::BoundaryConfig;

/// LZ4 compressor over the `lz4_flex` block API.
/// Output layout: `[u32 LE uncompressed size][lz4 block]`.
#[derive(Debug, Clone, Copy)]
pub struct Lz4Compressor {
    max_input_len: usize,
}

/// LZ4 decompressor. Validates the size prefix before the codec allocates.
#[derive(Debug, Clone, Copy)]
pub struct Lz4Decompressor {
    max_decompressed_len: usize,
}

impl Lz4Compressor {
    pub fn new() -> Self {
        Self::from_config(&BoundaryConfig::default())
    }

    pub fn from_config(config: &BoundaryConfig) -> Self {
        Self { max_input_len: config.max_input_len }
    }
}

impl Default for Lz4Compressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for Lz4Compressor {
    fn name(&self) -> &'static str {
        codec_names::LZ4
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        // The prefix is a u32; longer inputs would be silently truncated by the cast.
        if input.len() > self.max_input_len {
            return Err(CompressionError::InputTooLarge {
                codec: codec_names::LZ4,
                have: input.len(),
                max: self.max_input_len,
            });
        }
        Ok(compress_prepend_size(input))
    }
}

impl Lz4Decompressor {
    pub fn new() -> Self {
        Self::from_config(&BoundaryConfig::default())
    }

    pub fn from_config(config: &BoundaryConfig) -> Self {
        Self { max_decompressed_len: config.max_decompressed_len }
    }

    /// Split a stream into its declared size and block, rejecting sizes no
    /// valid block of this length could produce.
    pub fn parse_prefix<'a>(&self, input: &'a [u8]) -> Result<(usize, &'a [u8]), CompressionError> {
        if input.len() < SIZE_PREFIX_LEN {
            return Err(CompressionError::Truncated {
                codec: codec_names::LZ4,
                have: input.len(),
                need: SIZE_PREFIX_LEN,
            });
        }

        let (prefix, block) = input.split_at(SIZE_PREFIX_LEN);
        let declared = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;

        if declared > self.max_decompressed_len {
            return Err(CompressionError::DeclaredSizeTooLarge {
                codec: codec_names::LZ4,
                declared,
                max: self.max_decompressed_len,
            });
        }

        let max_expansion = block.len().saturating_mul(MAX_EXPANSION_RATIO);
        if declared > max_expansion {
            return Err(CompressionError::DeclaredSizeTooLarge {
                codec: codec_names::LZ4,
                declared,
                max: max_expansion,
            });
        }

        Ok((declared, block))
    }
}

impl Default for Lz4Decompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Decompressor for Lz4Decompressor {
    fn name(&self) -> &'static str {
        codec_names::LZ4
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let (declared, block) = self.parse_prefix(input)?;

        let decompressed = decompress_block(block, declared).map_err(|e| CompressionError::Corrupt {
            codec: codec_names::LZ4,
            msg: e.to_string(),
        })?;

        // A block that ends early decodes "successfully" into a short vector.
        if decompressed.len() != declared {
            return Err(CompressionError::LengthMismatch {
                codec: codec_names::LZ4,
                declared,
                actual: decompressed.len(),
            });
        }

        Ok(decompressed)
    }
}
