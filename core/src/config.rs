//! config.rs
//! Limits applied around the codec engine.

use crate::constants::{MAX_DECOMPRESSED_SIZE, MAX_INPUT_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryConfig {
    /// Largest input accepted by compress.
    /// Never above `MAX_INPUT_SIZE`, the size prefix cannot describe more.
    pub max_input_len: usize,

    /// Largest output a compressed stream may declare.
    /// - Checked before the codec allocates the output vector.
    pub max_decompressed_len: usize,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            max_input_len: MAX_INPUT_SIZE,
            max_decompressed_len: MAX_DECOMPRESSED_SIZE,
        }
    }
}

impl BoundaryConfig {
    /// Unset limits fall back to the format limits; set limits are clamped to them.
    pub fn new(max_input_len: Option<usize>, max_decompressed_len: Option<usize>) -> Self {
        Self {
            max_input_len: max_input_len.unwrap_or(MAX_INPUT_SIZE).min(MAX_INPUT_SIZE),
            max_decompressed_len: max_decompressed_len
                .unwrap_or(MAX_DECOMPRESSED_SIZE)
                .min(MAX_DECOMPRESSED_SIZE),
        }
    }

    pub fn with_max_decompressed_len(mut self, max: usize) -> Self {
        self.max_decompressed_len = max.min(MAX_DECOMPRESSED_SIZE);
        self
    }
}
