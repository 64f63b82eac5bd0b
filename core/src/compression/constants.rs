/// Stable codec names used in errors and logs.
pub mod codec_names {
    pub const LZ4: &str = "lz4";
}

/// Width of the little-endian uncompressed-size prefix in front of every block.
pub const SIZE_PREFIX_LEN: usize = 4;

/// Upper bound on LZ4 expansion: one block byte never decodes to more than
/// 255 output bytes.
pub const MAX_EXPANSION_RATIO: usize = 255;
