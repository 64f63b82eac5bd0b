/// Largest input the 32-bit size prefix can describe.
pub const MAX_INPUT_SIZE: usize = u32::MAX as usize;

/// Largest output a declared size prefix may ask for.
pub const MAX_DECOMPRESSED_SIZE: usize = u32::MAX as usize;
