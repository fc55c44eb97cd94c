//! Constants for hash functions

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Internal block size of SHA-384 in bytes
pub const SHA384_BLOCK_SIZE: usize = 128;
