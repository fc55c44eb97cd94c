//! SHA-384 with zeroizing output
//!
//! Wraps the RustCrypto `sha2` implementation. Digests are returned in
//! [`Zeroizing`] buffers because the KEM hashes secret ring elements.

use sha2::Digest as _;
use zeroize::Zeroizing;

use bike_params::utils::hash::SHA384_OUTPUT_SIZE;

/// SHA-384 digest that is wiped on drop
pub type Sha384Digest = Zeroizing<[u8; SHA384_OUTPUT_SIZE]>;

/// Incremental SHA-384
#[derive(Clone, Default)]
pub struct Sha384 {
    inner: sha2::Sha384,
}

impl Sha384 {
    /// Output size in bytes
    pub const OUTPUT_SIZE: usize = SHA384_OUTPUT_SIZE;

    /// Start a new hash computation
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb more input
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finish and return the digest
    pub fn finalize(self) -> Sha384Digest {
        let mut out = Zeroizing::new([0u8; SHA384_OUTPUT_SIZE]);
        out.copy_from_slice(&self.inner.finalize());
        out
    }

    /// One-shot digest of `data`
    pub fn digest(data: &[u8]) -> Sha384Digest {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }

    /// Digest of the concatenation of `parts`, without building it
    pub fn digest_parts(parts: &[&[u8]]) -> Sha384Digest {
        let mut h = Self::new();
        for part in parts {
            h.update(part);
        }
        h.finalize()
    }
}

#[cfg(test)]
mod tests;
