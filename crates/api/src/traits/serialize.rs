//! Canonical byte encodings for keys, ciphertexts and shared secrets

use crate::Result;
use zeroize::Zeroizing;

/// Public values with a fixed, canonical encoding.
pub trait Serialize: Sized {
    /// Parse a value, rejecting any encoding that is not canonical.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Encode the value.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Secret values whose encoding must not outlive its use.
pub trait SerializeSecret: Sized {
    /// Parse a value. The caller remains responsible for wiping `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Encode the value into a buffer that is wiped on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
