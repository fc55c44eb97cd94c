//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! The associated types carry the serialization contracts, so a caller can
//! move keys and ciphertexts across the wire without knowing the scheme.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Key Encapsulation Mechanism with scheme-specific key and ciphertext types.
pub trait Kem {
    /// Public key; parsed and encoded through [`Serialize`].
    type PublicKey: Clone + Serialize;

    /// Secret key; wiped on drop and encoded only into zeroizing buffers.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret; wiped on drop. Derive application keys from it at once.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext carrying the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Key pair as returned by [`Kem::keypair`].
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// Every random byte is drawn from `rng`.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a fresh shared secret to `public_key`.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Recover the shared secret from `ciphertext`.
    ///
    /// Schemes with implicit rejection return a pseudorandom secret for an
    /// invalid ciphertext instead of an error, in constant time.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
