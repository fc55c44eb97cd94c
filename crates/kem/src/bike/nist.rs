//! NIST-style byte-buffer interface
//!
//! Keys, ciphertexts and shared secrets travel as flat byte buffers with
//! the fixed layouts
//!
//! - public key: `f0 || f1`
//! - ciphertext: `c0 || c1`
//! - secret key: `wlist0 || wlist1 || h0 || h1 || sigma0 || sigma1`, each
//!   list holding DV little-endian `u32` positions
//!
//! Output buffers must have exactly the sizes given by [`BikeParams`].

use bike_api::error::Result as ApiResult;
use bike_api::{Kem, Serialize, SerializeSecret};
use rand::{CryptoRng, RngCore};

use super::kem::{BikeCiphertext, BikeKem, BikePublicKey, BikeSecretKey};
use super::params::{BikeParams, BIKE_SHARED_SECRET_SIZE};
use crate::error::validate;

/// Generate a key pair into `pk` and `sk`
pub fn crypto_kem_keypair<P: BikeParams, R: RngCore + CryptoRng>(
    rng: &mut R,
    pk: &mut [u8],
    sk: &mut [u8],
) -> ApiResult<()> {
    validate::serialization(pk.len() == P::PUBLIC_KEY_BYTES, "public key buffer", "wrong length")?;
    validate::serialization(sk.len() == P::SECRET_KEY_BYTES, "secret key buffer", "wrong length")?;

    let (public_key, secret_key) = BikeKem::<P>::keypair(rng)?;
    pk.copy_from_slice(&public_key.to_bytes());
    sk.copy_from_slice(&secret_key.to_bytes_zeroizing());
    Ok(())
}

/// Encapsulate to `pk`, writing the ciphertext to `ct` and the secret to `ss`
pub fn crypto_kem_enc<P: BikeParams, R: RngCore + CryptoRng>(
    rng: &mut R,
    ct: &mut [u8],
    ss: &mut [u8],
    pk: &[u8],
) -> ApiResult<()> {
    validate::serialization(ct.len() == P::CIPHERTEXT_BYTES, "ciphertext buffer", "wrong length")?;
    validate::serialization(ss.len() == BIKE_SHARED_SECRET_SIZE, "shared secret buffer", "wrong length")?;

    let public_key = BikePublicKey::<P>::from_bytes(pk)?;
    let (ciphertext, shared) = BikeKem::<P>::encapsulate(rng, &public_key)?;
    ct.copy_from_slice(&ciphertext.to_bytes());
    ss.copy_from_slice(shared.as_bytes());
    Ok(())
}

/// Decapsulate `ct` with `sk`, writing the shared secret to `ss`.
///
/// An undecodable ciphertext still succeeds, with the implicit-rejection
/// secret in `ss`.
pub fn crypto_kem_dec<P: BikeParams>(ss: &mut [u8], ct: &[u8], sk: &[u8]) -> ApiResult<()> {
    validate::serialization(ss.len() == BIKE_SHARED_SECRET_SIZE, "shared secret buffer", "wrong length")?;

    let secret_key = BikeSecretKey::<P>::from_bytes(sk)?;
    let ciphertext = BikeCiphertext::<P>::from_bytes(ct)?;
    let shared = BikeKem::<P>::decapsulate(&secret_key, &ciphertext)?;
    ss.copy_from_slice(shared.as_bytes());
    Ok(())
}
