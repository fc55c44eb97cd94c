//! The hash-derived functions of BIKE-1
//!
//! `H` expands a pair of r-bit vectors into an error vector of weight T1;
//! `K` compresses the encapsulation transcript into the shared secret. Both
//! start from SHA-384 and keep the first 32 bytes of the digest.

use bike_algorithms::code::sampling::generate_sparse_rep;
use bike_algorithms::{AesCtrPrf, Sha384};
use bike_params::utils::hash::SHA384_OUTPUT_SIZE;
use zeroize::Zeroizing;

use super::params::{BikeParams, BIKE_SEED_SIZE, BIKE_SHARED_SECRET_SIZE, MAX_AES_INVOCATIONS};
use super::split::split;
use super::types::{RVector, SplitError};
use crate::error::Result;

const _: () = assert!(SHA384_OUTPUT_SIZE >= BIKE_SEED_SIZE);
const _: () = assert!(SHA384_OUTPUT_SIZE >= BIKE_SHARED_SECRET_SIZE);

/// Raw shared secret bytes, wiped on drop
pub type SharedSecretBytes = Zeroizing<[u8; BIKE_SHARED_SECRET_SIZE]>;


fn digest_parts(parts: &[&[u8]]) -> Zeroizing<[u8; SHA384_OUTPUT_SIZE]> {
    #[cfg(test)]
    probe::record();

    Sha384::digest_parts(parts)
}

/// Function H: a weight-T1 error vector derived from `(a, b)`.
///
/// The first 32 bytes of `SHA-384(a || b)` key an AES-CTR PRF from which
/// T1 distinct positions below n are drawn; the resulting n-bit vector is
/// split into its two halves.
pub fn function_h<P: BikeParams>(a: &RVector<P>, b: &RVector<P>) -> Result<SplitError<P>> {
    let digest = digest_parts(&[a.as_bytes(), b.as_bytes()]);

    let mut prf = AesCtrPrf::new(&digest[..BIKE_SEED_SIZE], MAX_AES_INVOCATIONS)?;
    let (e, _) = generate_sparse_rep(&mut prf, P::T1, P::N_BITS)?;

    Ok(split::<P>(&e))
}

/// Function K: the shared secret bound to `(a, b)` and the ciphertext `(c0, c1)`
pub fn get_ss<P: BikeParams>(
    a: &RVector<P>,
    b: &RVector<P>,
    c0: &RVector<P>,
    c1: &RVector<P>,
) -> SharedSecretBytes {
    let digest = digest_parts(&[a.as_bytes(), b.as_bytes(), c0.as_bytes(), c1.as_bytes()]);

    let mut ss = Zeroizing::new([0u8; BIKE_SHARED_SECRET_SIZE]);
    ss.copy_from_slice(&digest[..BIKE_SHARED_SECRET_SIZE]);
    ss
}
