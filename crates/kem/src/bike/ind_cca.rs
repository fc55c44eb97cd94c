//! BIKE-1 key generation, encapsulation and decapsulation
//!
//! Decapsulation never reports a decoding failure. It always derives both
//! candidate secrets, `K(c + e)` and `K(sigma)`, and selects between them
//! byte by byte under a mask, so the failure path costs the same as the
//! success path.

use bike_algorithms::code::sampling::{
    generate_sparse_rep, sample_uniform_r_bits, sample_uniform_r_bits_with_prf, WeightParity,
};
use bike_algorithms::AesCtrPrf;
use bike_internal::constant_time::{ct_eq_u32, ct_select_bytes};
use tracing::debug;
use zeroize::Zeroizing;

use super::decoder::{compute_syndrome, decode};
use super::hashing::{function_h, get_ss, SharedSecretBytes};
use super::kem::{BikeCiphertext, BikePublicKey, BikeSecretKey};
use super::params::{BikeParams, BIKE_SHARED_SECRET_SIZE, MAX_AES_INVOCATIONS};
use super::types::{RVector, SeedPair, SeedTriple};
use crate::error::{validate, Result};

/// Key generation from three seeds.
///
/// The h-PRF yields h0 then h1, the sigma-PRF yields sigma0 then sigma1,
/// interleaved in the order h0, sigma0, sigma1, h1. The odd-weight `g`
/// comes from a third PRF, and the public key is `(g * h1, g * h0)`.
pub(crate) fn kem_keygen<P: BikeParams>(
    seeds: &SeedTriple,
) -> Result<(BikePublicKey<P>, BikeSecretKey<P>)> {
    debug!(algorithm = P::NAME, "Generating key pair");

    let mut h_prf = AesCtrPrf::new(seeds.h_seed(), MAX_AES_INVOCATIONS)?;
    let mut sigma_prf = AesCtrPrf::new(seeds.sigma_seed(), MAX_AES_INVOCATIONS)?;

    let (h0, wlist0) = generate_sparse_rep(&mut h_prf, P::DV, P::R_BITS)?;
    let sigma0 = sample_uniform_r_bits_with_prf(&mut sigma_prf, P::R_BITS, WeightParity::NoRestriction)?;
    let sigma1 = sample_uniform_r_bits_with_prf(&mut sigma_prf, P::R_BITS, WeightParity::NoRestriction)?;
    let (h1, wlist1) = generate_sparse_rep(&mut h_prf, P::DV, P::R_BITS)?;

    debug!(algorithm = P::NAME, "Sampling g");
    let g = RVector::<P>::from_masked(sample_uniform_r_bits(
        seeds.g_seed(),
        P::R_BITS,
        WeightParity::MustBeOdd,
    )?);

    debug!(algorithm = P::NAME, "Computing g*h1 and g*h0");
    let f0 = g.mul_sparse(&wlist1)?;
    let f1 = g.mul_sparse(&wlist0)?;

    let sk = BikeSecretKey {
        wlist0,
        wlist1,
        h0: RVector::from_masked(h0),
        h1: RVector::from_masked(h1),
        sigma0: RVector::from_masked(sigma0),
        sigma1: RVector::from_masked(sigma1),
    };
    Ok((BikePublicKey { f0, f1 }, sk))
}

/// Encapsulation from two seeds; the first one is not used
pub(crate) fn kem_encaps<P: BikeParams>(
    pk: &BikePublicKey<P>,
    seeds: &SeedPair,
) -> Result<(BikeCiphertext<P>, SharedSecretBytes)> {
    debug!(algorithm = P::NAME, "Sampling m");
    let m = RVector::<P>::from_masked(sample_uniform_r_bits(
        seeds.message_seed(),
        P::R_BITS,
        WeightParity::NoRestriction,
    )?);

    debug!(algorithm = P::NAME, "Computing m*f0 and m*f1");
    let mf0 = m.mul(&pk.f0)?;
    let mf1 = m.mul(&pk.f1)?;

    debug!(algorithm = P::NAME, "Computing the hash function e <- H(m*f0, m*f1)");
    let e = function_h(&mf0, &mf1)?;

    let ct = BikeCiphertext {
        c0: mf0.xor(&e.e0)?,
        c1: mf1.xor(&e.e1)?,
    };

    debug!(algorithm = P::NAME, "Generating shared secret");
    let ss = get_ss(&mf0, &mf1, &ct.c0, &ct.c1);

    Ok((ct, ss))
}

/// Decapsulation with implicit rejection
pub(crate) fn kem_decaps<P: BikeParams>(
    sk: &BikeSecretKey<P>,
    ct: &BikeCiphertext<P>,
) -> Result<SharedSecretBytes> {
    validate::decapsulation(
        sk.wlist0.len() == P::DV && sk.wlist1.len() == P::DV,
        P::NAME,
        "secret key block has the wrong weight",
    )?;

    debug!(algorithm = P::NAME, "Computing the syndrome");
    let syndrome = compute_syndrome(ct, sk)?;

    debug!(algorithm = P::NAME, "Decoding");
    let (e, decode_ok) = decode(&syndrome, ct, sk)?;

    let ce0 = ct.c0.xor(&e.e0)?;
    let ce1 = ct.c1.xor(&e.e1)?;
    let e2 = function_h(&ce0, &ce1)?;

    let success = decode_ok & ct_eq_u32(e.weight(), P::T1 as u32) & e.ct_eq(&e2);

    debug!(algorithm = P::NAME, "Generating shared secret");
    let ss_success = get_ss(&ce0, &ce1, &ct.c0, &ct.c1);
    let ss_failure = get_ss(&sk.sigma0, &sk.sigma1, &ct.c0, &ct.c1);

    let mut ss = Zeroizing::new([0u8; BIKE_SHARED_SECRET_SIZE]);
    ct_select_bytes(&mut ss[..], &ss_success[..], &ss_failure[..], success);
    Ok(ss)
}
