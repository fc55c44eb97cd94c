//! Sampling of ring elements from an AES-CTR keystream
//!
//! Fixed-weight vectors are drawn by rejection sampling positions below a
//! bound, discarding repeats. The duplicate check and the write of the dense
//! form touch every entry regardless of the drawn values.

use alloc::vec;
use alloc::vec::Vec;
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::error::{validate, Result};
use crate::prf::AesCtrPrf;
use bike_internal::endian::{load_le_words, store_le_words, words_for_bytes};
use bike_params::pqc::bike::BIKE_MAX_AES_INVOCATIONS;

/// Parity constraint on the weight of a uniform sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightParity {
    /// Any weight
    NoRestriction,
    /// Odd weight, forced by flipping bit 0 when needed
    MustBeOdd,
}

/// Number of bits needed to represent `value`
const fn bit_length(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}

/// Draw a position uniformly from `0..len`.
///
/// Takes 32-bit little-endian values from the keystream, keeps the low
/// `bit_length(len)` bits, and rejects values that are not below `len`.
pub fn rand_index(prf: &mut AesCtrPrf, len: u32) -> Result<u32> {
    validate::parameter(len > 0, "sampling bound", "must be positive")?;

    let mask = ((1u64 << bit_length(len)) - 1) as u32;
    let mut buf = [0u8; 4];
    loop {
        prf.fill(&mut buf)?;
        let value = u32::from_le_bytes(buf) & mask;
        if value < len {
            return Ok(value);
        }
    }
}

/// 1 if `candidate` differs from every entry, else 0, computed over all entries
fn is_new(candidate: u32, taken: &[u32]) -> usize {
    let mut seen = subtle::Choice::from(0);
    for &t in taken {
        seen |= candidate.ct_eq(&t);
    }
    usize::from((!seen).unwrap_u8())
}

/// Set the bits at `indices` in a `len_bits`-bit vector of `ceil(len_bits / 8)` bytes
fn set_bits(len_bits: usize, indices: &[u32]) -> Zeroizing<Vec<u8>> {
    let len_bytes = (len_bits + 7) / 8;
    let mut words = Zeroizing::new(vec![0u64; words_for_bytes(len_bytes)]);

    for &idx in indices {
        let word_pos = (idx >> 6) as u64;
        let bit = 1u64 << (idx & 63);
        for (j, w) in words.iter_mut().enumerate() {
            let hit = (j as u64).ct_eq(&word_pos);
            *w |= u64::conditional_select(&0, &bit, hit);
        }
    }

    let mut dense = Zeroizing::new(vec![0u8; len_bytes]);
    store_le_words(&mut dense, &words);
    dense
}

/// Sample `weight` distinct positions below `len`.
///
/// Returns the dense vector of `ceil(len / 8)` bytes and the positions in
/// drawing order.
pub fn generate_sparse_rep(
    prf: &mut AesCtrPrf,
    weight: usize,
    len: usize,
) -> Result<(Zeroizing<Vec<u8>>, Zeroizing<Vec<u32>>)> {
    validate::parameter(
        weight <= len && len <= u32::MAX as usize,
        "sparse vector",
        "weight must not exceed the length",
    )?;

    // Every draw is written to the next free slot; the slot is kept only
    // when the draw is new
    let mut indices = Zeroizing::new(vec![0u32; weight]);
    let mut filled = 0;
    while filled < weight {
        let candidate = rand_index(prf, len as u32)?;
        indices[filled] = candidate;
        filled += is_new(candidate, &indices[..filled]);
    }

    Ok((set_bits(len, &indices), indices))
}

/// Draw an r-bit vector from an existing keystream.
///
/// Consumes exactly `ceil(r_bits / 8)` keystream bytes and clears the bits
/// above `r_bits`.
pub fn sample_uniform_r_bits_with_prf(
    prf: &mut AesCtrPrf,
    r_bits: usize,
    parity: WeightParity,
) -> Result<Zeroizing<Vec<u8>>> {
    validate::parameter(r_bits > 0, "uniform sample", "length must be positive")?;

    let r_size = (r_bits + 7) / 8;
    let mut out = Zeroizing::new(vec![0u8; r_size]);
    prf.fill(&mut out)?;

    if r_bits % 8 != 0 {
        out[r_size - 1] &= (1u8 << (r_bits % 8)) - 1;
    }

    if parity == WeightParity::MustBeOdd {
        let mut words = Zeroizing::new(vec![0u64; words_for_bytes(r_size)]);
        load_le_words(&mut words, &out);
        let weight: u32 = words.iter().map(|w| w.count_ones()).sum();
        out[0] ^= ((weight & 1) ^ 1) as u8;
    }

    Ok(out)
}

/// Draw an r-bit vector from a fresh keystream keyed by `seed`
pub fn sample_uniform_r_bits(
    seed: &[u8],
    r_bits: usize,
    parity: WeightParity,
) -> Result<Zeroizing<Vec<u8>>> {
    let mut prf = AesCtrPrf::new(seed, BIKE_MAX_AES_INVOCATIONS)?;
    sample_uniform_r_bits_with_prf(&mut prf, r_bits, parity)
}
