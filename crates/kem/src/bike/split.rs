//! Splitting an n-bit error vector into two r-bit halves, and back
//!
//! With `lead = r mod 8`, bit r of the n-bit vector sits at bit `lead` of
//! byte `R_SIZE - 1`, so each byte of the upper half is assembled from two
//! neighbouring source bytes. r is odd, so `lead` is never zero.

use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use super::params::BikeParams;
use super::types::{RVector, SplitError};

fn byte_at(e: &[u8], i: usize) -> u8 {
    e.get(i).copied().unwrap_or(0)
}

/// Split an `N_SIZE`-byte vector into `(e0, e1)`.
///
/// Bytes missing from a short `e` read as zero and bytes past `N_SIZE` are
/// ignored. Both halves come back with their padding bits cleared.
pub fn split<P: BikeParams>(e: &[u8]) -> SplitError<P> {
    let lead = (P::R_BITS % 8) as u32;
    let mut e0 = Zeroizing::new(vec![0u8; P::R_SIZE]);
    let mut e1 = Zeroizing::new(vec![0u8; P::R_SIZE]);

    for (i, b) in e0.iter_mut().enumerate() {
        *b = byte_at(e, i);
    }

    for i in P::R_SIZE..P::N_SIZE {
        e1[i - P::R_SIZE] = (byte_at(e, i) << (8 - lead)) | (byte_at(e, i - 1) >> lead);
    }

    // The last byte of e1 has no byte above it to borrow from
    if P::N_SIZE < 2 * P::R_SIZE {
        e1[P::R_SIZE - 1] = byte_at(e, P::N_SIZE - 1) >> lead;
    }

    SplitError {
        e0: RVector::from_masked(e0),
        e1: RVector::from_masked(e1),
    }
}

/// Concatenate `e0` and `e1` into an `N_SIZE`-byte vector
pub fn join<P: BikeParams>(e: &SplitError<P>) -> Zeroizing<Vec<u8>> {
    let lead = (P::R_BITS % 8) as u32;
    let mut out = Zeroizing::new(vec![0u8; P::N_SIZE]);
    out[..P::R_SIZE].copy_from_slice(e.e0.as_bytes());

    for (j, &b) in e.e1.as_bytes().iter().enumerate() {
        out[P::R_SIZE - 1 + j] |= b << lead;
        if P::R_SIZE + j < P::N_SIZE {
            out[P::R_SIZE + j] |= b >> (8 - lead);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bike::params::{Bike1L1Params, Bike1L3Params, Bike1L5Params};
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn bit(bytes: &[u8], i: usize) -> bool {
        (bytes[i / 8] >> (i % 8)) & 1 == 1
    }

    fn random_n_vector<P: BikeParams>(seed: u64) -> Vec<u8> {
        let mut e = vec![0u8; P::N_SIZE];
        ChaChaRng::seed_from_u64(seed).fill_bytes(&mut e);
        let lead = P::N_BITS % 8;
        if lead != 0 {
            e[P::N_SIZE - 1] &= (1u8 << lead) - 1;
        }
        e
    }

    fn check_split_bits<P: BikeParams>(seed: u64) {
        let e = random_n_vector::<P>(seed);
        let halves = split::<P>(&e);

        for i in 0..P::R_BITS {
            assert_eq!(bit(halves.e0.as_bytes(), i), bit(&e, i), "e0 bit {}", i);
            assert_eq!(bit(halves.e1.as_bytes(), i), bit(&e, P::R_BITS + i), "e1 bit {}", i);
        }
        let ring = RVector::<P>::ring();
        assert!(ring.is_canonical(halves.e0.as_bytes()));
        assert!(ring.is_canonical(halves.e1.as_bytes()));
    }

    #[test]
    fn test_layouts() {
        // Level 1 has a corner byte, levels 3 and 5 do not
        assert_eq!(Bike1L1Params::N_SIZE, 2 * Bike1L1Params::R_SIZE - 1);
        assert_eq!(Bike1L3Params::N_SIZE, 2 * Bike1L3Params::R_SIZE);
        assert_eq!(Bike1L5Params::N_SIZE, 2 * Bike1L5Params::R_SIZE);
    }

    #[test]
    fn test_split_bits_with_corner_byte() {
        check_split_bits::<Bike1L1Params>(1);
    }

    #[test]
    fn test_split_bits_without_corner_byte() {
        check_split_bits::<Bike1L3Params>(2);
        check_split_bits::<Bike1L5Params>(3);
    }

    #[test]
    fn test_split_single_bits_at_boundaries() {
        let r = Bike1L1Params::R_BITS;
        for pos in [0, r - 1, r, r + 1, 2 * r - 1] {
            let mut e = vec![0u8; Bike1L1Params::N_SIZE];
            e[pos / 8] |= 1 << (pos % 8);
            let halves = split::<Bike1L1Params>(&e);
            assert_eq!(halves.weight(), 1, "position {}", pos);
            if pos < r {
                assert!(bit(halves.e0.as_bytes(), pos));
            } else {
                assert!(bit(halves.e1.as_bytes(), pos - r));
            }
        }
    }

    #[test]
    fn test_split_ignores_padding_of_input() {
        let mut e = vec![0u8; Bike1L1Params::N_SIZE];
        // Bits past 2r in the final byte
        e[Bike1L1Params::N_SIZE - 1] = 0xFF & !((1u8 << (Bike1L1Params::N_BITS % 8)) - 1);
        let halves = split::<Bike1L1Params>(&e);
        assert_eq!(halves.weight(), 0);
    }

    #[test]
    fn test_short_input_reads_as_zero() {
        let halves = split::<Bike1L1Params>(&[0xFF; 4]);
        assert_eq!(halves.e0.weight(), 32);
        assert_eq!(halves.e1.weight(), 0);
    }

    proptest! {
        #[test]
        fn prop_join_inverts_split_l1(seed in any::<u64>()) {
            let e = random_n_vector::<Bike1L1Params>(seed);
            let joined = join(&split::<Bike1L1Params>(&e));
            prop_assert_eq!(&joined[..], &e[..]);
        }

        #[test]
        fn prop_join_inverts_split_l3(seed in any::<u64>()) {
            let e = random_n_vector::<Bike1L3Params>(seed);
            let joined = join(&split::<Bike1L3Params>(&e));
            prop_assert_eq!(&joined[..], &e[..]);
        }
    }
}
