//! Syndrome computation and the Black-Gray-Flip decoder
//!
//! Unsatisfied-parity counters are kept bit-sliced: slice `j` holds bit `j`
//! of the counter of every position at once, so one word operation updates
//! 64 counters. Comparisons against a threshold subtract it in two's
//! complement and read the sign slice. Nothing branches on the syndrome,
//! the error or the positions of the secret blocks.

use alloc::vec;
use alloc::vec::Vec;
use bike_algorithms::code::gf2x::{hamming_weight_words, CyclicRing};
use bike_internal::constant_time::ct_mask_u64;
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;
use zeroize::Zeroizing;

use super::kem::{BikeCiphertext, BikeSecretKey};
use super::params::{bit_length, BikeParams, DELTA, THRESHOLD_SCALE};
use super::types::{RVector, SplitError};
use crate::error::Result;

type Words = Zeroizing<Vec<u64>>;

/// Syndrome `c0 * h0 + c1 * h1`
pub fn compute_syndrome<P: BikeParams>(
    ct: &BikeCiphertext<P>,
    sk: &BikeSecretKey<P>,
) -> Result<RVector<P>> {
    let s0 = ct.c0.mul_sparse(&sk.wlist0)?;
    let s1 = ct.c1.mul_sparse(&sk.wlist1)?;
    s0.xor(&s1)
}

/// Flip threshold for a syndrome of weight `syndrome_weight`
pub fn threshold<P: BikeParams>(syndrome_weight: u32) -> u32 {
    ((P::THRESHOLD_COEFF0 + P::THRESHOLD_COEFF1 * syndrome_weight as u64) / THRESHOLD_SCALE) as u32
}

/// Bit-sliced counters for one r-bit block
struct Counters {
    slices: Words,
    qw: usize,
    n_slices: usize,
}

impl Counters {
    fn new(qw: usize, n_slices: usize) -> Self {
        Self {
            slices: Zeroizing::new(vec![0u64; qw * n_slices]),
            qw,
            n_slices,
        }
    }

    /// Add the 0/1 vector `x` to the low `width` slices
    fn add_bits(&mut self, x: &[u64], width: usize) {
        for w in 0..self.qw {
            let mut carry = x[w];
            for j in 0..width {
                let a = self.slices[j * self.qw + w];
                self.slices[j * self.qw + w] = a ^ carry;
                carry &= a;
            }
        }
    }

    /// Add `value` to every counter
    fn add_constant(&mut self, value: u32) {
        for _ in 0..value {
            for w in 0..self.qw {
                let mut carry = u64::MAX;
                for j in 0..self.n_slices {
                    let a = self.slices[j * self.qw + w];
                    self.slices[j * self.qw + w] = a ^ carry;
                    carry &= a;
                }
            }
        }
    }

    /// Subtract `value` from every counter
    fn sub_constant(&mut self, value: u32) {
        for w in 0..self.qw {
            let mut borrow = 0u64;
            for j in 0..self.n_slices {
                let b = ct_mask_u64((value >> j) as u64);
                let a = self.slices[j * self.qw + w];
                let next = (!a & b & !borrow) | ((!a | b) & borrow);
                self.slices[j * self.qw + w] = a ^ b ^ borrow;
                borrow = next;
            }
        }
    }

    /// Word `w` of the mask of non-negative counters
    fn non_negative(&self, w: usize) -> u64 {
        !self.slices[(self.n_slices - 1) * self.qw + w]
    }
}

/// Unsatisfied-parity counts of every position of one block.
///
/// The count of position `j` is the number of set bits of the syndrome at
/// positions `j + k mod r` over the block's sparse positions `k`.
fn upc<P: BikeParams>(ring: &CyclicRing, syndrome_dup: &[u64], wlist: &[u32]) -> Counters {
    let qw = ring.r_qw();
    let mut counters = Counters::new(qw, P::SLICES);
    let mut rotated: Words = Zeroizing::new(vec![0u64; ring.dup_qw()]);

    for (j, &k) in wlist.iter().enumerate() {
        ring.rotate_right(&mut rotated, syndrome_dup, k);
        counters.add_bits(&rotated[..qw], bit_length(j + 1));
    }
    counters
}

/// Syndrome of `c + e`
fn recompute_syndrome(
    ring: &CyclicRing,
    c: &[Words; 2],
    e: &[Words; 2],
    wlists: [&[u32]; 2],
) -> Result<Words> {
    let mut s: Words = Zeroizing::new(vec![0u64; ring.r_qw()]);
    for i in 0..2 {
        let ce: Words = Zeroizing::new(c[i].iter().zip(e[i].iter()).map(|(x, y)| x ^ y).collect());
        let part = ring.mod_mul_sparse_words(&ce, wlists[i])?;
        for (x, y) in s.iter_mut().zip(part.iter()) {
            *x ^= y;
        }
    }
    Ok(s)
}

/// Flip every position whose count reaches `th`; record the black and gray sets
fn find_err1<P: BikeParams>(
    ring: &CyclicRing,
    e: &mut [Words; 2],
    black: &mut [Words; 2],
    gray: &mut [Words; 2],
    syndrome: &[u64],
    wlists: [&[u32]; 2],
    th: u32,
) {
    let dup = ring.duplicate(syndrome);
    let last = ring.r_qw() - 1;

    for i in 0..2 {
        let mut counters = upc::<P>(ring, &dup, wlists[i]);
        counters.sub_constant(th);
        for w in 0..ring.r_qw() {
            black[i][w] = counters.non_negative(w);
        }
        black[i][last] &= ring.last_word_mask();
        for (x, b) in e[i].iter_mut().zip(black[i].iter()) {
            *x ^= b;
        }

        counters.add_constant(DELTA as u32);
        for w in 0..ring.r_qw() {
            gray[i][w] = !black[i][w] & counters.non_negative(w);
        }
        gray[i][last] &= ring.last_word_mask();
    }
}

/// Among the positions of `pos`, flip those whose count reaches `th`
fn find_err2<P: BikeParams>(
    ring: &CyclicRing,
    e: &mut [Words; 2],
    pos: &[Words; 2],
    syndrome: &[u64],
    wlists: [&[u32]; 2],
    th: u32,
) {
    let dup = ring.duplicate(syndrome);
    for i in 0..2 {
        let mut counters = upc::<P>(ring, &dup, wlists[i]);
        counters.sub_constant(th);
        for w in 0..ring.r_qw() {
            e[i][w] ^= pos[i][w] & counters.non_negative(w);
        }
    }
}

/// Black-Gray-Flip decoding of `syndrome`.
///
/// Runs exactly `MAX_IT` iterations; the first one also re-examines the
/// black and gray positions with the fixed threshold `TH2`. Returns the
/// error estimate and whether the final syndrome is zero.
pub fn decode<P: BikeParams>(
    syndrome: &RVector<P>,
    ct: &BikeCiphertext<P>,
    sk: &BikeSecretKey<P>,
) -> Result<(SplitError<P>, Choice)> {
    let ring = RVector::<P>::ring();
    let qw = ring.r_qw();
    let wlists: [&[u32]; 2] = [&sk.wlist0, &sk.wlist1];
    let c = [ring.to_words(ct.c0.as_bytes())?, ring.to_words(ct.c1.as_bytes())?];

    let zero = || -> Words { Zeroizing::new(vec![0u64; qw]) };
    let mut e = [zero(), zero()];
    let mut black = [zero(), zero()];
    let mut gray = [zero(), zero()];
    let mut s = ring.to_words(syndrome.as_bytes())?;

    for iter in 0..P::MAX_IT {
        debug!(algorithm = P::NAME, iteration = iter, "Black-Gray-Flip iteration");

        let th = threshold::<P>(hamming_weight_words(&s));
        find_err1::<P>(&ring, &mut e, &mut black, &mut gray, &s, wlists, th);
        s = recompute_syndrome(&ring, &c, &e, wlists)?;

        if iter >= 1 {
            continue;
        }

        find_err2::<P>(&ring, &mut e, &black, &s, wlists, P::TH2 as u32);
        s = recompute_syndrome(&ring, &c, &e, wlists)?;

        find_err2::<P>(&ring, &mut e, &gray, &s, wlists, P::TH2 as u32);
        s = recompute_syndrome(&ring, &c, &e, wlists)?;
    }

    let ok = hamming_weight_words(&s).ct_eq(&0);
    let estimate = SplitError {
        e0: RVector::from_masked(ring.to_bytes(&e[0])),
        e1: RVector::from_masked(ring.to_bytes(&e[1])),
    };
    Ok((estimate, ok))
}
