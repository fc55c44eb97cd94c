//! Polynomial arithmetic over GF(2) modulo x^r - 1
//!
//! Elements are r-bit vectors, stored on the wire as `ceil(r / 8)`
//! little-endian bytes whose unused high bits are zero. Arithmetic runs on
//! `u64` words. Multiplication and rotation take the same time for every
//! operand value, including the positions of a sparse operand.

use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::error::{validate, Result};
use bike_internal::constant_time::ct_mask_u64;
use bike_internal::endian::{load_le_words, store_le_words};

/// Operand size, in words, below which multiplication is schoolbook
const KARATSUBA_CUTOFF: usize = 16;

/// XOR `b` into `a`; lengths must match
pub fn add_assign(a: &mut [u8], b: &[u8]) -> Result<()> {
    validate::length("GF(2) vector addition", b.len(), a.len())?;
    for (x, y) in a.iter_mut().zip(b) {
        *x ^= y;
    }
    Ok(())
}

/// Sum of two vectors of equal length
pub fn add(a: &[u8], b: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let mut out = Zeroizing::new(a.to_vec());
    add_assign(&mut out, b)?;
    Ok(out)
}

/// Number of set bits
pub fn hamming_weight(bytes: &[u8]) -> u32 {
    bytes.iter().map(|b| b.count_ones()).sum()
}

/// Number of set bits in a word vector
pub fn hamming_weight_words(words: &[u64]) -> u32 {
    words.iter().map(|w| w.count_ones()).sum()
}

/// The ring GF(2)\[x\]/(x^r - 1) for a fixed block length r
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclicRing {
    r_bits: usize,
}

impl CyclicRing {
    /// Ring with block length `r_bits`
    pub const fn new(r_bits: usize) -> Self {
        Self { r_bits }
    }

    /// Block length r
    pub const fn r_bits(&self) -> usize {
        self.r_bits
    }

    /// Bytes per element
    pub const fn r_size(&self) -> usize {
        (self.r_bits + 7) / 8
    }

    /// Words per element
    pub const fn r_qw(&self) -> usize {
        (self.r_bits + 63) / 64
    }

    /// Mask of the valid bits in the last byte of an element
    pub const fn last_byte_mask(&self) -> u8 {
        match self.r_bits % 8 {
            0 => 0xFF,
            lead => (1u8 << lead) - 1,
        }
    }

    /// Mask of the valid bits in the last word of an element
    pub const fn last_word_mask(&self) -> u64 {
        match self.r_bits % 64 {
            0 => u64::MAX,
            lead => (1u64 << lead) - 1,
        }
    }

    /// Words in the buffer produced by [`CyclicRing::duplicate`]
    pub const fn dup_qw(&self) -> usize {
        2 * self.r_qw() + 1
    }

    /// Whether `bytes` is a well-formed element: right length, zero padding
    pub fn is_canonical(&self, bytes: &[u8]) -> bool {
        bytes.len() == self.r_size() && bytes[self.r_size() - 1] & !self.last_byte_mask() == 0
    }

    /// Clear the padding bits of an element
    pub fn mask_padding(&self, bytes: &mut [u8]) {
        if let Some(last) = bytes.last_mut() {
            *last &= self.last_byte_mask();
        }
    }

    /// Unpack an element into words
    pub fn to_words(&self, bytes: &[u8]) -> Result<Zeroizing<Vec<u64>>> {
        validate::length("GF(2)[x]/(x^r - 1) element", bytes.len(), self.r_size())?;
        let mut words = Zeroizing::new(vec![0u64; self.r_qw()]);
        load_le_words(&mut words, bytes);
        words[self.r_qw() - 1] &= self.last_word_mask();
        Ok(words)
    }

    /// Pack the first `r_qw` words into an element
    pub fn to_bytes(&self, words: &[u64]) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(vec![0u8; self.r_size()]);
        store_le_words(&mut bytes, &words[..self.r_qw()]);
        self.mask_padding(&mut bytes);
        bytes
    }

    /// Product `a * b` of two dense elements
    pub fn mod_mul(&self, a: &[u8], b: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let a = self.to_words(a)?;
        let b = self.to_words(b)?;

        let mut prod = Zeroizing::new(vec![0u64; 2 * self.r_qw()]);
        karatsuba(&mut prod, &a, &b);

        let reduced = self.reduce(&prod);
        Ok(self.to_bytes(&reduced))
    }

    /// Product of a dense element and the element whose set bits are `indices`
    pub fn mod_mul_sparse(&self, a: &[u8], indices: &[u32]) -> Result<Zeroizing<Vec<u8>>> {
        let a = self.to_words(a)?;
        let acc = self.mod_mul_sparse_words(&a, indices)?;
        Ok(self.to_bytes(&acc))
    }

    /// Word-level form of [`CyclicRing::mod_mul_sparse`]
    ///
    /// `a` must hold `r_qw` words with clear padding. Each index contributes
    /// `a * x^idx`, a left rotation, computed as a right rotation by `r - idx`.
    pub fn mod_mul_sparse_words(&self, a: &[u64], indices: &[u32]) -> Result<Zeroizing<Vec<u64>>> {
        validate::length("sparse multiplication operand", a.len(), self.r_qw())?;

        let dup = self.duplicate(a);
        let mut rotated = Zeroizing::new(vec![0u64; self.dup_qw()]);
        let mut acc = Zeroizing::new(vec![0u64; self.r_qw()]);

        for &idx in indices {
            validate::parameter(
                (idx as usize) < self.r_bits,
                "sparse index",
                "position must be smaller than r",
            )?;
            self.rotate_right(&mut rotated, &dup, self.r_bits as u32 - idx);
            for (x, y) in acc.iter_mut().zip(rotated.iter()) {
                *x ^= y;
            }
        }
        Ok(acc)
    }

    /// Repeat the r bits of `a` so that any r-bit window can be read linearly.
    ///
    /// Bit `i` of the result is bit `i mod r` of `a`, for every bit of the
    /// `dup_qw` output words.
    pub fn duplicate(&self, a: &[u64]) -> Zeroizing<Vec<u64>> {
        let mut dup = Zeroizing::new(vec![0u64; self.dup_qw()]);
        let total_bits = self.dup_qw() * 64;

        let mut shift = 0;
        while shift < total_bits {
            xor_shifted_left(&mut dup, &a[..self.r_qw()], shift);
            shift += self.r_bits;
        }
        dup
    }

    /// Rotate right by `bits` positions, reading from a duplicated buffer.
    ///
    /// On return the first `r_qw` words of `out` hold bit `(j + bits) mod r`
    /// of the input element at position `j`, with clear padding. `bits`
    /// may be secret and must satisfy `bits <= r`. `out` needs `dup_qw`
    /// words; the words past `r_qw` are scratch.
    pub fn rotate_right(&self, out: &mut [u64], dup: &[u64], bits: u32) {
        let len = self.dup_qw();
        out[..len].copy_from_slice(&dup[..len]);

        // Word shift, one conditional step per bit of the word offset
        let qw_shift = (bits >> 6) as usize;
        let mut step = 1usize;
        while step < self.r_qw() {
            let mask = ct_mask_u64((qw_shift / step) as u64);
            for i in 0..len - step {
                out[i] = (out[i] & !mask) | (out[i + step] & mask);
            }
            step <<= 1;
        }

        // Bit shift; the double shift keeps a zero offset well defined
        let bit_shift = bits & 63;
        for i in 0..self.r_qw() {
            out[i] = (out[i] >> bit_shift) | ((out[i + 1] << 1) << (63 - bit_shift));
        }
        out[self.r_qw() - 1] &= self.last_word_mask();
    }

    /// Fold a double-length product back into the ring
    fn reduce(&self, prod: &[u64]) -> Zeroizing<Vec<u64>> {
        let r_qw = self.r_qw();
        let word = self.r_bits / 64;
        let bit = (self.r_bits % 64) as u32;

        let mut out = Zeroizing::new(vec![0u64; r_qw]);
        for i in 0..r_qw {
            let lo = prod.get(word + i).copied().unwrap_or(0) >> bit;
            let hi = prod.get(word + i + 1).copied().unwrap_or(0);
            let hi = if bit == 0 { 0 } else { hi << (64 - bit) };
            out[i] = prod[i] ^ lo ^ hi;
        }
        out[r_qw - 1] &= self.last_word_mask();
        out
    }
}

/// `dst ^= src << shift`, truncated to `dst`
fn xor_shifted_left(dst: &mut [u64], src: &[u64], shift: usize) {
    let word = shift / 64;
    let bit = (shift % 64) as u32;

    for (i, &s) in src.iter().enumerate() {
        let at = i + word;
        if at < dst.len() {
            dst[at] ^= s << bit;
        }
        if bit != 0 && at + 1 < dst.len() {
            dst[at + 1] ^= s >> (64 - bit);
        }
    }
}

/// Carry-less 64x64 -> 128 bit product, returned as (low, high)
#[inline(always)]
fn clmul64(a: u64, b: u64) -> (u64, u64) {
    let mut lo = 0u64;
    let mut hi = 0u64;
    for i in 0..64 {
        let t = a & ct_mask_u64(b >> i);
        lo ^= t << i;
        hi ^= (t >> 1) >> (63 - i);
    }
    (lo, hi)
}

fn schoolbook(out: &mut [u64], a: &[u64], b: &[u64]) {
    for w in out.iter_mut() {
        *w = 0;
    }
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = clmul64(x, y);
            out[i + j] ^= lo;
            out[i + j + 1] ^= hi;
        }
    }
}

/// `out = a * b` over GF(2)\[x\]; `a` and `b` have equal length n and `out` has 2n words
fn karatsuba(out: &mut [u64], a: &[u64], b: &[u64]) {
    let n = a.len();
    if n <= KARATSUBA_CUTOFF {
        schoolbook(out, a, b);
        return;
    }

    let lo = n / 2;
    let hi = n - lo;
    let (a0, a1) = a.split_at(lo);
    let (b0, b1) = b.split_at(lo);

    let mut z0 = Zeroizing::new(vec![0u64; 2 * lo]);
    let mut z2 = Zeroizing::new(vec![0u64; 2 * hi]);
    karatsuba(&mut z0, a0, b0);
    karatsuba(&mut z2, a1, b1);

    // (a0 + a1)(b0 + b1), with the shorter low halves zero-extended
    let mut sa = Zeroizing::new(a1.to_vec());
    let mut sb = Zeroizing::new(b1.to_vec());
    for i in 0..lo {
        sa[i] ^= a0[i];
        sb[i] ^= b0[i];
    }
    let mut z1 = Zeroizing::new(vec![0u64; 2 * hi]);
    karatsuba(&mut z1, &sa, &sb);

    for (i, w) in z0.iter().enumerate() {
        z1[i] ^= w;
    }
    for (i, w) in z2.iter().enumerate() {
        z1[i] ^= w;
    }

    for w in out.iter_mut() {
        *w = 0;
    }
    out[..2 * lo].copy_from_slice(&z0);
    for (i, w) in z2.iter().enumerate() {
        out[2 * lo + i] ^= w;
    }
    for (i, w) in z1.iter().enumerate() {
        out[lo + i] ^= w;
    }
}

#[cfg(test)]
mod tests;
