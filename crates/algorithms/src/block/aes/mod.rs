//! AES-256 block encryption (FIPS 197)
//!
//! Only the forward direction is implemented; the PRF never decrypts.
//!
//! ## Constant-Time Guarantees
//!
//! - The S-box is computed as an inversion in GF(2^8) followed by the affine
//!   map, so no table is indexed by secret data.
//! - Field multiplication uses masks instead of data-dependent branches.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use bike_common::security::SecretBuffer;
use bike_params::utils::symmetric::{AES256_KEY_SIZE, AES256_ROUNDS, AES_BLOCK_SIZE};

const ROUND_KEY_BYTES: usize = AES_BLOCK_SIZE * (AES256_ROUNDS + 1);
const KEY_WORDS: usize = AES256_KEY_SIZE / 4;
const SCHEDULE_WORDS: usize = ROUND_KEY_BYTES / 4;

/// Round constants for the key schedule, one per 8-word group
const RCON: [u8; 7] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40];

/// Multiply by x in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1
#[inline(always)]
fn xtime(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7).wrapping_neg() & 0x1B)
}

/// Branch-free multiplication in GF(2^8)
#[inline(always)]
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        p ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
    }
    p
}

/// x^254 = x^-1 for x != 0, and 0 for x == 0
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x3 = gf_mul(x2, x);
    let x6 = gf_mul(x3, x3);
    let x12 = gf_mul(x6, x6);
    let x15 = gf_mul(x12, x3);
    let x30 = gf_mul(x15, x15);
    let x60 = gf_mul(x30, x30);
    let x120 = gf_mul(x60, x60);
    let x126 = gf_mul(x120, x6);
    let x127 = gf_mul(x126, x);
    gf_mul(x127, x127)
}

/// Forward S-box: affine transform of the field inverse
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

#[inline(always)]
fn sub_word(word: [u8; 4]) -> [u8; 4] {
    [sbox(word[0]), sbox(word[1]), sbox(word[2]), sbox(word[3])]
}

/// AES-256 with an expanded, zeroize-on-drop key schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<ROUND_KEY_BYTES>,
}

impl Aes256 {
    /// Expand a 32-byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;

        let mut w = [[0u8; 4]; SCHEDULE_WORDS];
        for (i, word) in w.iter_mut().take(KEY_WORDS).enumerate() {
            word.copy_from_slice(&key[4 * i..4 * i + 4]);
        }

        for i in KEY_WORDS..SCHEDULE_WORDS {
            let mut temp = w[i - 1];
            if i % KEY_WORDS == 0 {
                temp.rotate_left(1);
                temp = sub_word(temp);
                temp[0] ^= RCON[i / KEY_WORDS - 1];
            } else if i % KEY_WORDS == 4 {
                temp = sub_word(temp);
            }
            for b in 0..4 {
                w[i][b] = w[i - KEY_WORDS][b] ^ temp[b];
            }
        }

        let mut round_keys = SecretBuffer::<ROUND_KEY_BYTES>::zeroed();
        for (dst, word) in round_keys.as_mut_slice().chunks_exact_mut(4).zip(w.iter()) {
            dst.copy_from_slice(word);
        }
        w.zeroize();

        Ok(Self { round_keys })
    }

    /// Encrypt one 16-byte block in place
    pub fn encrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let rk = self.round_keys.as_slice();

        add_round_key(block, &rk[..AES_BLOCK_SIZE]);
        for round in 1..AES256_ROUNDS {
            sub_bytes(block);
            shift_rows(block);
            mix_columns(block);
            add_round_key(block, &rk[round * AES_BLOCK_SIZE..(round + 1) * AES_BLOCK_SIZE]);
        }
        sub_bytes(block);
        shift_rows(block);
        add_round_key(block, &rk[AES256_ROUNDS * AES_BLOCK_SIZE..]);
    }
}

#[inline(always)]
fn add_round_key(state: &mut [u8; AES_BLOCK_SIZE], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

#[inline(always)]
fn sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    for b in state.iter_mut() {
        *b = sbox(*b);
    }
}

/// Row `r` of the column-major state rotates left by `r`
#[inline(always)]
fn shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    let old = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[4 * col + row] = old[4 * ((col + row) % 4) + row];
        }
    }
}

#[inline(always)]
fn mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        let all = a0 ^ a1 ^ a2 ^ a3;
        col[0] ^= all ^ xtime(a0 ^ a1);
        col[1] ^= all ^ xtime(a1 ^ a2);
        col[2] ^= all ^ xtime(a2 ^ a3);
        col[3] ^= all ^ xtime(a3 ^ a0);
    }
}
