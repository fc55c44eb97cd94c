//! AES-CTR pseudorandom function
//!
//! The keystream is AES-256 under a 32-byte seed applied to a 128-bit counter
//! block whose low 64 bits hold a little-endian counter starting at zero; the
//! high 64 bits stay zero. Output is buffered one block at a time so that
//! successive calls to [`AesCtrPrf::fill`] read one contiguous stream.
//!
//! Every instance carries a budget of AES invocations. Exhausting it is an
//! error rather than a counter wrap.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Aes256;
use crate::error::{validate, Result};
use bike_params::utils::symmetric::{AES256_KEY_SIZE, AES_BLOCK_SIZE};

/// Stateful AES-CTR keystream generator
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct AesCtrPrf {
    cipher: Aes256,
    counter: u64,
    buffer: [u8; AES_BLOCK_SIZE],
    pos: usize,
    remaining: u32,
}

impl AesCtrPrf {
    /// Key a new PRF from `seed`, allowing at most `max_invocations` AES calls
    pub fn new(seed: &[u8], max_invocations: u32) -> Result<Self> {
        validate::length("AES-CTR PRF seed", seed.len(), AES256_KEY_SIZE)?;

        Ok(Self {
            cipher: Aes256::new(seed)?,
            counter: 0,
            buffer: [0u8; AES_BLOCK_SIZE],
            pos: AES_BLOCK_SIZE,
            remaining: max_invocations,
        })
    }

    /// AES invocations still allowed
    pub fn remaining_invocations(&self) -> u32 {
        self.remaining
    }

    /// Fill `out` with the next `out.len()` keystream bytes
    pub fn fill(&mut self, out: &mut [u8]) -> Result<()> {
        let len = out.len();

        if len + self.pos <= AES_BLOCK_SIZE {
            out.copy_from_slice(&self.buffer[self.pos..self.pos + len]);
            self.pos += len;
            return Ok(());
        }

        // Drain what is left of the current block
        let mut idx = AES_BLOCK_SIZE - self.pos;
        out[..idx].copy_from_slice(&self.buffer[self.pos..]);
        self.pos = 0;

        while len - idx >= AES_BLOCK_SIZE {
            let block = self.next_block()?;
            out[idx..idx + AES_BLOCK_SIZE].copy_from_slice(&block);
            idx += AES_BLOCK_SIZE;
        }

        self.buffer = self.next_block()?;
        self.pos = len - idx;
        out[idx..].copy_from_slice(&self.buffer[..self.pos]);

        Ok(())
    }

    fn next_block(&mut self) -> Result<[u8; AES_BLOCK_SIZE]> {
        validate::processing(
            self.remaining != 0,
            "AES-CTR PRF",
            "AES invocation budget exhausted",
        )?;

        let mut block = [0u8; AES_BLOCK_SIZE];
        block[..8].copy_from_slice(&self.counter.to_le_bytes());
        self.cipher.encrypt_block(&mut block);

        self.counter = self.counter.wrapping_add(1);
        self.remaining -= 1;
        Ok(block)
    }
}
