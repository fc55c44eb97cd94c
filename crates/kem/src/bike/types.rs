//! Fixed-width bit vectors and the seed bundles the KEM consumes

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use bike_algorithms::code::gf2x::{self, CyclicRing};
use bike_common::SecretBuffer;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

use super::params::{BikeParams, BIKE_SEED_SIZE};
use crate::error::{validate, Result};

/// Positions of the set bits of a sparse vector, wiped on drop
pub type SparseIndexList = Zeroizing<Vec<u32>>;

/// An r-bit vector stored as `R_SIZE` little-endian bytes.
///
/// The bits above r in the last byte are always zero.
pub struct RVector<P: BikeParams> {
    bytes: Zeroizing<Vec<u8>>,
    _params: PhantomData<P>,
}

impl<P: BikeParams> RVector<P> {
    /// The ring this vector lives in
    pub fn ring() -> CyclicRing {
        CyclicRing::new(P::R_BITS)
    }

    /// The all-zero vector
    pub fn zero() -> Self {
        Self {
            bytes: Zeroizing::new(vec![0u8; P::R_SIZE]),
            _params: PhantomData,
        }
    }

    /// Parse a vector, rejecting a wrong length or set padding bits
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::serialization(
            bytes.len() == P::R_SIZE,
            "r-bit vector",
            "wrong length",
        )?;
        validate::serialization(
            Self::ring().is_canonical(bytes),
            "r-bit vector",
            "padding bits are set",
        )?;
        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
            _params: PhantomData,
        })
    }

    /// Adopt `bytes` as a vector, fitting it to `R_SIZE` and clearing the padding bits
    pub(crate) fn from_masked(mut bytes: Zeroizing<Vec<u8>>) -> Self {
        bytes.resize(P::R_SIZE, 0);
        Self::ring().mask_padding(&mut bytes);
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// The byte encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of set bits
    pub fn weight(&self) -> u32 {
        gf2x::hamming_weight(&self.bytes)
    }

    /// Sum in GF(2)
    pub fn xor(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            bytes: gf2x::add(&self.bytes, &other.bytes)?,
            _params: PhantomData,
        })
    }

    /// Product with a dense vector
    pub fn mul(&self, other: &Self) -> Result<Self> {
        Ok(Self::from_masked(Self::ring().mod_mul(&self.bytes, &other.bytes)?))
    }

    /// Product with the sparse vector whose set bits are `indices`
    pub fn mul_sparse(&self, indices: &[u32]) -> Result<Self> {
        Ok(Self::from_masked(Self::ring().mod_mul_sparse(&self.bytes, indices)?))
    }

    /// Constant-time equality
    pub fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice())
    }
}

impl<P: BikeParams> Clone for RVector<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: BikeParams> Zeroize for RVector<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: BikeParams> AsRef<[u8]> for RVector<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: BikeParams> fmt::Debug for RVector<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RVector<{}>([REDACTED])", P::NAME)
    }
}

/// An n-bit error vector split into its two r-bit halves
pub struct SplitError<P: BikeParams> {
    /// Bits `[0, r)`
    pub e0: RVector<P>,
    /// Bits `[r, 2r)`, realigned to start at bit 0
    pub e1: RVector<P>,
}

impl<P: BikeParams> SplitError<P> {
    /// The zero error
    pub fn zero() -> Self {
        Self {
            e0: RVector::zero(),
            e1: RVector::zero(),
        }
    }

    /// Combined weight of both halves
    pub fn weight(&self) -> u32 {
        self.e0.weight() + self.e1.weight()
    }

    /// Constant-time equality of both halves
    pub fn ct_eq(&self, other: &Self) -> Choice {
        self.e0.ct_eq(&other.e0) & self.e1.ct_eq(&other.e1)
    }
}

impl<P: BikeParams> Clone for SplitError<P> {
    fn clone(&self) -> Self {
        Self {
            e0: self.e0.clone(),
            e1: self.e1.clone(),
        }
    }
}

impl<P: BikeParams> fmt::Debug for SplitError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitError")
            .field("e0", &self.e0)
            .field("e1", &self.e1)
            .finish()
    }
}

fn draw_seeds<R: RngCore + CryptoRng, const K: usize>(
    rng: &mut R,
) -> core::result::Result<[SecretBuffer<BIKE_SEED_SIZE>; K], rand::Error> {
    let mut seeds: [SecretBuffer<BIKE_SEED_SIZE>; K] = core::array::from_fn(|_| SecretBuffer::zeroed());
    for seed in seeds.iter_mut() {
        rng.try_fill_bytes(seed.as_mut_slice())?;
    }
    Ok(seeds)
}

/// The three key-generation seeds: secret blocks, `g`, and `sigma`
#[derive(Clone, Debug)]
pub struct SeedTriple {
    seeds: [SecretBuffer<BIKE_SEED_SIZE>; 3],
}

impl SeedTriple {
    /// Use caller-supplied seeds
    pub fn new(seed0: [u8; BIKE_SEED_SIZE], seed1: [u8; BIKE_SEED_SIZE], seed2: [u8; BIKE_SEED_SIZE]) -> Self {
        Self {
            seeds: [
                SecretBuffer::new(seed0),
                SecretBuffer::new(seed1),
                SecretBuffer::new(seed2),
            ],
        }
    }

    /// Draw the three seeds from `rng`, in order
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> core::result::Result<Self, rand::Error> {
        Ok(Self {
            seeds: draw_seeds(rng)?,
        })
    }

    /// Seed of the PRF that samples h0 and h1
    pub fn h_seed(&self) -> &[u8] {
        self.seeds[0].as_slice()
    }

    /// Seed of the odd-weight vector g
    pub fn g_seed(&self) -> &[u8] {
        self.seeds[1].as_slice()
    }

    /// Seed of the PRF that samples sigma0 and sigma1
    pub fn sigma_seed(&self) -> &[u8] {
        self.seeds[2].as_slice()
    }
}

/// The two encapsulation seeds; only the second one keys the message PRF
#[derive(Clone, Debug)]
pub struct SeedPair {
    seeds: [SecretBuffer<BIKE_SEED_SIZE>; 2],
}

impl SeedPair {
    /// Use caller-supplied seeds
    pub fn new(seed0: [u8; BIKE_SEED_SIZE], seed1: [u8; BIKE_SEED_SIZE]) -> Self {
        Self {
            seeds: [SecretBuffer::new(seed0), SecretBuffer::new(seed1)],
        }
    }

    /// Draw both seeds from `rng`, in order
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> core::result::Result<Self, rand::Error> {
        Ok(Self {
            seeds: draw_seeds(rng)?,
        })
    }

    /// Seed of the message PRF
    pub fn message_seed(&self) -> &[u8] {
        self.seeds[1].as_slice()
    }
}
