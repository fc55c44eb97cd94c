//! BIKE-1 keys, ciphertexts and the [`Kem`] implementation

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use bike_api::error::Result as ApiResult;
use bike_api::{Kem, Serialize, SerializeSecret};
use bike_common::SecretBuffer;
use bike_internal::constant_time::ct_eq_choice;
use bike_internal::endian::u32_from_le_bytes;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::ind_cca::{kem_decaps, kem_encaps, kem_keygen};
use super::params::{BikeParams, BIKE_SHARED_SECRET_SIZE};
use super::types::{RVector, SeedPair, SeedTriple, SparseIndexList};
use crate::error::{validate, Error};

/// BIKE-1 public key `(f0, f1)`
pub struct BikePublicKey<P: BikeParams> {
    pub(crate) f0: RVector<P>,
    pub(crate) f1: RVector<P>,
}

impl<P: BikeParams> BikePublicKey<P> {
    /// First block, `g * h1`
    pub fn f0(&self) -> &RVector<P> {
        &self.f0
    }

    /// Second block, `g * h0`
    pub fn f1(&self) -> &RVector<P> {
        &self.f1
    }
}

impl<P: BikeParams> Clone for BikePublicKey<P> {
    fn clone(&self) -> Self {
        Self {
            f0: self.f0.clone(),
            f1: self.f1.clone(),
        }
    }
}

impl<P: BikeParams> fmt::Debug for BikePublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BikePublicKey<{}>", P::NAME)
    }
}

/// Parse two consecutive r-bit blocks, checking length and padding
fn parse_pair<P: BikeParams>(
    bytes: &[u8],
    reject: impl Fn(&'static str) -> Error,
) -> crate::error::Result<(RVector<P>, RVector<P>)> {
    if bytes.len() != 2 * P::R_SIZE {
        return Err(reject("wrong length"));
    }
    let (first, second) = bytes.split_at(P::R_SIZE);
    let ring = RVector::<P>::ring();
    if !ring.is_canonical(first) || !ring.is_canonical(second) {
        return Err(reject("nonzero padding bits"));
    }
    Ok((RVector::from_bytes(first)?, RVector::from_bytes(second)?))
}

impl<P: BikeParams> Serialize for BikePublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let (f0, f1) = parse_pair::<P>(bytes, |reason| Error::InvalidKey {
            key_type: "BIKE-1 public",
            reason,
        })?;
        Ok(Self { f0, f1 })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(P::PUBLIC_KEY_BYTES);
        out.extend_from_slice(self.f0.as_bytes());
        out.extend_from_slice(self.f1.as_bytes());
        out
    }
}

/// BIKE-1 ciphertext `(c0, c1)`
pub struct BikeCiphertext<P: BikeParams> {
    pub(crate) c0: RVector<P>,
    pub(crate) c1: RVector<P>,
}

impl<P: BikeParams> BikeCiphertext<P> {
    /// First block
    pub fn c0(&self) -> &RVector<P> {
        &self.c0
    }

    /// Second block
    pub fn c1(&self) -> &RVector<P> {
        &self.c1
    }
}

impl<P: BikeParams> Clone for BikeCiphertext<P> {
    fn clone(&self) -> Self {
        Self {
            c0: self.c0.clone(),
            c1: self.c1.clone(),
        }
    }
}

impl<P: BikeParams> fmt::Debug for BikeCiphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BikeCiphertext<{}>", P::NAME)
    }
}

impl<P: BikeParams> Serialize for BikeCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let (c0, c1) = parse_pair::<P>(bytes, |reason| Error::InvalidCiphertext {
            algorithm: P::NAME,
            reason,
        })?;
        Ok(Self { c0, c1 })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(P::CIPHERTEXT_BYTES);
        out.extend_from_slice(self.c0.as_bytes());
        out.extend_from_slice(self.c1.as_bytes());
        out
    }
}

/// BIKE-1 secret key: the two sparse blocks in list and dense form, and
/// the implicit-rejection vectors `sigma0`, `sigma1`
pub struct BikeSecretKey<P: BikeParams> {
    pub(crate) wlist0: SparseIndexList,
    pub(crate) wlist1: SparseIndexList,
    pub(crate) h0: RVector<P>,
    pub(crate) h1: RVector<P>,
    pub(crate) sigma0: RVector<P>,
    pub(crate) sigma1: RVector<P>,
}

impl<P: BikeParams> BikeSecretKey<P> {
    /// Set positions of h0, in sampling order
    pub fn wlist0(&self) -> &[u32] {
        &self.wlist0
    }

    /// Set positions of h1, in sampling order
    pub fn wlist1(&self) -> &[u32] {
        &self.wlist1
    }

    /// Dense h0
    pub fn h0(&self) -> &RVector<P> {
        &self.h0
    }

    /// Dense h1
    pub fn h1(&self) -> &RVector<P> {
        &self.h1
    }

    /// Rejection vectors `(sigma0, sigma1)`
    pub fn sigma(&self) -> (&RVector<P>, &RVector<P>) {
        (&self.sigma0, &self.sigma1)
    }
}

impl<P: BikeParams> Clone for BikeSecretKey<P> {
    fn clone(&self) -> Self {
        Self {
            wlist0: self.wlist0.clone(),
            wlist1: self.wlist1.clone(),
            h0: self.h0.clone(),
            h1: self.h1.clone(),
            sigma0: self.sigma0.clone(),
            sigma1: self.sigma1.clone(),
        }
    }
}

impl<P: BikeParams> Zeroize for BikeSecretKey<P> {
    fn zeroize(&mut self) {
        self.wlist0.zeroize();
        self.wlist1.zeroize();
        self.h0.zeroize();
        self.h1.zeroize();
        self.sigma0.zeroize();
        self.sigma1.zeroize();
    }
}

impl<P: BikeParams> fmt::Debug for BikeSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BikeSecretKey<{}>([REDACTED])", P::NAME)
    }
}

/// Read DV little-endian positions and check them against the dense block
fn parse_block<P: BikeParams>(
    list_bytes: &[u8],
    dense_bytes: &[u8],
) -> crate::error::Result<(SparseIndexList, RVector<P>)> {
    let mut list = Zeroizing::new(Vec::with_capacity(P::DV));
    for chunk in list_bytes.chunks_exact(4) {
        let idx = u32_from_le_bytes(chunk);
        validate::key((idx as usize) < P::R_BITS, "BIKE-1 secret", "index out of range")?;
        list.push(idx);
    }

    validate::key(
        RVector::<P>::ring().is_canonical(dense_bytes),
        "BIKE-1 secret",
        "nonzero padding bits",
    )?;
    let dense = RVector::<P>::from_bytes(dense_bytes)?;

    let mut expected = Zeroizing::new(alloc::vec![0u8; P::R_SIZE]);
    for &idx in list.iter() {
        expected[idx as usize / 8] |= 1 << (idx % 8);
    }
    let consistent = dense.weight() as usize == P::DV
        && bool::from(ct_eq_choice(&expected[..], dense.as_bytes()));
    validate::key(consistent, "BIKE-1 secret", "index list does not match dense block")?;

    Ok((list, dense))
}

impl<P: BikeParams> SerializeSecret for BikeSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::key(bytes.len() == P::SECRET_KEY_BYTES, "BIKE-1 secret", "wrong length")?;

        let list_len = 4 * P::DV;
        let (lists, dense) = bytes.split_at(2 * list_len);
        let (list0, list1) = lists.split_at(list_len);
        let blocks: Vec<&[u8]> = dense.chunks(P::R_SIZE).collect();

        let (wlist0, h0) = parse_block::<P>(list0, blocks[0])?;
        let (wlist1, h1) = parse_block::<P>(list1, blocks[1])?;

        let ring = RVector::<P>::ring();
        validate::key(
            ring.is_canonical(blocks[2]) && ring.is_canonical(blocks[3]),
            "BIKE-1 secret",
            "nonzero padding bits",
        )?;

        Ok(Self {
            wlist0,
            wlist1,
            h0,
            h1,
            sigma0: RVector::from_bytes(blocks[2])?,
            sigma1: RVector::from_bytes(blocks[3])?,
        })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(Vec::with_capacity(P::SECRET_KEY_BYTES));
        for idx in self.wlist0.iter().chain(self.wlist1.iter()) {
            out.extend_from_slice(&idx.to_le_bytes());
        }
        for block in [&self.h0, &self.h1, &self.sigma0, &self.sigma1] {
            out.extend_from_slice(block.as_bytes());
        }
        out
    }
}

/// 32-byte BIKE-1 shared secret
#[derive(Clone, Debug, Zeroize)]
pub struct BikeSharedSecret(SecretBuffer<BIKE_SHARED_SECRET_SIZE>);

impl BikeSharedSecret {
    pub(crate) fn new(bytes: &[u8; BIKE_SHARED_SECRET_SIZE]) -> Self {
        let mut buf = SecretBuffer::zeroed();
        buf.as_mut_slice().copy_from_slice(bytes);
        Self(buf)
    }

    /// The secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl AsRef<[u8]> for BikeSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl SerializeSecret for BikeSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBuffer::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

/// BIKE-1 KEM at the security level given by `P`
pub struct BikeKem<P: BikeParams> {
    _params: PhantomData<P>,
}

impl<P: BikeParams> BikeKem<P> {
    /// Key generation from explicit seeds
    pub fn keypair_from_seeds(seeds: &SeedTriple) -> ApiResult<(BikePublicKey<P>, BikeSecretKey<P>)> {
        Ok(kem_keygen::<P>(seeds)?)
    }

    /// Encapsulation from explicit seeds
    pub fn encapsulate_with_seeds(
        public_key: &BikePublicKey<P>,
        seeds: &SeedPair,
    ) -> ApiResult<(BikeCiphertext<P>, BikeSharedSecret)> {
        let (ct, ss) = kem_encaps::<P>(public_key, seeds)?;
        Ok((ct, BikeSharedSecret::new(&ss)))
    }
}

impl<P: BikeParams> Kem for BikeKem<P> {
    type PublicKey = BikePublicKey<P>;
    type SecretKey = BikeSecretKey<P>;
    type SharedSecret = BikeSharedSecret;
    type Ciphertext = BikeCiphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let seeds = SeedTriple::generate(rng).map_err(|_| Error::RandomGeneration {
            algorithm: P::NAME,
            details: "key generation seed unavailable",
        })?;
        Self::keypair_from_seeds(&seeds)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let seeds = SeedPair::generate(rng).map_err(|_| Error::RandomGeneration {
            algorithm: P::NAME,
            details: "encapsulation seed unavailable",
        })?;
        Self::encapsulate_with_seeds(public_key, &seeds)
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let ss = kem_decaps::<P>(secret_key, ciphertext)?;
        Ok(BikeSharedSecret::new(&ss))
    }
}
