//! BIKE-1 key encapsulation mechanism (Round 2)
//!
//! A QC-MDPC code-based KEM. The secret key is a pair of sparse circulant
//! blocks `(h0, h1)`, the public key is `(g * h1, g * h0)` for a random
//! odd-weight `g`, and decapsulation runs the Black-Gray-Flip decoder.
//! Decapsulation uses implicit rejection: an undecodable ciphertext yields
//! a pseudorandom secret derived from `sigma`, never an error.

pub mod decoder;
pub mod hashing;
mod ind_cca;
pub mod kem;
pub mod nist;
pub mod params;
pub mod split;
pub mod types;

// Concrete BIKE-1 levels
mod bike1_l1;
mod bike1_l3;
mod bike1_l5;

pub use self::bike1_l1::Bike1L1;
pub use self::bike1_l3::Bike1L3;
pub use self::bike1_l5::Bike1L5;

pub use self::kem::{BikeCiphertext, BikeKem, BikePublicKey, BikeSecretKey, BikeSharedSecret};
pub use self::params::{BikeParams, Bike1L1Params, Bike1L3Params, Bike1L5Params, BIKE_SHARED_SECRET_SIZE};
pub use self::types::{RVector, SeedPair, SeedTriple, SparseIndexList, SplitError};
