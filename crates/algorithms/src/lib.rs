//! Cryptographic primitives for the BIKE key encapsulation mechanism
//!
//! This crate provides the building blocks the KEM layer composes:
//!
//! - [`block::Aes256`]: AES-256 encryption with a computed (table-free) S-box
//! - [`prf::AesCtrPrf`]: the AES-CTR pseudorandom function with a bounded
//!   invocation budget
//! - [`hash::Sha384`]: SHA-384 with zeroizing digests
//! - [`code::gf2x`]: constant-time arithmetic in GF(2)\[x\]/(x^r - 1)
//! - [`code::sampling`]: uniform and fixed-weight vector sampling

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher
pub mod block;
pub use block::Aes256;

// Hash function
pub mod hash;
pub use hash::Sha384;

// Pseudorandom function
pub mod prf;
pub use prf::AesCtrPrf;

// Code-based primitives
pub mod code;
pub use code::gf2x::CyclicRing;
