//! # bike
//!
//! The BIKE-1 code-based post-quantum key encapsulation mechanism.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! bike = "0.3"
//! ```
//!
//! ```no_run
//! use bike::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = Bike1L1::keypair(&mut OsRng)?;
//! let (ct, ss) = Bike1L1::encapsulate(&mut OsRng, &pk)?;
//! assert_eq!(Bike1L1::decapsulate(&sk, &ct)?.as_bytes(), ss.as_bytes());
//! # Ok::<(), bike::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `kem` (default): the BIKE-1 KEM
//! - `algorithms`: the underlying primitives (AES-CTR PRF, SHA-384,
//!   GF(2) ring arithmetic, sampling)
//! - `full`: everything
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bike-api`]: the `Kem` and serialization traits, the error type
//! - [`bike-common`]: zeroizing secret storage
//! - [`bike-internal`]: constant-time helpers
//! - [`bike-params`]: BIKE-1 parameter tables
//! - [`bike-algorithms`]: primitives
//! - [`bike-kem`]: the KEM

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use bike_api as api;
pub use bike_common as common;
pub use bike_internal as internal;
pub use bike_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use bike_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use bike_kem as kem;

/// Common imports for bike users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Kem, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::common::SecretBuffer;

    #[cfg(feature = "kem")]
    pub use crate::kem::bike::{
        Bike1L1, Bike1L3, Bike1L5, BikeCiphertext, BikePublicKey, BikeSecretKey, BikeSharedSecret,
        SeedPair, SeedTriple,
    };
}
