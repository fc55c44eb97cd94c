//! Key Encapsulation Mechanisms
//!
//! This crate implements the BIKE-1 code-based post-quantum KEM at NIST
//! security levels 1, 3 and 5, behind the `bike_api::Kem` trait and a
//! NIST-style byte-buffer interface.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bike;
pub mod error;

// Re-exports
pub use bike::{Bike1L1, Bike1L3, Bike1L5};
pub use error::{Error, Result};
