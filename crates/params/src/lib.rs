//! Constant values for BIKE cryptographic operations
//!
//! Parameter sets for the QC-MDPC key encapsulation mechanism and the sizes of
//! the symmetric primitives it is built on.

#![no_std]

pub mod pqc;
pub mod utils;
