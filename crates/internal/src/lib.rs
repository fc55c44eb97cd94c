//! Internal utilities shared by the BIKE crates
//!
//! Nothing in this crate is part of the public API; it holds the
//! constant-time helpers and byte/word packing used by the arithmetic and KEM
//! layers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
