//! Common implementations and shared functionality for the BIKE library

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
