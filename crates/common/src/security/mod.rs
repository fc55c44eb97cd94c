//! Security primitives for handling sensitive material

pub mod secret;

pub use secret::SecretBuffer;
