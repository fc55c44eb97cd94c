//! Trait definitions implemented by the BIKE algorithm crates

pub mod kem;
pub mod serialize;

pub use kem::Kem;
pub use serialize::{Serialize, SerializeSecret};
