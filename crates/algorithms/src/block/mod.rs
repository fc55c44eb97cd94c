//! Block cipher used by the AES-CTR PRF

pub mod aes;

pub use aes::Aes256;
