//! Code-based cryptography primitives
//!
//! Arithmetic in the quasi-cyclic ring GF(2)\[x\]/(x^r - 1) and the samplers
//! that produce its uniform and fixed-weight elements.

pub mod gf2x;
pub mod sampling;

pub use gf2x::CyclicRing;
pub use sampling::{generate_sparse_rep, sample_uniform_r_bits, sample_uniform_r_bits_with_prf, WeightParity};
