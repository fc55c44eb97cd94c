//! BIKE-1 parameter sets

use bike_params::pqc::bike::{
    self as global_params, BIKE_DELTA, BIKE_MAX_AES_INVOCATIONS, BIKE_N0, BIKE_SEED_BYTES,
    BIKE_SS_BYTES, BIKE_THRESHOLD_SCALE,
};

/// Seed size drawn from the caller's RNG
pub const BIKE_SEED_SIZE: usize = BIKE_SEED_BYTES;
/// Shared secret size for all BIKE-1 levels
pub const BIKE_SHARED_SECRET_SIZE: usize = BIKE_SS_BYTES;
/// AES invocation budget of every PRF instance
pub const MAX_AES_INVOCATIONS: u32 = BIKE_MAX_AES_INVOCATIONS;
/// Gray-zone width of the decoder
pub const DELTA: u8 = BIKE_DELTA;
/// Fixed-point scale of the decoder threshold coefficients
pub const THRESHOLD_SCALE: u64 = BIKE_THRESHOLD_SCALE;

/// Number of bits needed to represent `value`
pub(crate) const fn bit_length(value: usize) -> usize {
    (usize::BITS - value.leading_zeros()) as usize
}

/// Trait defining the parameters of one BIKE-1 security level.
///
/// The derived sizes are provided; an implementation only names its level.
pub trait BikeParams: Send + Sync + 'static {
    /// Block length r
    const R_BITS: usize;
    /// Weight of each secret block
    const DV: usize;
    /// Weight of the error vector
    const T1: usize;
    /// Decoder iterations
    const MAX_IT: usize;
    /// Threshold intercept, scaled by [`THRESHOLD_SCALE`]
    const THRESHOLD_COEFF0: u64;
    /// Threshold slope, scaled by [`THRESHOLD_SCALE`]
    const THRESHOLD_COEFF1: u64;
    /// Algorithm name string
    const NAME: &'static str;

    /// Code length n = 2r
    const N_BITS: usize = BIKE_N0 * Self::R_BITS;
    /// Bytes per r-bit vector
    const R_SIZE: usize = (Self::R_BITS + 7) / 8;
    /// Bytes per n-bit vector
    const N_SIZE: usize = (Self::N_BITS + 7) / 8;
    /// Bit-sliced counter width, enough to hold DV and the sign of a difference
    const SLICES: usize = bit_length(Self::DV) + 1;
    /// Step-two threshold of the first decoder iteration
    const TH2: u8 = ((Self::DV + 1) / 2 + 1) as u8;

    /// Public key size in bytes
    const PUBLIC_KEY_BYTES: usize = BIKE_N0 * Self::R_SIZE;
    /// Secret key size in bytes
    const SECRET_KEY_BYTES: usize = BIKE_N0 * (4 * Self::DV + 2 * Self::R_SIZE);
    /// Ciphertext size in bytes
    const CIPHERTEXT_BYTES: usize = BIKE_N0 * Self::R_SIZE;
}

// Concrete parameter implementations for the BIKE-1 levels.

/// Parameters of BIKE-1, NIST security level 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bike1L1Params;
impl BikeParams for Bike1L1Params {
    const R_BITS: usize = global_params::BIKE1_L1.r_bits;
    const DV: usize = global_params::BIKE1_L1.dv;
    const T1: usize = global_params::BIKE1_L1.t1;
    const MAX_IT: usize = global_params::BIKE1_L1.max_iterations;
    const THRESHOLD_COEFF0: u64 = global_params::BIKE1_L1.threshold_coeff0;
    const THRESHOLD_COEFF1: u64 = global_params::BIKE1_L1.threshold_coeff1;
    const NAME: &'static str = "BIKE-1-L1";
}

/// Parameters of BIKE-1, NIST security level 3
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bike1L3Params;
impl BikeParams for Bike1L3Params {
    const R_BITS: usize = global_params::BIKE1_L3.r_bits;
    const DV: usize = global_params::BIKE1_L3.dv;
    const T1: usize = global_params::BIKE1_L3.t1;
    const MAX_IT: usize = global_params::BIKE1_L3.max_iterations;
    const THRESHOLD_COEFF0: u64 = global_params::BIKE1_L3.threshold_coeff0;
    const THRESHOLD_COEFF1: u64 = global_params::BIKE1_L3.threshold_coeff1;
    const NAME: &'static str = "BIKE-1-L3";
}

/// Parameters of BIKE-1, NIST security level 5
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bike1L5Params;
impl BikeParams for Bike1L5Params {
    const R_BITS: usize = global_params::BIKE1_L5.r_bits;
    const DV: usize = global_params::BIKE1_L5.dv;
    const T1: usize = global_params::BIKE1_L5.t1;
    const MAX_IT: usize = global_params::BIKE1_L5.max_iterations;
    const THRESHOLD_COEFF0: u64 = global_params::BIKE1_L5.threshold_coeff0;
    const THRESHOLD_COEFF1: u64 = global_params::BIKE1_L5.threshold_coeff1;
    const NAME: &'static str = "BIKE-1-L5";
}
