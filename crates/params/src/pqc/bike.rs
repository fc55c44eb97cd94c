//! Constants for the BIKE-1 key encapsulation mechanism (Round 2)
//!
//! All three security levels use the Black-Gray-Flip decoder. The decoder
//! threshold is `floor(coeff0 + coeff1 * |s|)` where `|s|` is the syndrome
//! weight; both coefficients are stored scaled by [`BIKE_THRESHOLD_SCALE`]
//! so the threshold can be evaluated with integer arithmetic.

/// Size of every seed drawn from the caller's RNG, in bytes
pub const BIKE_SEED_BYTES: usize = 32;

/// Size of the shared secret, in bytes
pub const BIKE_SS_BYTES: usize = 32;

/// Gray-zone width of the Black-Gray-Flip decoder
pub const BIKE_DELTA: u8 = 3;

/// Number of circulant blocks in the parity-check matrix
pub const BIKE_N0: usize = 2;

/// Upper bound on AES invocations for a single PRF instance
pub const BIKE_MAX_AES_INVOCATIONS: u32 = 0xFFFF_FFFF;

/// Fixed-point scale of the threshold coefficients
pub const BIKE_THRESHOLD_SCALE: u64 = 100_000_000;

/// Structure containing the parameters of one BIKE-1 security level
pub struct Bike1Params {
    /// Block length r (an odd prime)
    pub r_bits: usize,

    /// Column weight of each secret block h0, h1
    pub dv: usize,

    /// Weight of the error vector
    pub t1: usize,

    /// Threshold intercept, scaled by `BIKE_THRESHOLD_SCALE`
    pub threshold_coeff0: u64,

    /// Threshold slope, scaled by `BIKE_THRESHOLD_SCALE`
    pub threshold_coeff1: u64,

    /// Decoder iterations
    pub max_iterations: usize,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Secret key size in bytes
    pub secret_key_size: usize,

    /// Ciphertext size in bytes
    pub ciphertext_size: usize,

    /// Shared secret size in bytes
    pub shared_secret_size: usize,
}

/// BIKE-1 parameters, NIST security level 1
pub const BIKE1_L1: Bike1Params = Bike1Params {
    r_bits: 11_779,
    dv: 71,
    t1: 134,
    threshold_coeff0: 1_353_000_000,
    threshold_coeff1: 697_220,
    max_iterations: 5,
    public_key_size: 2946,
    secret_key_size: 6460,
    ciphertext_size: 2946,
    shared_secret_size: BIKE_SS_BYTES,
};

/// BIKE-1 parameters, NIST security level 3
pub const BIKE1_L3: Bike1Params = Bike1Params {
    r_bits: 24_821,
    dv: 103,
    t1: 199,
    threshold_coeff0: 1_525_880_000,
    threshold_coeff1: 526_500,
    max_iterations: 6,
    public_key_size: 6206,
    secret_key_size: 13_236,
    ciphertext_size: 6206,
    shared_secret_size: BIKE_SS_BYTES,
};

/// BIKE-1 parameters, NIST security level 5
pub const BIKE1_L5: Bike1Params = Bike1Params {
    r_bits: 40_597,
    dv: 137,
    t1: 264,
    threshold_coeff0: 1_787_850_000,
    threshold_coeff1: 402_312,
    max_iterations: 7,
    public_key_size: 10_150,
    secret_key_size: 21_396,
    ciphertext_size: 10_150,
    shared_secret_size: BIKE_SS_BYTES,
};
