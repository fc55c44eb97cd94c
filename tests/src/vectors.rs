//! Fixed-seed vectors for BIKE-1 level 1
//!
//! Key generation uses the seeds `[0; 32]`, `[1; 32]`, `[2; 32]` and
//! encapsulation the seeds `[100; 32]`, `[200; 32]`. Keys and ciphertexts are
//! pinned by the SHA-384 of their byte encoding.

/// Key generation seeds, in draw order
pub const KEYGEN_SEEDS: [[u8; 32]; 3] = [[0; 32], [1; 32], [2; 32]];

/// Encapsulation seeds, in draw order
pub const ENCAPS_SEEDS: [[u8; 32]; 2] = [[100; 32], [200; 32]];

/// SHA-384 of the public key `f0 || f1`
pub const PUBLIC_KEY_SHA384: &str =
    "03a35a0018cb6eeddf50db929e78318c2edcb5b7b1ba5ef5000cadf78b6648c9367158ebbdd9329d1b8316f15463be90";

/// SHA-384 of the secret key `wlist0 || wlist1 || h0 || h1 || sigma0 || sigma1`
pub const SECRET_KEY_SHA384: &str =
    "250df834b67e45cb09ef013e9443378b864b03f35e032cff37f61cf8e571b735f3697990b4d1893f5b5db11c8964e1cd";

/// SHA-384 of the ciphertext `c0 || c1`
pub const CIPHERTEXT_SHA384: &str =
    "5ed37186c71299f58b9c5886ea29386fabdbe2e6fadd953b25aad985cba72b8ef1f838eaa104062d34528a07a8d18879";

/// The shared secret
pub const SHARED_SECRET: &str = "5396381899cf94e2775f1667bd0770636553168ba3956805284bce9968416043";

/// The implicit-rejection secret after flipping every bit of c0
pub const REJECTION_SECRET_FLIPPED_C0: &str =
    "672d0497fac0d701c3471569207a57533ab33a25532d46dcf431b361751c6c16";
