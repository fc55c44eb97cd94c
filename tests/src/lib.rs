//! Known-answer vectors and helpers shared by the BIKE integration tests

pub mod vectors;

use bike_algorithms::Sha384;

/// Hex SHA-384 of `bytes`, the form large vectors are pinned in
pub fn sha384_hex(bytes: &[u8]) -> String {
    hex::encode(&Sha384::digest(bytes)[..])
}
