//! BIKE-1 at NIST security level 1

use super::kem::BikeKem;
use super::params::Bike1L1Params;

/// BIKE-1 level 1 KEM, implementing `bike_api::Kem`
pub type Bike1L1 = BikeKem<Bike1L1Params>;
