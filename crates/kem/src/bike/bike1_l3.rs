//! BIKE-1 at NIST security level 3

use super::kem::BikeKem;
use super::params::Bike1L3Params;

/// BIKE-1 level 3 KEM, implementing `bike_api::Kem`
pub type Bike1L3 = BikeKem<Bike1L3Params>;
