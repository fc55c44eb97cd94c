//! BIKE-1 at NIST security level 5

use super::kem::BikeKem;
use super::params::Bike1L5Params;

/// BIKE-1 level 5 KEM, implementing `bike_api::Kem`
pub type Bike1L5 = BikeKem<Bike1L5Params>;
