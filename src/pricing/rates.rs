use crate::vehicle::VehicleType;
use serde::{Deserialize, Serialize};

/// Per-vehicle-type hourly rates in cents.
///
/// The table is injectable configuration: construct it explicitly or start
/// from [`Default`], which carries the standard tariff (motorcycle 200,
/// car 500, truck 1000 cents per hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRates {
    /// Hourly rate for motorcycles, in cents
    pub motorcycle: u64,
    /// Hourly rate for cars, in cents
    pub car: u64,
    /// Hourly rate for trucks, in cents
    pub truck: u64,
}

impl HourlyRates {
    /// Create a rate table with explicit per-type rates.
    pub fn new(motorcycle: u64, car: u64, truck: u64) -> Self {
        Self {
            motorcycle,
            car,
            truck,
        }
    }

    /// The hourly rate for the given vehicle type.
    pub fn rate_for(&self, vehicle_type: VehicleType) -> u64 {
        match vehicle_type {
            VehicleType::Motorcycle => self.motorcycle,
            VehicleType::Car => self.car,
            VehicleType::Truck => self.truck,
        }
    }
}

impl Default for HourlyRates {
    fn default() -> Self {
        Self {
            motorcycle: 200,
            car: 500,
            truck: 1000,
        }
    }
}
