//! Vehicle definitions

use crate::errors::ParkingError;
use crate::spot::SpotSize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents the type of an incoming vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    /// Two-wheeled vehicle, fits any spot size
    #[serde(rename(serialize = "MOTORCYCLE"))]
    #[serde(alias = "motorcycle", alias = "Motorcycle", alias = "MOTORCYCLE")]
    Motorcycle,
    /// Standard passenger car, requires at least a compact spot
    #[serde(rename(serialize = "CAR"))]
    #[serde(alias = "car", alias = "Car", alias = "CAR")]
    Car,
    /// Truck, requires a large spot
    #[serde(rename(serialize = "TRUCK"))]
    #[serde(alias = "truck", alias = "Truck", alias = "TRUCK")]
    Truck,
}

impl VehicleType {
    /// Returns the smallest spot size class this vehicle type can occupy.
    ///
    /// # Examples
    ///
    /// ```
    /// use parklot::{SpotSize, VehicleType};
    ///
    /// assert_eq!(VehicleType::Motorcycle.required_size(), SpotSize::Motorcycle);
    /// assert_eq!(VehicleType::Car.required_size(), SpotSize::Compact);
    /// assert_eq!(VehicleType::Truck.required_size(), SpotSize::Large);
    /// ```
    pub fn required_size(&self) -> SpotSize {
        match self {
            VehicleType::Motorcycle => SpotSize::Motorcycle,
            VehicleType::Car => SpotSize::Compact,
            VehicleType::Truck => SpotSize::Large,
        }
    }
}

impl FromStr for VehicleType {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MOTORCYCLE" => Ok(VehicleType::Motorcycle),
            "CAR" => Ok(VehicleType::Car),
            "TRUCK" => Ok(VehicleType::Truck),
            _ => Err(ParkingError::ParseError {
                message: format!("Failed to parse VehicleType: {s}"),
            }),
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Motorcycle => write!(f, "MOTORCYCLE"),
            VehicleType::Car => write!(f, "CAR"),
            VehicleType::Truck => write!(f, "TRUCK"),
        }
    }
}

/// A vehicle requesting a parking spot.
///
/// Vehicles are transient value objects: the lot does not retain them beyond
/// the occupant slot of an assigned spot and the ticket's vehicle-type field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// License plate, unique among currently parked vehicles
    plate: String,

    /// The vehicle's type, which determines its required spot size
    vehicle_type: VehicleType,
}

impl Vehicle {
    /// Construct a vehicle from its type tag and license plate.
    pub fn new(vehicle_type: VehicleType, plate: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
            vehicle_type,
        }
    }

    /// The vehicle's license plate.
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// The vehicle's type.
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// The smallest spot size class this vehicle can occupy.
    pub fn required_size(&self) -> SpotSize {
        self.vehicle_type.required_size()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vehicle_type, self.plate)
    }
}
