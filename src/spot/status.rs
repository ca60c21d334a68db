use crate::errors::ParkingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the current status of a parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpotStatus {
    /// Spot is free and may be assigned
    Available,

    /// Spot is held by a parked vehicle
    Occupied,

    /// Spot is administratively reserved and cannot be assigned
    Reserved,

    /// Spot is out of order and cannot be assigned
    OutOfOrder,
}

impl SpotStatus {
    /// Returns true if the spot may be assigned to a vehicle
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns true if a vehicle currently holds the spot
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied)
    }

    /// Returns true if the spot has been administratively withdrawn
    /// (reserved or out of order)
    pub fn is_withdrawn(&self) -> bool {
        matches!(self, Self::Reserved | Self::OutOfOrder)
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            SpotStatus::Available => 0,
            SpotStatus::Occupied => 1,
            SpotStatus::Reserved => 2,
            SpotStatus::OutOfOrder => 3,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => SpotStatus::Available,
            1 => SpotStatus::Occupied,
            2 => SpotStatus::Reserved,
            _ => SpotStatus::OutOfOrder,
        }
    }
}

impl FromStr for SpotStatus {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AVAILABLE" => Ok(SpotStatus::Available),
            "OCCUPIED" => Ok(SpotStatus::Occupied),
            "RESERVED" => Ok(SpotStatus::Reserved),
            "OUTOFORDER" | "OUT_OF_ORDER" => Ok(SpotStatus::OutOfOrder),
            _ => Err(ParkingError::ParseError {
                message: format!("Invalid SpotStatus: {s}"),
            }),
        }
    }
}

impl std::fmt::Display for SpotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpotStatus::Available => write!(f, "AVAILABLE"),
            SpotStatus::Occupied => write!(f, "OCCUPIED"),
            SpotStatus::Reserved => write!(f, "RESERVED"),
            SpotStatus::OutOfOrder => write!(f, "OUT_OF_ORDER"),
        }
    }
}
