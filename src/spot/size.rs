//! Spot size classes and the upgrade-only compatibility rule

use crate::errors::ParkingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents the size class of a parking spot.
///
/// Size classes are totally ordered (`Motorcycle < Compact < Large`) and the
/// ordering drives the assignment rule: a vehicle may occupy a spot of its
/// required class or any larger class, never a smaller one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SpotSize {
    /// Motorcycle-only spot, the smallest class
    #[serde(rename(serialize = "MOTORCYCLE"))]
    #[serde(alias = "motorcycle", alias = "Motorcycle", alias = "MOTORCYCLE")]
    Motorcycle,
    /// Compact spot, fits cars and motorcycles
    #[serde(rename(serialize = "COMPACT"))]
    #[serde(alias = "compact", alias = "Compact", alias = "COMPACT")]
    Compact,
    /// Large spot, fits every vehicle type
    #[serde(rename(serialize = "LARGE"))]
    #[serde(alias = "large", alias = "Large", alias = "LARGE")]
    Large,
}

impl SpotSize {
    /// All size classes in ascending order.
    pub const ALL: [SpotSize; 3] = [SpotSize::Motorcycle, SpotSize::Compact, SpotSize::Large];

    /// Returns true if a spot of this size can hold a vehicle that requires
    /// the given size class.
    ///
    /// # Examples
    ///
    /// ```
    /// use parklot::SpotSize;
    ///
    /// assert!(SpotSize::Large.fits(SpotSize::Compact));
    /// assert!(SpotSize::Compact.fits(SpotSize::Motorcycle));
    /// assert!(!SpotSize::Motorcycle.fits(SpotSize::Compact));
    /// ```
    pub fn fits(&self, required: SpotSize) -> bool {
        *self >= required
    }

    /// Iterates the eligible size classes for a vehicle requiring this
    /// class, smallest first: the class itself, then each larger class.
    pub fn upgrade_path(&self) -> impl Iterator<Item = SpotSize> {
        let start = *self;
        SpotSize::ALL.into_iter().filter(move |size| *size >= start)
    }

    /// Stable index of this size class, used for per-class counters.
    pub(crate) fn index(&self) -> usize {
        match self {
            SpotSize::Motorcycle => 0,
            SpotSize::Compact => 1,
            SpotSize::Large => 2,
        }
    }
}

impl FromStr for SpotSize {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MOTORCYCLE" => Ok(SpotSize::Motorcycle),
            "COMPACT" => Ok(SpotSize::Compact),
            "LARGE" => Ok(SpotSize::Large),
            _ => Err(ParkingError::ParseError {
                message: format!("Failed to parse SpotSize: {s}"),
            }),
        }
    }
}

impl fmt::Display for SpotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotSize::Motorcycle => write!(f, "MOTORCYCLE"),
            SpotSize::Compact => write!(f, "COMPACT"),
            SpotSize::Large => write!(f, "LARGE"),
        }
    }
}
