//! Parking spot: identity and thread-safe state transitions

use crate::errors::ParkingError;
use crate::spot::{SpotSize, SpotStatus};
use crate::vehicle::Vehicle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

/// Stable identifier of a parking spot: level, row and sequence number.
///
/// Displayed as `L{level}-R{row}-S{number}`, e.g. `L1-R2-S7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpotId {
    /// Level number, starting at 1
    pub level: u32,
    /// Row within the level, starting at 1
    pub row: u32,
    /// Sequence number within the row, starting at 1
    pub number: u32,
}

impl SpotId {
    /// Create a new spot identifier.
    pub fn new(level: u32, row: u32, number: u32) -> Self {
        Self { level, row, number }
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}-R{}-S{}", self.level, self.row, self.number)
    }
}

impl FromStr for SpotId {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || ParkingError::ParseError {
            message: format!("Failed to parse SpotId: {s}"),
        };

        let mut parts = s.split('-');
        let level = parts
            .next()
            .and_then(|p| p.strip_prefix('L'))
            .and_then(|p| p.parse().ok())
            .ok_or_else(parse_error)?;
        let row = parts
            .next()
            .and_then(|p| p.strip_prefix('R'))
            .and_then(|p| p.parse().ok())
            .ok_or_else(parse_error)?;
        let number = parts
            .next()
            .and_then(|p| p.strip_prefix('S'))
            .and_then(|p| p.parse().ok())
            .ok_or_else(parse_error)?;

        if parts.next().is_some() {
            return Err(parse_error());
        }

        Ok(SpotId { level, row, number })
    }
}

/// A single parking spot with a fixed size class and a mutable occupancy state.
///
/// Spots are created once at level initialization and never destroyed; only
/// the status and the occupant change. Every transition happens under the
/// per-spot occupant lock, while the status is mirrored in an atomic so that
/// availability reads never take the lock. Invariant: the status is
/// `Occupied` iff the occupant slot is set.
#[derive(Debug)]
pub struct ParkingSpot {
    /// The spot's stable identifier
    id: SpotId,

    /// The spot's fixed size class
    size: SpotSize,

    /// Lock-free mirror of the current status
    status: AtomicU8,

    /// The occupying vehicle, if any. The lock serializes transitions.
    occupant: Mutex<Option<Vehicle>>,
}

impl ParkingSpot {
    /// Create a new available spot.
    pub fn new(id: SpotId, size: SpotSize) -> Self {
        Self {
            id,
            size,
            status: AtomicU8::new(SpotStatus::Available.as_u8()),
            occupant: Mutex::new(None),
        }
    }

    /// The spot's identifier.
    pub fn id(&self) -> SpotId {
        self.id
    }

    /// The spot's size class.
    pub fn size(&self) -> SpotSize {
        self.size
    }

    /// The spot's current status. Lock-free read.
    pub fn status(&self) -> SpotStatus {
        SpotStatus::from_u8(self.status.load(Ordering::Acquire))
    }

    /// A copy of the occupying vehicle, if any.
    pub fn occupant(&self) -> Option<Vehicle> {
        self.lock_occupant().clone()
    }

    /// Returns true if the spot is available and the vehicle's required size
    /// class is compatible with this spot's size class.
    ///
    /// This is an advisory check; under concurrency the spot may be taken
    /// between this call and an assignment. [`try_assign`](Self::try_assign)
    /// re-validates under the lock.
    pub fn can_fit(&self, vehicle: &Vehicle) -> bool {
        self.status().is_available() && self.size.fits(vehicle.required_size())
    }

    /// Atomically claim the spot for the given vehicle.
    ///
    /// Fails with `IncompatibleVehicle` if the vehicle does not fit this size
    /// class, or `SpotUnavailable` if the spot is not in the `Available`
    /// state. The compatibility check and the status transition are a single
    /// critical section, so two racing claims can never both succeed.
    pub fn try_assign(&self, vehicle: &Vehicle) -> Result<(), ParkingError> {
        if !self.size.fits(vehicle.required_size()) {
            return Err(ParkingError::IncompatibleVehicle {
                spot: self.id.to_string(),
                vehicle_type: vehicle.vehicle_type().to_string(),
            });
        }

        let mut occupant = self.lock_occupant();
        if !self.status().is_available() {
            return Err(ParkingError::SpotUnavailable {
                spot: self.id.to_string(),
            });
        }

        *occupant = Some(vehicle.clone());
        self.status
            .store(SpotStatus::Occupied.as_u8(), Ordering::Release);
        Ok(())
    }

    /// Release the spot, returning the vehicle that held it.
    ///
    /// Fails with `SpotNotOccupied` if the spot is not occupied.
    pub fn release(&self) -> Result<Vehicle, ParkingError> {
        let mut occupant = self.lock_occupant();
        if !self.status().is_occupied() {
            return Err(ParkingError::SpotNotOccupied {
                spot: self.id.to_string(),
            });
        }

        let vehicle = occupant.take().expect("occupied spot has no occupant");
        self.status
            .store(SpotStatus::Available.as_u8(), Ordering::Release);
        Ok(vehicle)
    }

    /// Release the spot only if it is occupied by the vehicle with the given
    /// plate. Returns the vehicle on success, `None` if the plate does not
    /// match or the spot is not occupied.
    pub fn release_for(&self, plate: &str) -> Option<Vehicle> {
        let mut occupant = self.lock_occupant();
        if occupant.as_ref().is_some_and(|v| v.plate() == plate) {
            let vehicle = occupant.take();
            self.status
                .store(SpotStatus::Available.as_u8(), Ordering::Release);
            vehicle
        } else {
            None
        }
    }

    /// Administratively reserve the spot. Requires the `Available` state.
    pub fn reserve(&self) -> Result<(), ParkingError> {
        self.withdraw(SpotStatus::Reserved)
    }

    /// Administratively mark the spot out of order. Requires the `Available`
    /// state.
    pub fn mark_out_of_order(&self) -> Result<(), ParkingError> {
        self.withdraw(SpotStatus::OutOfOrder)
    }

    /// Return a reserved or out-of-order spot to service.
    pub fn reinstate(&self) -> Result<(), ParkingError> {
        let _occupant = self.lock_occupant();
        if !self.status().is_withdrawn() {
            return Err(ParkingError::InvalidOperation {
                message: format!(
                    "Spot {} is {}, only reserved or out-of-order spots can be reinstated",
                    self.id,
                    self.status()
                ),
            });
        }

        self.status
            .store(SpotStatus::Available.as_u8(), Ordering::Release);
        Ok(())
    }

    fn withdraw(&self, target: SpotStatus) -> Result<(), ParkingError> {
        let _occupant = self.lock_occupant();
        if !self.status().is_available() {
            return Err(ParkingError::SpotUnavailable {
                spot: self.id.to_string(),
            });
        }

        self.status.store(target.as_u8(), Ordering::Release);
        Ok(())
    }

    fn lock_occupant(&self) -> std::sync::MutexGuard<'_, Option<Vehicle>> {
        self.occupant.lock().expect("spot lock poisoned")
    }
}

impl fmt::Display for ParkingSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.size, self.status())
    }
}
