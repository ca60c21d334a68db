//! Parking tickets: the record of one vehicle's occupancy from entry to exit

use crate::errors::ParkingError;
use crate::spot::SpotId;
use crate::vehicle::VehicleType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a unique, monotonically increasing ticket identifier.
///
/// Displayed as `TICKET-{n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketId(u64);

impl TicketId {
    /// Create a ticket id from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The numeric value of this id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TICKET-{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("TICKET-")
            .and_then(|n| n.parse().ok())
            .map(TicketId)
            .ok_or_else(|| ParkingError::ParseError {
                message: format!("Failed to parse TicketId: {s}"),
            })
    }
}

/// The allocation receipt for one parked vehicle.
///
/// Created when a park succeeds, with the exit timestamp and fee unset.
/// Stamped exactly once at exit, after which the ticket is closed and no
/// longer addressable by license plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingTicket {
    /// Unique ticket identifier
    pub id: TicketId,

    /// License plate of the parked vehicle
    pub plate: String,

    /// The parked vehicle's type, used for pricing
    pub vehicle_type: VehicleType,

    /// Identifier of the assigned spot
    pub spot_id: SpotId,

    /// The level the spot belongs to
    pub level: u32,

    /// Entry timestamp, milliseconds since the Unix epoch
    pub entry_time: u64,

    /// Exit timestamp, set once when the vehicle leaves
    pub exit_time: Option<u64>,

    /// Computed fee in cents, set together with the exit timestamp
    pub fee: Option<u64>,
}

impl ParkingTicket {
    /// Create a new active ticket with the given entry timestamp.
    pub fn new(
        id: TicketId,
        plate: impl Into<String>,
        vehicle_type: VehicleType,
        spot_id: SpotId,
        level: u32,
        entry_time: u64,
    ) -> Self {
        Self {
            id,
            plate: plate.into(),
            vehicle_type,
            spot_id,
            level,
            entry_time,
            exit_time: None,
            fee: None,
        }
    }

    /// Returns true while the exit timestamp has not been stamped.
    pub fn is_active(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Stamp the exit timestamp, closing the ticket.
    pub fn stamp_exit(&mut self, exit_time: u64) {
        self.exit_time = Some(exit_time);
    }

    /// Record the computed fee in cents.
    pub fn set_fee(&mut self, fee: u64) {
        self.fee = Some(fee);
    }

    /// Parked duration in whole minutes between entry and exit.
    ///
    /// Fails with `InvalidOperation` while the ticket is still active.
    pub fn duration_minutes(&self) -> Result<u64, ParkingError> {
        let exit_time = self.exit_time.ok_or_else(|| ParkingError::InvalidOperation {
            message: format!("Ticket {} has no exit timestamp", self.id),
        })?;

        Ok(exit_time.saturating_sub(self.entry_time) / 60_000)
    }

    /// Billed hours for this ticket: the parked duration rounded up to the
    /// next full hour, with a minimum of one billed hour.
    pub fn billed_hours(&self) -> Result<u64, ParkingError> {
        let minutes = self.duration_minutes()?;
        Ok(minutes.div_ceil(60).max(1))
    }

    /// Serializes the ticket to JSON.
    pub fn to_json(&self) -> Result<String, ParkingError> {
        serde_json::to_string(self).map_err(|error| ParkingError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes a ticket from JSON.
    pub fn from_json(data: &str) -> Result<Self, ParkingError> {
        serde_json::from_str(data).map_err(|error| ParkingError::DeserializationError {
            message: error.to_string(),
        })
    }
}

impl fmt::Display for ParkingTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} at {}",
            self.id, self.vehicle_type, self.plate, self.spot_id
        )
    }
}
