use crate::errors::ParkingError;
use crate::ticket::ParkingTicket;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The result of a completed exit: the closed ticket, the computed fee and
/// the parked duration, under a unique receipt identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitReceipt {
    /// Unique receipt identifier
    pub receipt_id: Uuid,

    /// The closed ticket, with exit timestamp and fee stamped
    pub ticket: ParkingTicket,

    /// The fee charged, in cents
    pub fee: u64,

    /// Parked duration in whole minutes
    pub duration_minutes: u64,
}

impl ExitReceipt {
    /// Create a receipt for a closed ticket.
    pub fn new(
        receipt_id: Uuid,
        ticket: ParkingTicket,
        fee: u64,
        duration_minutes: u64,
    ) -> Self {
        Self {
            receipt_id,
            ticket,
            fee,
            duration_minutes,
        }
    }

    /// Serializes the receipt to JSON.
    pub fn to_json(&self) -> Result<String, ParkingError> {
        serde_json::to_string(self).map_err(|error| ParkingError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes a receipt from JSON.
    pub fn from_json(data: &str) -> Result<Self, ParkingError> {
        serde_json::from_str(data).map_err(|error| ParkingError::DeserializationError {
            message: error.to_string(),
        })
    }
}

impl fmt::Display for ExitReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Receipt {} for {}: {} minutes, {} cents",
            self.receipt_id, self.ticket.plate, self.duration_minutes, self.fee
        )
    }
}
