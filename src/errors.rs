use std::fmt::{Debug, Display, Formatter, Result};

/// Represents errors that can occur while allocating, releasing or pricing
/// parking spots.
///
/// This enum encapsulates the error conditions that might arise during spot
/// assignment, ticket lifecycle management and snapshot handling.
///
/// # Examples
///
/// ```
/// use parklot::ParkingError;
///
/// // Capacity exhaustion: expected and recoverable, the caller may retry later
/// let full = ParkingError::NoAvailableSpot;
///
/// // Caller misuse: the plate already has an active ticket
/// let duplicate = ParkingError::DuplicateActiveTicket {
///     plate: "ABC-123".to_string(),
/// };
/// ```
pub enum ParkingError {
    /// No compatible spot is available on any level.
    ///
    /// This is an expected, recoverable outcome of `park`, not a system
    /// fault. The caller may retry once capacity frees up.
    NoAvailableSpot,

    /// The license plate already has an active ticket.
    ///
    /// Returned by `park` when the plate is still recorded in the active
    /// index; exactly one of two racing `park` calls for the same plate
    /// receives this error.
    DuplicateActiveTicket {
        /// The license plate that is already parked
        plate: String,
    },

    /// The license plate has no active ticket.
    ///
    /// Returned by `exit` when the plate is unknown or has already exited.
    NoActiveTicket {
        /// The license plate with no recorded ticket
        plate: String,
    },

    /// The vehicle's required size class does not fit the spot.
    IncompatibleVehicle {
        /// The spot that was targeted, in `L{l}-R{r}-S{n}` form
        spot: String,
        /// The vehicle type that does not fit
        vehicle_type: String,
    },

    /// The spot is not in the `Available` state.
    ///
    /// Returned by `try_assign` when another vehicle holds the spot or the
    /// spot is reserved or out of order.
    SpotUnavailable {
        /// The spot that was targeted
        spot: String,
    },

    /// The spot is not occupied, so it cannot be released.
    SpotNotOccupied {
        /// The spot that was targeted
        spot: String,
    },

    /// No spot with the given identifier exists in the lot.
    ///
    /// Returned by the administrative operations when the spot id does not
    /// resolve to any level.
    UnknownSpot {
        /// The unresolved spot identifier
        spot: String,
    },

    /// Error that occurs when parsing fails with a specific message.
    ///
    /// This variant is used when string conversion of identifiers, sizes or
    /// statuses fails.
    ParseError {
        /// Descriptive message explaining the parsing failure
        message: String,
    },

    /// Error indicating an operation cannot be performed for the specified reason.
    ///
    /// Used when an action is prevented by a precondition, such as pricing a
    /// ticket whose exit timestamp has not been stamped.
    InvalidOperation {
        /// Explanation of why the operation is invalid
        message: String,
    },

    /// Error raised when serialization of internal data structures fails.
    SerializationError {
        /// Descriptive message with the serialization failure details
        message: String,
    },

    /// Error raised when deserialization of external data into internal structures fails.
    DeserializationError {
        /// Descriptive message with the deserialization failure details
        message: String,
    },

    /// Error raised when a checksum validation fails while restoring a snapshot.
    ChecksumMismatch {
        /// The checksum that was expected according to the serialized payload
        expected: String,
        /// The checksum that was computed from the provided payload
        actual: String,
    },
}

impl Display for ParkingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ParkingError::NoAvailableSpot => write!(f, "No available spot"),
            ParkingError::DuplicateActiveTicket { plate } => {
                write!(f, "Plate {plate} already has an active ticket")
            }
            ParkingError::NoActiveTicket { plate } => {
                write!(f, "No active ticket for plate {plate}")
            }
            ParkingError::IncompatibleVehicle { spot, vehicle_type } => {
                write!(f, "Vehicle of type {vehicle_type} does not fit spot {spot}")
            }
            ParkingError::SpotUnavailable { spot } => {
                write!(f, "Spot {spot} is not available")
            }
            ParkingError::SpotNotOccupied { spot } => {
                write!(f, "Spot {spot} is not occupied")
            }
            ParkingError::UnknownSpot { spot } => write!(f, "Unknown spot: {spot}"),
            ParkingError::ParseError { message } => write!(f, "{message}"),
            ParkingError::InvalidOperation { message } => {
                write!(f, "Invalid operation: {message}")
            }
            ParkingError::SerializationError { message } => {
                write!(f, "Serialization error: {message}")
            }
            ParkingError::DeserializationError { message } => {
                write!(f, "Deserialization error: {message}")
            }
            ParkingError::ChecksumMismatch { expected, actual } => {
                write!(f, "Checksum mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl Debug for ParkingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for ParkingError {}

#[cfg(test)]
mod tests {
    use crate::errors::ParkingError;
    use std::error::Error;

    #[test]
    fn test_no_available_spot_display() {
        let error = ParkingError::NoAvailableSpot;
        assert_eq!(error.to_string(), "No available spot");
    }

    #[test]
    fn test_duplicate_active_ticket_display() {
        let error = ParkingError::DuplicateActiveTicket {
            plate: "ABC-123".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Plate ABC-123 already has an active ticket"
        );
    }

    #[test]
    fn test_no_active_ticket_display() {
        let error = ParkingError::NoActiveTicket {
            plate: "XYZ-999".to_string(),
        };
        assert_eq!(error.to_string(), "No active ticket for plate XYZ-999");
    }

    #[test]
    fn test_incompatible_vehicle_display() {
        let error = ParkingError::IncompatibleVehicle {
            spot: "L1-R1-S1".to_string(),
            vehicle_type: "TRUCK".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Vehicle of type TRUCK does not fit spot L1-R1-S1"
        );
    }

    #[test]
    fn test_spot_state_errors_display() {
        let unavailable = ParkingError::SpotUnavailable {
            spot: "L2-R1-S3".to_string(),
        };
        assert_eq!(unavailable.to_string(), "Spot L2-R1-S3 is not available");

        let not_occupied = ParkingError::SpotNotOccupied {
            spot: "L2-R1-S3".to_string(),
        };
        assert_eq!(not_occupied.to_string(), "Spot L2-R1-S3 is not occupied");

        let unknown = ParkingError::UnknownSpot {
            spot: "L9-R9-S9".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unknown spot: L9-R9-S9");
    }

    #[test]
    fn test_parse_error_display() {
        let error = ParkingError::ParseError {
            message: "Failed to parse SpotSize".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to parse SpotSize");
    }

    #[test]
    fn test_invalid_operation_display() {
        let error = ParkingError::InvalidOperation {
            message: "Cannot price a ticket without an exit timestamp".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid operation: Cannot price a ticket without an exit timestamp"
        );
    }

    #[test]
    fn test_checksum_mismatch_display() {
        let error = ParkingError::ChecksumMismatch {
            expected: "abc".to_string(),
            actual: "def".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Checksum mismatch: expected abc, got def"
        );
    }

    #[test]
    fn test_debug_matches_display() {
        let errors = [
            ParkingError::NoAvailableSpot,
            ParkingError::DuplicateActiveTicket {
                plate: "A".to_string(),
            },
            ParkingError::NoActiveTicket {
                plate: "B".to_string(),
            },
            ParkingError::ParseError {
                message: "Debug test".to_string(),
            },
            ParkingError::InvalidOperation {
                message: "Debug operation test".to_string(),
            },
        ];

        for error in &errors {
            assert_eq!(format!("{error:?}"), error.to_string());
        }
    }

    #[test]
    fn test_implements_error_trait() {
        let error = ParkingError::NoAvailableSpot;
        let _: &dyn Error = &error;
    }

    #[test]
    fn test_error_source() {
        // source() returns None since there are no nested errors
        let error = ParkingError::NoAvailableSpot;
        assert!(error.source().is_none());
    }
}
