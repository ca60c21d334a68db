use crate::errors::ParkingError;
use crate::pricing::PricingStrategy;
use crate::ticket::ParkingTicket;

/// Flat pricing: one fixed fee per stay, regardless of duration or vehicle
/// type. Useful for event tariffs and for exercising strategy replacement.
#[derive(Debug, Clone, Copy)]
pub struct FlatFeePricing {
    fee: u64,
}

impl FlatFeePricing {
    /// Create a flat strategy charging `fee` cents per stay.
    pub fn new(fee: u64) -> Self {
        Self { fee }
    }

    /// The fee charged per stay.
    pub fn fee(&self) -> u64 {
        self.fee
    }
}

impl PricingStrategy for FlatFeePricing {
    fn price(&self, ticket: &ParkingTicket) -> Result<u64, ParkingError> {
        // Still requires a closed ticket, so swapping strategies cannot
        // silently price an active one
        ticket.duration_minutes()?;
        Ok(self.fee)
    }
}
