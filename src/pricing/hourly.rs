use crate::errors::ParkingError;
use crate::pricing::{HourlyRates, PricingStrategy};
use crate::ticket::ParkingTicket;

/// Hourly pricing: billed hours times the vehicle type's hourly rate.
///
/// Billed hours are the parked duration rounded up to the next full hour,
/// with a minimum of one billed hour even for near-zero stays.
#[derive(Debug, Clone, Default)]
pub struct HourlyPricing {
    rates: HourlyRates,
}

impl HourlyPricing {
    /// Create an hourly strategy with the given rate table.
    pub fn new(rates: HourlyRates) -> Self {
        Self { rates }
    }

    /// The rate table this strategy charges by.
    pub fn rates(&self) -> &HourlyRates {
        &self.rates
    }
}

impl PricingStrategy for HourlyPricing {
    fn price(&self, ticket: &ParkingTicket) -> Result<u64, ParkingError> {
        let hours = ticket.billed_hours()?;
        Ok(hours * self.rates.rate_for(ticket.vehicle_type))
    }
}
