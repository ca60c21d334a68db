use crate::errors::ParkingError;
use crate::ticket::ParkingTicket;

/// A pricing strategy maps a closed ticket to a fee.
///
/// Implementations must be pure with respect to shared state: they may read
/// the ticket and their own configuration but must not mutate either. The
/// ticket must have both entry and exit timestamps stamped; pricing an active
/// ticket fails with `InvalidOperation`.
///
/// Strategies are installed on the lot behind a shared handle and can be
/// swapped at runtime; a ticket is priced under the strategy active at the
/// moment of exit, not at the moment of park.
pub trait PricingStrategy: Send + Sync {
    /// Compute the fee in cents for a closed ticket.
    fn price(&self, ticket: &ParkingTicket) -> Result<u64, ParkingError>;
}
