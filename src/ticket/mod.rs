mod base;

pub use base::{ParkingTicket, TicketId};
