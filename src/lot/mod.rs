mod lot;

mod receipt;


pub use lot::ParkingLot;
pub use receipt::ExitReceipt;
