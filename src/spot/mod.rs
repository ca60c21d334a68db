mod base;

mod size;

mod status;

pub use base::{ParkingSpot, SpotId};
pub use size::SpotSize;
pub use status::SpotStatus;
