mod base;

pub use base::{Vehicle, VehicleType};
