mod level;
mod snapshot;
mod statistics;

pub use level::ParkingLevel;
pub use snapshot::{LevelSnapshot, LevelSnapshotPackage, SpotSnapshot};
pub use statistics::LevelStatistics;
