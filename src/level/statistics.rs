use crate::utils::current_time_millis;
use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Tracks activity statistics for one parking level
#[derive(Debug)]
pub struct LevelStatistics {
    /// Number of vehicles parked on this level
    vehicles_parked: AtomicUsize,

    /// Number of vehicles released from this level
    vehicles_released: AtomicUsize,

    /// Number of assignments that used a larger size class than required
    upgrades_assigned: AtomicUsize,

    /// Number of park attempts this level could not serve
    park_rejections: AtomicUsize,

    /// Timestamp of the last successful park, milliseconds since the epoch
    last_park_time: AtomicU64,

    /// Timestamp of the last release, milliseconds since the epoch
    last_release_time: AtomicU64,
}

impl LevelStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            vehicles_parked: AtomicUsize::new(0),
            vehicles_released: AtomicUsize::new(0),
            upgrades_assigned: AtomicUsize::new(0),
            park_rejections: AtomicUsize::new(0),
            last_park_time: AtomicU64::new(0),
            last_release_time: AtomicU64::new(0),
        }
    }

    /// Record a successful park. `upgraded` marks assignments that fell back
    /// to a larger size class than the vehicle required.
    pub fn record_parked(&self, upgraded: bool) {
        self.vehicles_parked.fetch_add(1, Ordering::Relaxed);
        if upgraded {
            self.upgrades_assigned.fetch_add(1, Ordering::Relaxed);
        }
        self.last_park_time
            .store(current_time_millis(), Ordering::Relaxed);
    }

    /// Record a vehicle leaving this level.
    pub fn record_released(&self) {
        self.vehicles_released.fetch_add(1, Ordering::Relaxed);
        self.last_release_time
            .store(current_time_millis(), Ordering::Relaxed);
    }

    /// Record a park attempt this level could not serve.
    pub fn record_rejection(&self) {
        self.park_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Total vehicles parked on this level since creation.
    pub fn vehicles_parked(&self) -> usize {
        self.vehicles_parked.load(Ordering::Relaxed)
    }

    /// Total vehicles released from this level since creation.
    pub fn vehicles_released(&self) -> usize {
        self.vehicles_released.load(Ordering::Relaxed)
    }

    /// Assignments that used a larger size class than required.
    pub fn upgrades_assigned(&self) -> usize {
        self.upgrades_assigned.load(Ordering::Relaxed)
    }

    /// Park attempts this level could not serve.
    pub fn park_rejections(&self) -> usize {
        self.park_rejections.load(Ordering::Relaxed)
    }

    /// Vehicles currently on this level according to the counters.
    pub fn currently_parked(&self) -> usize {
        self.vehicles_parked()
            .saturating_sub(self.vehicles_released())
    }

    /// Timestamp of the last successful park, 0 if none yet.
    pub fn last_park_time(&self) -> u64 {
        self.last_park_time.load(Ordering::Relaxed)
    }

    /// Timestamp of the last release, 0 if none yet.
    pub fn last_release_time(&self) -> u64 {
        self.last_release_time.load(Ordering::Relaxed)
    }
}

impl Default for LevelStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LevelStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LevelStatistics {{ parked: {}, released: {}, upgrades: {}, rejections: {} }}",
            self.vehicles_parked(),
            self.vehicles_released(),
            self.upgrades_assigned(),
            self.park_rejections()
        )
    }
}
