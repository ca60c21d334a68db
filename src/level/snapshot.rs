use crate::errors::ParkingError;
use crate::spot::{SpotId, SpotSize, SpotStatus};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Format version for checksum-enabled level snapshots.
const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Point-in-time state of a single spot, captured for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotSnapshot {
    /// The spot's identifier
    pub id: SpotId,
    /// The spot's fixed size class
    pub size: SpotSize,
    /// The spot's status at capture time
    pub status: SpotStatus,
    /// License plate of the occupying vehicle, if occupied
    pub plate: Option<String>,
}

/// A snapshot of one parking level. Provides the per-size availability counts
/// and the state of every spot at a given point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// The level number
    pub level: u32,
    /// Available motorcycle spots at capture time
    pub available_motorcycle: usize,
    /// Available compact spots at capture time
    pub available_compact: usize,
    /// Available large spots at capture time
    pub available_large: usize,
    /// State of every spot on the level, in creation order
    pub spots: Vec<SpotSnapshot>,
}

impl LevelSnapshot {
    /// Create a new empty snapshot for a level
    pub fn new(level: u32) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// The available count captured for the given size class.
    pub fn available_count(&self, size: SpotSize) -> usize {
        match size {
            SpotSize::Motorcycle => self.available_motorcycle,
            SpotSize::Compact => self.available_compact,
            SpotSize::Large => self.available_large,
        }
    }

    /// Total available spots across all size classes.
    pub fn total_available(&self) -> usize {
        self.available_motorcycle + self.available_compact + self.available_large
    }

    /// Recomputes the per-size availability counts from the spot list.
    ///
    /// After this call the aggregate counts are exact for the captured spot
    /// states, regardless of what the producer recorded.
    pub fn refresh_aggregates(&mut self) {
        let mut counts = [0usize; 3];
        for spot in &self.spots {
            if spot.status.is_available() {
                counts[spot.size.index()] += 1;
            }
        }
        self.available_motorcycle = counts[SpotSize::Motorcycle.index()];
        self.available_compact = counts[SpotSize::Compact.index()];
        self.available_large = counts[SpotSize::Large.index()];
    }
}

impl fmt::Display for LevelSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Level {}:", self.level)?;
        writeln!(f, "  Motorcycle spots: {}", self.available_motorcycle)?;
        writeln!(f, "  Compact spots: {}", self.available_compact)?;
        write!(f, "  Large spots: {}", self.available_large)
    }
}

/// Serialized representation of a level snapshot including checksum metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSnapshotPackage {
    /// Version of the serialized snapshot schema to support future migrations.
    pub version: u32,
    /// Captured snapshot data.
    pub snapshot: LevelSnapshot,
    /// Hex-encoded checksum used to validate the snapshot integrity.
    pub checksum: String,
}

impl LevelSnapshotPackage {
    /// Creates a new snapshot package computing the checksum for the provided snapshot.
    pub fn new(mut snapshot: LevelSnapshot) -> Result<Self, ParkingError> {
        snapshot.refresh_aggregates();

        let checksum = Self::compute_checksum(&snapshot)?;

        Ok(Self {
            version: SNAPSHOT_FORMAT_VERSION,
            snapshot,
            checksum,
        })
    }

    /// Serializes the package to JSON.
    pub fn to_json(&self) -> Result<String, ParkingError> {
        serde_json::to_string(self).map_err(|error| ParkingError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes a package from JSON.
    pub fn from_json(data: &str) -> Result<Self, ParkingError> {
        serde_json::from_str(data).map_err(|error| ParkingError::DeserializationError {
            message: error.to_string(),
        })
    }

    /// Validates the checksum contained in the package against the serialized snapshot data.
    pub fn validate(&self) -> Result<(), ParkingError> {
        if self.version != SNAPSHOT_FORMAT_VERSION {
            return Err(ParkingError::InvalidOperation {
                message: format!(
                    "Unsupported snapshot version: {} (expected {})",
                    self.version, SNAPSHOT_FORMAT_VERSION
                ),
            });
        }

        let computed = Self::compute_checksum(&self.snapshot)?;
        if computed != self.checksum {
            return Err(ParkingError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual: computed,
            });
        }

        Ok(())
    }

    /// Consumes the package after validating the checksum and returns the contained snapshot.
    pub fn into_snapshot(self) -> Result<LevelSnapshot, ParkingError> {
        self.validate()?;
        Ok(self.snapshot)
    }

    fn compute_checksum(snapshot: &LevelSnapshot) -> Result<String, ParkingError> {
        let payload =
            serde_json::to_vec(snapshot).map_err(|error| ParkingError::SerializationError {
                message: error.to_string(),
            })?;

        let mut hasher = Sha256::new();
        hasher.update(&payload);
        let checksum_bytes = hasher.finalize();
        Ok(format!("{checksum_bytes:x}"))
    }
}
