//! One parking level: a fixed set of spots, per-size availability counters
//! and the best-fit matching policy.

use crate::errors::ParkingError;
use crate::level::statistics::LevelStatistics;
use crate::level::{LevelSnapshot, SpotSnapshot};
use crate::spot::{ParkingSpot, SpotId, SpotSize};
use crate::vehicle::Vehicle;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};

/// Spots per row when laying out a level.
const SPOTS_PER_ROW: u32 = 10;

/// A parking level with a fixed set of spots.
///
/// The level owns its spots and a per-size-class availability counter that is
/// maintained incrementally: the thread that wins a spot claim performs the
/// matching counter update, so the counters are never recomputed by scanning.
/// Levels are independent of each other; operations on different levels never
/// contend.
#[derive(Debug)]
pub struct ParkingLevel {
    /// The level number, starting at 1
    number: u32,

    /// All spots on this level, in creation order
    spots: Vec<Arc<ParkingSpot>>,

    /// Available-spot counters, indexed by size class
    available: [AtomicUsize; 3],

    /// Activity statistics for this level
    stats: Arc<LevelStatistics>,
}

impl ParkingLevel {
    /// Create a level with the standard capacity split: 20% motorcycle,
    /// 60% compact and the remainder large spots.
    pub fn new(number: u32, total_spots: usize) -> Self {
        let motorcycle = total_spots * 20 / 100;
        let compact = total_spots * 60 / 100;
        let large = total_spots - motorcycle - compact;
        Self::with_capacity(number, motorcycle, compact, large)
    }

    /// Create a level with explicit per-size capacities.
    ///
    /// Spots are laid out size class by size class in ascending order, ten
    /// per row, so iteration in creation order visits smaller classes first.
    pub fn with_capacity(number: u32, motorcycle: usize, compact: usize, large: usize) -> Self {
        let total = motorcycle + compact + large;
        let mut spots = Vec::with_capacity(total);

        let sizes = [
            (SpotSize::Motorcycle, motorcycle),
            (SpotSize::Compact, compact),
            (SpotSize::Large, large),
        ];

        let mut sequence = 0u32;
        for (size, count) in sizes {
            for _ in 0..count {
                let row = sequence / SPOTS_PER_ROW + 1;
                let spot_number = sequence % SPOTS_PER_ROW + 1;
                spots.push(Arc::new(ParkingSpot::new(
                    SpotId::new(number, row, spot_number),
                    size,
                )));
                sequence += 1;
            }
        }

        Self {
            number,
            spots,
            available: [
                AtomicUsize::new(motorcycle),
                AtomicUsize::new(compact),
                AtomicUsize::new(large),
            ],
            stats: Arc::new(LevelStatistics::new()),
        }
    }

    /// The level number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// All spots on this level, in creation order.
    pub fn spots(&self) -> &[Arc<ParkingSpot>] {
        &self.spots
    }

    /// The statistics for this level.
    pub fn stats(&self) -> Arc<LevelStatistics> {
        self.stats.clone()
    }

    /// The cached available count for a size class. Lock-free read.
    pub fn available_count(&self, size: SpotSize) -> usize {
        self.available[size.index()].load(Ordering::Acquire)
    }

    /// Total available spots across all size classes.
    pub fn total_available(&self) -> usize {
        SpotSize::ALL
            .into_iter()
            .map(|size| self.available_count(size))
            .sum()
    }

    /// Look up a spot by its identifier.
    pub fn find_by_id(&self, id: SpotId) -> Option<Arc<ParkingSpot>> {
        self.spots.iter().find(|spot| spot.id() == id).cloned()
    }

    /// Find a compatible available spot for the vehicle without claiming it.
    ///
    /// Uses the best-fit-by-size-ascending policy: the vehicle's required
    /// class first, then each larger class, in creation order within a
    /// class. This is an advisory probe; [`park`](Self::park) claims spots
    /// atomically and is what concurrent callers must use.
    pub fn find_spot(&self, vehicle: &Vehicle) -> Option<Arc<ParkingSpot>> {
        for size in vehicle.required_size().upgrade_path() {
            for spot in self.spots_of(size) {
                if spot.can_fit(vehicle) {
                    return Some(spot.clone());
                }
            }
        }
        None
    }

    /// Park the vehicle on this level, returning the claimed spot.
    ///
    /// Walks the eligible size classes smallest-first and claims the first
    /// spot that accepts the vehicle. Claiming and the status transition are
    /// one critical section per spot, so a spot can never be assigned twice;
    /// losers of a claim race simply move on to the next candidate. Returns
    /// `None` when no compatible spot is available — an expected outcome,
    /// not an error.
    pub fn park(&self, vehicle: &Vehicle) -> Option<Arc<ParkingSpot>> {
        let required = vehicle.required_size();

        for size in required.upgrade_path() {
            for spot in self.spots_of(size) {
                if spot.try_assign(vehicle).is_ok() {
                    self.available[size.index()].fetch_sub(1, Ordering::AcqRel);
                    self.stats.record_parked(size != required);
                    debug!(
                        "Vehicle {} parked at {} on level {}",
                        vehicle.plate(),
                        spot.id(),
                        self.number
                    );
                    return Some(spot.clone());
                }
                trace!("Spot {} skipped for {}", spot.id(), vehicle.plate());
            }
        }

        self.stats.record_rejection();
        None
    }

    /// Release the spot occupied by the vehicle with the given plate.
    ///
    /// Scans the spots in creation order and frees the matching one,
    /// incrementing the corresponding size-class counter. Returns the freed
    /// spot, or `None` if no vehicle with that plate is parked here.
    pub fn release(&self, plate: &str) -> Option<Arc<ParkingSpot>> {
        for spot in &self.spots {
            if spot.release_for(plate).is_some() {
                self.available[spot.size().index()].fetch_add(1, Ordering::AcqRel);
                self.stats.record_released();
                debug!(
                    "Vehicle {} released spot {} on level {}",
                    plate,
                    spot.id(),
                    self.number
                );
                return Some(spot.clone());
            }
        }
        None
    }

    /// Release one specific spot, provided it is occupied by the vehicle
    /// with the given plate.
    ///
    /// Unlike [`release`](Self::release) this never scans: the caller names
    /// the exact spot, so a second vehicle with the same plate elsewhere on
    /// the level can never be freed by mistake. Returns `None` if the spot
    /// does not exist, is not occupied, or holds a different plate.
    pub fn release_spot(&self, id: SpotId, plate: &str) -> Option<Arc<ParkingSpot>> {
        let spot = self.find_by_id(id)?;
        spot.release_for(plate)?;
        self.available[spot.size().index()].fetch_add(1, Ordering::AcqRel);
        self.stats.record_released();
        debug!(
            "Vehicle {} released spot {} on level {}",
            plate,
            spot.id(),
            self.number
        );
        Some(spot)
    }

    /// Administratively reserve an available spot.
    pub fn reserve(&self, id: SpotId) -> Result<(), ParkingError> {
        let spot = self.require_spot(id)?;
        spot.reserve()?;
        self.available[spot.size().index()].fetch_sub(1, Ordering::AcqRel);
        Ok(())
    }

    /// Administratively mark an available spot out of order.
    pub fn mark_out_of_order(&self, id: SpotId) -> Result<(), ParkingError> {
        let spot = self.require_spot(id)?;
        spot.mark_out_of_order()?;
        self.available[spot.size().index()].fetch_sub(1, Ordering::AcqRel);
        Ok(())
    }

    /// Return a reserved or out-of-order spot to service.
    pub fn reinstate(&self, id: SpotId) -> Result<(), ParkingError> {
        let spot = self.require_spot(id)?;
        spot.reinstate()?;
        self.available[spot.size().index()].fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    /// Create a snapshot of the current level state.
    pub fn snapshot(&self) -> LevelSnapshot {
        let mut snapshot = LevelSnapshot::new(self.number);
        snapshot.spots = self
            .spots
            .iter()
            .map(|spot| SpotSnapshot {
                id: spot.id(),
                size: spot.size(),
                status: spot.status(),
                plate: spot.occupant().map(|v| v.plate().to_string()),
            })
            .collect();
        snapshot.refresh_aggregates();
        snapshot
    }

    fn spots_of(&self, size: SpotSize) -> impl Iterator<Item = &Arc<ParkingSpot>> {
        self.spots.iter().filter(move |spot| spot.size() == size)
    }

    fn require_spot(&self, id: SpotId) -> Result<Arc<ParkingSpot>, ParkingError> {
        self.find_by_id(id).ok_or_else(|| ParkingError::UnknownSpot {
            spot: id.to_string(),
        })
    }
}
