//! The parking lot allocator: routes park and exit requests across levels,
//! issues tickets and computes fees on release.

use crate::errors::ParkingError;
use crate::level::{LevelSnapshot, ParkingLevel};
use crate::lot::ExitReceipt;
use crate::pricing::{HourlyPricing, PricingStrategy};
use crate::spot::{SpotId, SpotSize};
use crate::ticket::ParkingTicket;
use crate::utils::{TicketSequence, UuidGenerator, current_time_millis};
use crate::vehicle::{Vehicle, VehicleType};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Number of levels in the standard lot layout.
const STANDARD_LEVELS: u32 = 3;

/// Spots per level in the standard lot layout.
const STANDARD_SPOTS_PER_LEVEL: usize = 100;

/// The parking lot: the single shared allocator over a fixed set of levels.
///
/// One instance is constructed at process start and handed to all callers;
/// every operation takes `&self` and is safe under concurrent use. The lot
/// exclusively owns its levels, the active-ticket index and the ticket-id
/// counter. Park requests are routed to levels in ascending level order;
/// each level serves them with its own best-fit matching policy.
pub struct ParkingLot {
    /// The levels, in fixed routing order
    levels: Vec<Arc<ParkingLevel>>,

    /// Active tickets indexed by license plate
    active: DashMap<String, ParkingTicket>,

    /// Monotonic ticket-id source
    tickets: TicketSequence,

    /// Receipt-id source
    receipts: UuidGenerator,

    /// The installed pricing strategy, swappable at runtime
    pricing: RwLock<Arc<dyn PricingStrategy>>,
}

impl ParkingLot {
    /// Create a lot over the given levels with the default hourly pricing.
    pub fn new(levels: Vec<ParkingLevel>) -> Self {
        Self::with_pricing(levels, Arc::new(HourlyPricing::default()))
    }

    /// Create a lot over the given levels with an injected pricing strategy.
    pub fn with_pricing(levels: Vec<ParkingLevel>, pricing: Arc<dyn PricingStrategy>) -> Self {
        Self {
            levels: levels.into_iter().map(Arc::new).collect(),
            active: DashMap::new(),
            tickets: TicketSequence::new(),
            receipts: UuidGenerator::new(uuid::Uuid::new_v4()),
            pricing: RwLock::new(pricing),
        }
    }

    /// Create the standard lot layout: three levels of one hundred spots
    /// each, split 20/60/20 across the size classes.
    pub fn standard() -> Self {
        let levels = (1..=STANDARD_LEVELS)
            .map(|number| ParkingLevel::new(number, STANDARD_SPOTS_PER_LEVEL))
            .collect();
        Self::new(levels)
    }

    /// The levels of this lot, in routing order.
    pub fn levels(&self) -> &[Arc<ParkingLevel>] {
        &self.levels
    }

    /// Number of tickets currently active.
    pub fn active_tickets(&self) -> usize {
        self.active.len()
    }

    /// A copy of the active ticket for the given plate, if any.
    pub fn ticket_for(&self, plate: &str) -> Option<ParkingTicket> {
        self.active.get(plate).map(|entry| entry.value().clone())
    }

    /// Park a vehicle, issuing a ticket on success.
    ///
    /// Fails with `DuplicateActiveTicket` if the plate already holds an
    /// active ticket, or `NoAvailableSpot` if no level can serve the
    /// vehicle. The duplicate check and the ticket insert are one atomic
    /// step on the active index, so two racing calls for the same plate
    /// resolve to exactly one winner.
    pub fn park(
        &self,
        vehicle_type: VehicleType,
        plate: &str,
    ) -> Result<ParkingTicket, ParkingError> {
        if self.active.contains_key(plate) {
            warn!("Park rejected: plate {plate} already has an active ticket");
            return Err(ParkingError::DuplicateActiveTicket {
                plate: plate.to_string(),
            });
        }

        let vehicle = Vehicle::new(vehicle_type, plate);

        // Claim a spot first, then publish the ticket. The index shard is
        // only locked for the entry insert itself, never across the level
        // scan, so unrelated plates on the same shard do not serialize
        // behind a slow scan.
        for level in &self.levels {
            if let Some(spot) = level.park(&vehicle) {
                let ticket = ParkingTicket::new(
                    self.tickets.next(),
                    plate,
                    vehicle_type,
                    spot.id(),
                    level.number(),
                    current_time_millis(),
                );

                return match self.active.entry(plate.to_string()) {
                    Entry::Occupied(_) => {
                        // Lost a same-plate race after claiming the spot.
                        // Undo the claim so nothing leaks.
                        level.release_spot(spot.id(), plate);
                        warn!("Park rejected: plate {plate} already has an active ticket");
                        Err(ParkingError::DuplicateActiveTicket {
                            plate: plate.to_string(),
                        })
                    }
                    Entry::Vacant(vacancy) => {
                        info!("Vehicle {plate} parked at {} under {}", spot.id(), ticket.id);
                        vacancy.insert(ticket.clone());
                        Ok(ticket)
                    }
                };
            }
        }

        debug!("No available spot for {vehicle}");
        Err(ParkingError::NoAvailableSpot)
    }

    /// Exit a vehicle: stamp the exit time, price the stay, free the spot
    /// and retire the ticket.
    ///
    /// Fails with `NoActiveTicket` if the plate has no active ticket. The
    /// stay is priced on a working copy before the ticket is claimed from
    /// the index, so a failing pricing strategy leaves the ticket active and
    /// the spot occupied and the exit can simply be retried. The claim
    /// itself is guarded by the ticket id: of two racing exits for the same
    /// plate exactly one wins, and a successor ticket from an
    /// exit-and-repark of the plate can never be claimed by a stale call.
    pub fn exit(&self, plate: &str) -> Result<ExitReceipt, ParkingError> {
        let mut ticket = self
            .ticket_for(plate)
            .ok_or_else(|| ParkingError::NoActiveTicket {
                plate: plate.to_string(),
            })?;

        ticket.stamp_exit(current_time_millis());

        let strategy = self
            .pricing
            .read()
            .expect("pricing strategy lock poisoned")
            .clone();
        let fee = strategy.price(&ticket)?;
        ticket.set_fee(fee);

        self.active
            .remove_if(plate, |_, active| active.id == ticket.id)
            .ok_or_else(|| ParkingError::NoActiveTicket {
                plate: plate.to_string(),
            })?;

        // A release failure past this point means the spot state
        // desynchronized from the active index. That is a logic fault, not
        // a caller error.
        let level = self
            .levels
            .iter()
            .find(|level| level.number() == ticket.level)
            .unwrap_or_else(|| {
                panic!(
                    "{} for plate {plate} references unknown level {}",
                    ticket.id, ticket.level
                )
            });
        let spot = level.release_spot(ticket.spot_id, plate).unwrap_or_else(|| {
            panic!(
                "{} records plate {plate} at {} but the vehicle is not parked there",
                ticket.id, ticket.spot_id
            )
        });

        let duration_minutes = ticket.duration_minutes()?;
        info!("Vehicle {plate} exited {}: {fee} cents for {duration_minutes} minutes", spot.id());

        Ok(ExitReceipt::new(
            self.receipts.next(),
            ticket,
            fee,
            duration_minutes,
        ))
    }

    /// Available spots of the given size class across all levels. Read-only.
    pub fn availability(&self, size: SpotSize) -> usize {
        self.levels
            .iter()
            .map(|level| level.available_count(size))
            .sum()
    }

    /// Returns true if at least one spot of the given size class is free.
    pub fn has_spot(&self, size: SpotSize) -> bool {
        self.availability(size) > 0
    }

    /// Availability per size class across all levels, in ascending size order.
    pub fn availability_report(&self) -> Vec<(SpotSize, usize)> {
        SpotSize::ALL
            .into_iter()
            .map(|size| (size, self.availability(size)))
            .collect()
    }

    /// Replace the pricing strategy.
    ///
    /// Takes effect for subsequent exits only: tickets are priced under the
    /// strategy installed at the moment of exit.
    pub fn set_pricing_strategy(&self, strategy: Arc<dyn PricingStrategy>) {
        *self
            .pricing
            .write()
            .expect("pricing strategy lock poisoned") = strategy;
        info!("Pricing strategy replaced");
    }

    /// Administratively reserve an available spot.
    pub fn reserve(&self, id: SpotId) -> Result<(), ParkingError> {
        self.level_of(id)?.reserve(id)
    }

    /// Administratively mark an available spot out of order.
    pub fn mark_out_of_order(&self, id: SpotId) -> Result<(), ParkingError> {
        self.level_of(id)?.mark_out_of_order(id)
    }

    /// Return a reserved or out-of-order spot to service.
    pub fn reinstate(&self, id: SpotId) -> Result<(), ParkingError> {
        self.level_of(id)?.reinstate(id)
    }

    /// Snapshot every level's current state, in routing order.
    pub fn snapshot(&self) -> Vec<LevelSnapshot> {
        self.levels.iter().map(|level| level.snapshot()).collect()
    }

    fn level_of(&self, id: SpotId) -> Result<&Arc<ParkingLevel>, ParkingError> {
        self.levels
            .iter()
            .find(|level| level.number() == id.level)
            .ok_or_else(|| ParkingError::UnknownSpot {
                spot: id.to_string(),
            })
    }
}

impl std::fmt::Debug for ParkingLot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParkingLot")
            .field("levels", &self.levels.len())
            .field("active_tickets", &self.active.len())
            .finish()
    }
}
