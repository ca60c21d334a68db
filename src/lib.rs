//!  # ParkLot
//!
//!  A concurrent parking-lot resource allocator in Rust. This library tracks a
//!  fixed pool of heterogeneous parking spots across multiple levels, assigns
//!  them to incoming vehicles under a size-compatibility policy, issues
//!  time-stamped tickets and computes usage-based fees on release.
//!
//!  ## Features
//!
//!  - Thread-safe park and exit operations with atomic counters and a
//!    lock-free active-ticket index
//!  - Best-fit-by-size-ascending spot matching: exact size class first, then
//!    upgrade to larger classes, never downgrade
//!  - Per-level availability counters maintained incrementally, never by
//!    scanning
//!  - Ticket lifecycle from entry stamp to priced exit receipt
//!  - Pluggable pricing strategies, swappable at runtime without restarting
//!    allocation
//!  - Administrative spot states (reserved, out of order) with explicit
//!    transitions
//!  - Checksum-protected level snapshots for availability reporting
//!  - Per-level activity statistics
//!
//!  ## Design
//!
//!  The allocator is a single [`ParkingLot`] instance constructed at process
//!  start and shared by reference; all operations take `&self`. Each
//!  [`ParkingLevel`] owns its spots and serves park requests with its own
//!  matching policy, so levels never contend with each other. A spot claim
//!  and its status transition are one critical section per spot, which closes
//!  the check-then-act race between concurrent park calls; the duplicate
//!  plate check and the ticket insert are likewise one atomic step on the
//!  active index.
//!
//!  Capacity exhaustion (`NoAvailableSpot`) and caller misuse
//!  (`DuplicateActiveTicket`, `NoActiveTicket`) are expected, recoverable
//!  outcomes surfaced to the caller. An internal desynchronization between
//!  the spot states and the active index is a logic fault and panics.
//!
//!  ## Example
//!
//!  ```
//!  use parklot::{ParkingLot, SpotSize, VehicleType};
//!
//!  let lot = ParkingLot::standard();
//!
//!  let ticket = lot.park(VehicleType::Car, "ABC-123").unwrap();
//!  assert_eq!(lot.availability(SpotSize::Compact), 179);
//!
//!  let receipt = lot.exit("ABC-123").unwrap();
//!  assert_eq!(receipt.ticket.id, ticket.id);
//!  assert_eq!(lot.availability(SpotSize::Compact), 180);
//!  ```

mod errors;
mod level;
mod lot;
mod pricing;
mod spot;
mod ticket;
mod utils;
mod vehicle;

pub use errors::ParkingError;
pub use level::{LevelSnapshot, LevelSnapshotPackage, LevelStatistics, ParkingLevel, SpotSnapshot};
pub use lot::{ExitReceipt, ParkingLot};
pub use pricing::{FlatFeePricing, HourlyPricing, HourlyRates, PricingStrategy};
pub use spot::{ParkingSpot, SpotId, SpotSize, SpotStatus};
pub use ticket::{ParkingTicket, TicketId};
pub use utils::{TicketSequence, UuidGenerator, current_time_millis, setup_logger};
pub use vehicle::{Vehicle, VehicleType};
