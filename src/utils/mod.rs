//! Shared helpers: logging setup, timestamps and id generation.

use std::sync::Once;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::ticket::TicketId;

static INIT_LOGGER: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// Reads the `RUST_LOG` environment variable for the filter level and falls
/// back to `info`. Safe to call more than once; only the first call installs
/// the subscriber.
pub fn setup_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    });
}

/// Returns the current time as milliseconds since the Unix epoch.
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

/// Generates deterministic, namespaced UUIDs from an atomic counter.
///
/// Each generator owns a namespace; successive calls to [`next`](Self::next)
/// hash an increasing counter into that namespace with UUID v5, so ids are
/// unique per generator and reproducible for a fixed namespace.
#[derive(Debug)]
pub struct UuidGenerator {
    namespace: Uuid,
    counter: AtomicU64,
}

impl UuidGenerator {
    /// Create a new generator with the given namespace.
    pub fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            counter: AtomicU64::new(0),
        }
    }

    /// Generate the next UUID in this namespace.
    pub fn next(&self) -> Uuid {
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        Uuid::new_v5(&self.namespace, &count.to_le_bytes())
    }
}

/// Issues monotonically increasing ticket ids.
///
/// Thread-safe: concurrent callers never observe the same id twice.
#[derive(Debug)]
pub struct TicketSequence {
    next: AtomicU64,
}

impl TicketSequence {
    /// Create a sequence starting at ticket id 1.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Allocate the next ticket id.
    pub fn next(&self) -> TicketId {
        TicketId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TicketSequence {
    fn default() -> Self {
        Self::new()
    }
}
