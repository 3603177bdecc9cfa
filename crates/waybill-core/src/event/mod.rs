//! Logistics event records and their derived ordering key.

pub mod parser;
mod types;

pub use types::{EventKind, UnknownEventKind};

use serde::Serialize;
use std::fmt;

/// Multiplier lifting the timestamp into the high digits of the order key.
pub(crate) const TIME_FACTOR: i64 = 10_000;
/// Multiplier lifting the parcel id above the kind ordinal.
pub(crate) const PARCEL_FACTOR: i64 = 10;

/// One immutable logistics event, as read from the log.
///
/// Owned exclusively by the event index once ingested; every other
/// component refers to an event through its [`order_key`](Self::order_key),
/// resolved by re-querying that index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Log-order timestamp.
    pub time: i64,
    /// Wire kind.
    pub kind: EventKind,
    /// Parcel this event belongs to.
    pub parcel: u32,
    /// Sender client name (Register only).
    pub sender: Option<String>,
    /// Receiver client name (Register only).
    pub receiver: Option<String>,
    /// Origin warehouse.
    pub origin: Option<u32>,
    /// Destination warehouse.
    pub destination: Option<u32>,
    /// Destination section inside the warehouse (ArriveWarehouse only).
    pub section: Option<u32>,
}

impl Event {
    /// Composite order key: `time * 10_000 + parcel * 10 + kind ordinal`.
    ///
    /// Monotonic in `time` across distinct timestamps, while events
    /// sharing a timestamp stay totally ordered by the id/kind terms. Not
    /// collision-proof for parcel ids ≥ 1000: two distinct events that
    /// compute the same key cannot both be indexed, and the later one is
    /// dropped.
    #[must_use]
    pub fn order_key(&self) -> i64 {
        self.time * TIME_FACTOR + i64::from(self.parcel) * PARCEL_FACTOR + self.kind.ordinal()
    }
}

impl fmt::Display for Event {
    /// Render in log-output form: zero-padded timestamp and parcel id,
    /// then the kind-specific tail. The destination section is never
    /// printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:07} EV {} {:03}", self.time, self.kind, self.parcel)?;
        match self.kind {
            EventKind::Register => write!(
                f,
                " {} {} {:03} {:03}",
                self.sender.as_deref().unwrap_or(""),
                self.receiver.as_deref().unwrap_or(""),
                self.origin.unwrap_or(0),
                self.destination.unwrap_or(0),
            ),
            EventKind::ArriveWarehouse
            | EventKind::RemoveFromWarehouse
            | EventKind::UnloadRoute
            | EventKind::TransferRoute => write!(
                f,
                " {:03} {:03}",
                self.origin.unwrap_or(0),
                self.destination.unwrap_or(0),
            ),
            EventKind::Enqueue => write!(f, " {:03}", self.destination.unwrap_or(0)),
        }
    }
}
