//! Parcel record.

use serde::Serialize;

/// One parcel, keyed by id in the parcel index.
///
/// Holds the order keys of its first- and last-seen events. The keys are
/// non-owning back-references: the events themselves live in the event
/// index and are re-queried on demand.
#[derive(Debug, Clone, Serialize)]
pub struct Parcel {
    id: u32,
    first_event: Option<i64>,
    last_event: Option<i64>,
}

impl Parcel {
    /// A parcel that has not seen any event yet.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            first_event: None,
            last_event: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Order key of the first event seen for this parcel.
    #[must_use]
    pub const fn first_event(&self) -> Option<i64> {
        self.first_event
    }

    /// Order key of the most recent event seen for this parcel.
    #[must_use]
    pub const fn last_event(&self) -> Option<i64> {
        self.last_event
    }

    /// Note one more event: pins the first key once, always moves the last.
    pub fn record_event(&mut self, order_key: i64) {
        if self.first_event.is_none() {
            self.first_event = Some(order_key);
        }
        self.last_event = Some(order_key);
    }
}
