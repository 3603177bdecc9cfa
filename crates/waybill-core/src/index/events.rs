//! Event index: owns every ingested event, ordered by composite key.

use crate::event::{Event, TIME_FACTOR};
use crate::tree::AvlMap;

/// Owns all events, keyed by [`Event::order_key`].
///
/// Ascending key order is ascending time order; events sharing a timestamp
/// are ordered among themselves by parcel id, then kind.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    tree: AvlMap<i64, Event>,
}

impl EventIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event keyed by its own order key.
    ///
    /// Returns `false` and drops `event` when an event with the same
    /// composite key is already indexed — the documented key-collision
    /// limitation.
    pub fn insert(&mut self, event: Event) -> bool {
        let order_key = event.order_key();
        let stored = self.tree.insert(order_key, event);
        if !stored {
            tracing::debug!(order_key, "event dropped: order key already indexed");
        }
        stored
    }

    /// Look up an event by its composite order key.
    #[must_use]
    pub fn get(&self, order_key: i64) -> Option<&Event> {
        self.tree.get(&order_key)
    }

    /// Remove an event by its composite order key.
    pub fn remove(&mut self, order_key: i64) -> Option<Event> {
        self.tree.remove(&order_key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All events in ascending order-key (time) order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.tree.iter().map(|(_, event)| event)
    }

    /// Events with `from <= time <= until`, ascending, via pruned range
    /// traversal over the key space.
    pub fn in_window(&self, from: i64, until: i64) -> impl Iterator<Item = &Event> {
        let lo = from * TIME_FACTOR;
        let hi = until * TIME_FACTOR + (TIME_FACTOR - 1);
        self.tree.range(lo, hi).map(|(_, event)| event)
    }
}
