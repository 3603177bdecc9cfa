//! Route record.

use serde::Serialize;

/// One directed route with its traversal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Origin warehouse.
    pub origin: u32,
    /// Destination warehouse.
    pub destination: u32,
    /// Observed traversals.
    pub count: u64,
}

impl Route {
    /// A route observed for the first time.
    #[must_use]
    pub const fn new(origin: u32, destination: u32) -> Self {
        Self {
            origin,
            destination,
            count: 1,
        }
    }
}
