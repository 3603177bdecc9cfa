//! Route index: traversal counts per (origin, destination) pair, plus the
//! descending-by-count ranking.

use crate::model::Route;
use crate::tree::AvlMap;

/// Pack a directed route into one ordered key: origin in the high 32 bits,
/// destination in the low 32.
fn route_key(origin: u32, destination: u32) -> u64 {
    u64::from(origin) << 32 | u64::from(destination)
}

/// Owns all route records, keyed by the packed pair.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    tree: AvlMap<u64, Route>,
}

impl RouteIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one traversal of origin→destination: increments the existing
    /// route or creates it with a count of 1.
    pub fn record(&mut self, origin: u32, destination: u32) {
        let key = route_key(origin, destination);
        if let Some(route) = self.tree.get_mut(&key) {
            route.count += 1;
        } else {
            self.tree.insert(key, Route::new(origin, destination));
        }
    }

    #[must_use]
    pub fn get(&self, origin: u32, destination: u32) -> Option<&Route> {
        self.tree.get(&route_key(origin, destination))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All routes ordered by descending traversal count; ties keep the
    /// order in which they were appended from the ascending-key traversal.
    ///
    /// Rebuilt by linear insertion sort on every call — quadratic in the
    /// worst case, a scaling limit at the sizes this index serves.
    #[must_use]
    pub fn ranked(&self) -> Vec<&Route> {
        let mut ranking: Vec<&Route> = Vec::with_capacity(self.tree.len());
        for (_, route) in &self.tree {
            let at = ranking
                .iter()
                .position(|ranked| ranked.count < route.count)
                .unwrap_or(ranking.len());
            ranking.insert(at, route);
        }
        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::RouteIndex;

    #[test]
    fn record_increments_or_creates() {
        let mut index = RouteIndex::new();
        index.record(1, 2);
        index.record(1, 2);
        index.record(2, 1);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(1, 2).map(|route| route.count), Some(2));
        assert_eq!(index.get(2, 1).map(|route| route.count), Some(1));
        assert_eq!(index.get(3, 4), None);
    }

    #[test]
    fn directions_are_distinct_keys() {
        let mut index = RouteIndex::new();
        index.record(0, 7);
        index.record(7, 0);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn ranking_is_descending_by_count() {
        let mut index = RouteIndex::new();
        for _ in 0..5 {
            index.record(1, 2);
        }
        for _ in 0..2 {
            index.record(3, 4);
        }
        for _ in 0..7 {
            index.record(5, 6);
        }
        let ranked: Vec<(u32, u32)> = index
            .ranked()
            .iter()
            .map(|route| (route.origin, route.destination))
            .collect();
        assert_eq!(ranked, vec![(5, 6), (1, 2), (3, 4)]);
    }

    #[test]
    fn ties_keep_key_order() {
        let mut index = RouteIndex::new();
        index.record(9, 1);
        index.record(2, 3);
        index.record(5, 5);
        let ranked: Vec<(u32, u32)> = index
            .ranked()
            .iter()
            .map(|route| (route.origin, route.destination))
            .collect();
        assert_eq!(ranked, vec![(2, 3), (5, 5), (9, 1)]);
    }
}
