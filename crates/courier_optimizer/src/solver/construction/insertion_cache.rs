use fxhash::FxHashMap;

use crate::{
    problem::node::NodeIdx,
    solver::{insertion::ScoredInsertion, solution::route_id::RouteIdx},
};

struct CacheEntry {
    version: usize,
    best: Option<ScoredInsertion>,
}

/// Best insertion of a stop into a route, valid as long as the route version is unchanged.
#[derive(Default)]
pub struct InsertionCache {
    entries: FxHashMap<(RouteIdx, NodeIdx), CacheEntry>,
}

impl InsertionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some(None)` means the stop fits nowhere in the route at this version.
    pub fn get(
        &self,
        route_id: RouteIdx,
        version: usize,
        node: NodeIdx,
    ) -> Option<Option<ScoredInsertion>> {
        self.entries
            .get(&(route_id, node))
            .filter(|entry| entry.version == version)
            .map(|entry| entry.best)
    }

    pub fn insert(
        &mut self,
        route_id: RouteIdx,
        version: usize,
        node: NodeIdx,
        best: Option<ScoredInsertion>,
    ) {
        self.entries
            .insert((route_id, node), CacheEntry { version, best });
    }
}

#[cfg(test)]
mod tests {
    use crate::solver::insertion::Insertion;

    use super::*;

    #[test]
    fn test_stale_version_misses() {
        let mut cache = InsertionCache::new();
        let route_id = RouteIdx::new(0);
        let node = NodeIdx::new(3);
        let best = ScoredInsertion {
            insertion: Insertion {
                node,
                route_id,
                position: 0,
            },
            cost_delta: 42,
        };

        cache.insert(route_id, 1, node, Some(best));
        assert_eq!(cache.get(route_id, 1, node).flatten().map(|b| b.cost_delta), Some(42));
        assert!(cache.get(route_id, 2, node).is_none());

        cache.insert(route_id, 2, node, None);
        assert!(matches!(cache.get(route_id, 2, node), Some(None)));
    }
}
