//! Per-search memo of region containers.
//!
//! One A* call probes many keys clustered in a handful of regions.  Fetching
//! the region container once and answering nearby lookups from it amortizes
//! the collaborator round-trip.  The memo lives for exactly one search call;
//! it is never shared across calls, so it can hold plain borrows.

use rustc_hash::FxHashMap;

use pn_core::{GridKey, RegionId, WorldId};
use pn_net::{Network, Region};

/// Short-lived region lookup memo scoped to a single search.
pub struct RegionMemo<'a, N: Network> {
    net: &'a N,
    regions: FxHashMap<(WorldId, RegionId), &'a N::Region>,
}

impl<'a, N: Network> RegionMemo<'a, N> {
    pub fn new(net: &'a N) -> Self {
        Self { net, regions: FxHashMap::default() }
    }

    /// The node at `key`, via the memoized region container.
    ///
    /// Only successful region fetches are memoized; a region that does not
    /// exist yet is retried on the next lookup that lands in it.
    pub fn node(&mut self, key: GridKey) -> Option<&'a N::Node> {
        let slot = (key.world, key.region());
        let region = match self.regions.get(&slot) {
            Some(region) => Some(*region),
            None => {
                let fetched = self.net.region(slot.0, slot.1);
                if let Some(region) = fetched {
                    self.regions.insert(slot, region);
                }
                fetched
            }
        };
        region.and_then(|r| r.node_at(key))
    }

    /// Number of distinct regions fetched so far.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}
