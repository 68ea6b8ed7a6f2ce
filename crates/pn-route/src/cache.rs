//! Persistent path cache keyed by `(origin, destination, exit side)`.
//!
//! Entries survive across searches and across topology changes; soundness
//! comes from the ranking layer revalidating every hit before reuse, not
//! from invalidation.  The cache is also usable on its own — the topology
//! layer may warm it or drop entries from its own hooks via
//! [`insert`](PathCache::insert) / [`remove`](PathCache::remove) /
//! [`clear`](PathCache::clear).
//!
//! # Eviction
//!
//! Capacity-bounded, oldest first insertion evicted first.  Recency is
//! irrelevant to correctness here (staleness is handled by revalidation),
//! and FIFO keeps probing read-only.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use pn_core::{Direction, DirSet, GridKey};

/// Identity of one cached path.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PathKey {
    pub origin: GridKey,
    pub dest: GridKey,
    /// Travel direction of the final hop into the destination.
    pub side: Direction,
}

/// Bounded map from [`PathKey`] to a destination-first key sequence.
pub struct PathCache {
    entries: FxHashMap<PathKey, Vec<GridKey>>,
    order: VecDeque<PathKey>,
    capacity: usize,
}

impl PathCache {
    pub const DEFAULT_CAPACITY: usize = 4096;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A cache holding at most `capacity` paths (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// The shortest cached path from `origin` into `dest` over any of the
    /// viable `sides`.  The caller still has to revalidate the result.
    pub fn probe(&self, origin: GridKey, dest: GridKey, sides: DirSet) -> Option<&[GridKey]> {
        let mut best: Option<&Vec<GridKey>> = None;
        for side in sides.iter() {
            if let Some(path) = self.entries.get(&PathKey { origin, dest, side }) {
                if best.is_none_or(|b| path.len() < b.len()) {
                    best = Some(path);
                }
            }
        }
        best.map(Vec::as_slice)
    }

    /// Store `path` for `(origin, dest, side)`, replacing any previous entry
    /// and evicting the oldest entries once the cache is full.
    pub fn insert(&mut self, origin: GridKey, dest: GridKey, side: Direction, path: Vec<GridKey>) {
        let key = PathKey { origin, dest, side };
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = path;
            return;
        }
        while self.entries.len() >= self.capacity {
            // Queue keys whose entry was removed earlier are skipped here.
            let Some(oldest) = self.order.pop_front() else { break };
            self.entries.remove(&oldest);
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, path);
    }

    /// Drop the entry for `(origin, dest, side)`, returning it if present.
    pub fn remove(&mut self, origin: GridKey, dest: GridKey, side: Direction) -> Option<Vec<GridKey>> {
        self.entries.remove(&PathKey { origin, dest, side })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new()
    }
}
