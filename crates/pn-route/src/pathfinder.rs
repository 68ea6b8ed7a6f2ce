//! A* search between an origin and one destination on the live network.
//!
//! # Traversal vs. delivery
//!
//! Mid-path movement is governed by the nodes themselves (`can_emit_to` on
//! the node being left, `can_accept` on the node being entered).  The final
//! hop into the destination is governed solely by the `dest_valid`
//! capability closure passed in by the caller — the destination does not
//! have to accept transit at all.
//!
//! # Determinism
//!
//! Two tie-break rules make repeated searches over an unchanged network
//! yield identical paths:
//!
//! 1. neighbors are scanned in [`Direction::ALL`] order, and
//! 2. equal `f`-scores in the open queue resolve by insertion order
//!    (a monotonic sequence number is the heap's secondary key).
//!
//! # Bounds
//!
//! A search gives up once the best open node lies farther from the origin
//! than twice the origin–destination distance, and an origin whose six
//! neighbors are all impassable is rejected before any queue is built.
//! Both are ordinary `None` outcomes.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use pn_core::{Direction, GridKey};
use pn_net::{Network, Parcel, TransitNode};

use crate::memo::RegionMemo;

/// A successful search: the keys from destination down to origin, the travel
/// direction of the final hop, and the accumulated traversal cost.
#[derive(Clone, PartialEq, Debug)]
pub struct PathResult {
    /// Destination-first, origin-last.  Always at least two keys.
    pub path: Vec<GridKey>,
    /// Travel direction of the hop that entered the destination.
    pub exit_side: Direction,
    /// Sum of the traversal costs of every node after the origin, the
    /// destination excluded.
    pub cost: f64,
}

/// Open-queue entry ordered by `f`, then by insertion sequence.
#[derive(Copy, Clone, Debug)]
struct OpenEntry {
    f: f64,
    seq: u64,
    key: GridKey,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a cost-optimal path from `origin` to `dest` for `parcel`.
///
/// `dest_valid` answers whether the parcel may be delivered into the
/// destination node when approached along a given travel direction.
///
/// Returns `None` when no path exists, when the origin is fully enclosed, or
/// when the search outgrows its distance bound.  Never an error: all of
/// those are routine routing outcomes.
pub fn find<N, F>(
    net: &N,
    parcel: &Parcel,
    origin: GridKey,
    dest: GridKey,
    dest_valid: F,
) -> Option<PathResult>
where
    N: Network,
    F: Fn(&Parcel, Direction, Option<&N::Node>) -> bool,
{
    let mut memo = RegionMemo::new(net);

    // Fast rejection: an origin with six impassable neighbors cannot start
    // a path, no matter what the wider network looks like.
    let mut blocked = 0;
    for dir in Direction::ALL {
        let neighbor = origin.offset(dir);
        let node = memo.node(neighbor);
        let passable = node.is_some_and(|n| n.can_accept(parcel, dir))
            || (neighbor == dest && dest_valid(parcel, dir, node));
        if !passable {
            blocked += 1;
        }
    }
    if blocked == Direction::ALL.len() {
        return None;
    }

    let max_range = origin.distance_to(dest) * 2.0;

    let mut g_score: FxHashMap<GridKey, f64> = FxHashMap::default();
    let mut came_from: FxHashMap<GridKey, GridKey> = FxHashMap::default();
    let mut closed: FxHashSet<GridKey> = FxHashSet::default();
    let mut open: BinaryHeap<Reverse<OpenEntry>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    g_score.insert(origin, 0.0);
    open.push(Reverse(OpenEntry {
        f: origin.distance_to(dest),
        seq,
        key: origin,
    }));

    while let Some(Reverse(entry)) = open.pop() {
        let current = entry.key;
        // Superseded queue entries for already-expanded keys.
        if closed.contains(&current) {
            continue;
        }
        if origin.distance_to(current) > max_range {
            return None;
        }
        closed.insert(current);

        let current_node = memo.node(current);
        let current_cost = *g_score
            .get(&current)
            .expect("open node has no recorded cost; predecessor bookkeeping is corrupt");

        for dir in Direction::ALL {
            let neighbor = current.offset(dir);
            let neighbor_node = memo.node(neighbor);
            let eligible = match current_node {
                Some(node) => {
                    node.can_emit_to(neighbor_node, dir)
                        || (neighbor == dest && dest_valid(parcel, dir, neighbor_node))
                }
                // No node at the current key: nothing constrains emission.
                None => true,
            };
            if !eligible {
                continue;
            }

            if let Some(node) = neighbor_node.filter(|n| n.can_accept(parcel, dir)) {
                let tentative = current_cost + node.traversal_cost();
                let known = g_score.get(&neighbor).copied();
                if closed.contains(&neighbor) && known.is_some_and(|k| tentative >= k) {
                    continue;
                }
                if known.is_none_or(|k| tentative < k) {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative);
                    closed.remove(&neighbor);
                    seq += 1;
                    open.push(Reverse(OpenEntry {
                        f: tentative + neighbor.distance_to(dest),
                        seq,
                        key: neighbor,
                    }));
                }
            } else if neighbor == dest && dest_valid(parcel, dir, neighbor_node) {
                return Some(PathResult {
                    path: reconstruct(&came_from, dest, current),
                    exit_side: dir,
                    cost: current_cost,
                });
            }
        }
    }
    None
}

/// Walk the predecessor map back from the node that reached the destination.
fn reconstruct(
    came_from: &FxHashMap<GridKey, GridKey>,
    dest: GridKey,
    last: GridKey,
) -> Vec<GridKey> {
    let mut path = vec![dest, last];
    let mut current = last;
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path
}
