//! Destination ranking and round-robin selection.
//!
//! `rank` fans one request out across every candidate acceptor, reusing
//! cached paths where they still validate and searching fresh where they
//! don't.  `select` layers deterministic round-robin fan-out on top, driven
//! by a cursor the requesting node owns and persists.

use std::collections::BTreeMap;

use pn_core::GridKey;
use pn_net::{AcceptorCandidate, Network, Parcel, TransitNode, TransitRequest};

use crate::cache::PathCache;
use crate::dest::{Destination, PathKind};
use crate::pathfinder;

/// Round-robin position, owned and persisted by the requesting node across
/// ticks.  This layer only reads and advances the value passed in.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRobinCursor {
    pub index: usize,
}

/// Every viable destination for `request`, ascending by score (shorter path
/// wins ties).  Candidates offering less than `min_amount` are skipped;
/// candidates with no viable path are dropped silently.
pub fn rank<N: Network>(
    net: &N,
    cache: &mut PathCache,
    origin: GridKey,
    parcel: &Parcel,
    request: &TransitRequest,
    min_amount: u32,
) -> Vec<Destination> {
    let mut found = Vec::new();
    for candidate in net.candidate_acceptors(request, parcel) {
        if candidate.response.sending_amount() < min_amount {
            continue;
        }
        if let Some(dest) = resolve(net, cache, origin, parcel, &candidate) {
            found.push(dest);
        }
    }
    found.sort_by(Destination::cmp_by_score);
    found
}

/// The single best destination, if any.
pub fn best<N: Network>(
    net: &N,
    cache: &mut PathCache,
    origin: GridKey,
    parcel: &Parcel,
    request: &TransitRequest,
    min_amount: u32,
) -> Option<Destination> {
    rank(net, cache, origin, parcel, request, min_amount)
        .into_iter()
        .next()
}

/// Round-robin pick across the ranked destinations.
///
/// Routes are first deduplicated per destination key (shortest path kept),
/// then sorted; `cursor` indexes into that list.  A cursor beyond the end —
/// the candidate set shrank since last tick — clamps to the last element and
/// resets to zero; otherwise it advances by one, wrapping past the last
/// index.
pub fn select<N: Network>(
    net: &N,
    cache: &mut PathCache,
    origin: GridKey,
    parcel: &Parcel,
    request: &TransitRequest,
    cursor: &mut RoundRobinCursor,
    min_amount: u32,
) -> Option<Destination> {
    // BTreeMap keyed by location: dedup and a deterministic pre-sort order
    // in one step, so equal-scoring routes tie-break by location.
    let mut by_location: BTreeMap<GridKey, Destination> = BTreeMap::new();
    for dest in rank(net, cache, origin, parcel, request, min_amount) {
        match by_location.get(&dest.location()) {
            Some(kept) if kept.path.len() <= dest.path.len() => {}
            _ => {
                by_location.insert(dest.location(), dest);
            }
        }
    }
    let mut routes: Vec<Destination> = by_location.into_values().collect();
    routes.sort_by(Destination::cmp_by_score);
    if routes.is_empty() {
        return None;
    }

    let last = routes.len() - 1;
    let picked = if cursor.index <= last {
        let here = cursor.index;
        cursor.index = if here == last { 0 } else { here + 1 };
        here
    } else {
        cursor.index = 0;
        last
    };
    Some(routes.swap_remove(picked))
}

/// One candidate → one destination: cache hit revalidated, or fresh search.
fn resolve<N: Network>(
    net: &N,
    cache: &mut PathCache,
    origin: GridKey,
    parcel: &Parcel,
    candidate: &AcceptorCandidate,
) -> Option<Destination> {
    let target = candidate.location;

    if let Some(path) = cache.probe(origin, target, candidate.sides) {
        if let Some(score) = revalidate(net, parcel, path) {
            return Some(Destination {
                path: path.to_vec(),
                kind: PathKind::Dest,
                response: Some(candidate.response),
                score,
            });
        }
        // Stale: fall through to a fresh search, which replaces the entry.
    }

    let result = pathfinder::find(net, parcel, origin, target, |p, dir, node| {
        node.is_some_and(|n| n.can_insert(p, dir, false))
    })?;
    if result.path.len() < 2 {
        return None;
    }
    cache.insert(origin, target, result.exit_side, result.path.clone());
    Some(Destination {
        path: result.path,
        kind: PathKind::Dest,
        response: Some(candidate.response),
        score: result.cost,
    })
}

/// Check a cached path against current node state and recompute its score.
///
/// Every key after the destination must still hold a node the parcel's
/// color filter tolerates.  The score sums the costs of the nodes strictly
/// between destination and origin, matching what a fresh search reports.
fn revalidate<N: Network>(net: &N, parcel: &Parcel, path: &[GridKey]) -> Option<f64> {
    if path.len() < 2 {
        return None;
    }
    let mut score = 0.0;
    let origin_index = path.len() - 1;
    for (i, &key) in path.iter().enumerate().skip(1) {
        let node = net.node_at(key)?;
        if !parcel.color_allows(node.color_tag()) {
            return None;
        }
        if i != origin_index {
            score += node.traversal_cost();
        }
    }
    Some(score)
}
