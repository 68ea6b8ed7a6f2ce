//! Ranked search results.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use pn_core::GridKey;
use pn_net::TransitResponse;

/// What kind of travel a parcel's current path represents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathKind {
    /// Aimless drifting; the path ends wherever conduits ran out.
    None,
    /// Returning to the parcel's home key.
    Home,
    /// Travelling to an acceptor that agreed to take the payload.
    Dest,
}

/// One viable route to an acceptor (or an idle/home path), scored.
///
/// Produced per search call and consumed immediately; nothing here is
/// persisted.  Identity is the key sequence alone — two results over the
/// same coordinates are the same destination no matter how they were
/// scored, which is what lets the selector deduplicate routes found via
/// different cache entries.
#[derive(Clone, Debug)]
pub struct Destination {
    /// Destination-first, origin-last.  Never empty.
    pub path: Vec<GridKey>,
    pub kind: PathKind,
    /// The acceptor's answer; `None` on idle/home paths.
    pub response: Option<TransitResponse>,
    /// Accumulated traversal cost; lower is better.
    pub score: f64,
}

impl Destination {
    /// The key this route delivers to.
    #[inline]
    pub fn location(&self) -> GridKey {
        self.path[0]
    }

    /// Sort order for ranking: ascending score, shorter path on ties.
    pub fn cmp_by_score(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.path.len().cmp(&other.path.len()))
    }
}

impl PartialEq for Destination {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Destination {}

impl Hash for Destination {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}
