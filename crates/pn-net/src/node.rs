//! The capability seams between routing and whatever owns the topology.
//!
//! Routing is generic over a [`Network`], which hands out [`Region`]
//! containers, which hand out nodes implementing [`TransitNode`].  The
//! two-level lookup exists so one search can fetch a region once and probe
//! many nearby keys against it; see `pn-route`'s region memo.

use pn_core::{ColorTag, Direction, DirSet, GridKey, RegionId, WorldId};

use crate::parcel::Parcel;
use crate::transit::{TransitRequest, TransitResponse};

/// Capability queries answered by a single network node.
pub trait TransitNode: Sized {
    /// May `parcel` pass through this node, entering along `entry`?
    /// This is the mid-path transit rule; it is never consulted for the
    /// final delivery hop.
    fn can_accept(&self, parcel: &Parcel, entry: Direction) -> bool;

    /// May this node emit toward `neighbor` in direction `dir`?
    /// `neighbor` is `None` when no node exists on that side.
    fn can_emit_to(&self, neighbor: Option<&Self>, dir: Direction) -> bool;

    /// Cost of routing one parcel through this node.  Nonnegative.
    fn traversal_cost(&self) -> f64;

    /// The node's routing color, if it carries one.
    fn color_tag(&self) -> Option<ColorTag>;

    /// May `parcel` be delivered *into* this node along `entry`?
    ///
    /// Delivery semantics differ from transit semantics: an endpoint that
    /// never relays parcels still takes deliveries.  `force` bypasses
    /// ordinary acceptance for home returns.
    fn can_insert(&self, parcel: &Parcel, entry: Direction, force: bool) -> bool;
}

/// A batch container of nodes covering one coarse region.
pub trait Region {
    type Node;

    /// The node at `key`, if this region holds one.
    fn node_at(&self, key: GridKey) -> Option<&Self::Node>;
}

/// The topology collaborator: region lookup plus acceptor enumeration.
pub trait Network {
    type Node: TransitNode;
    type Region: Region<Node = Self::Node>;

    /// The container for `region` in `world`, if any nodes exist there.
    fn region(&self, world: WorldId, region: RegionId) -> Option<&Self::Region>;

    /// Every node currently willing to take part of `request`, with the
    /// amount it will take and the sides it can be entered by.  Sorted by
    /// location so repeated calls rank identically.
    fn candidate_acceptors(
        &self,
        request: &TransitRequest,
        parcel: &Parcel,
    ) -> Vec<AcceptorCandidate>;

    /// The node at `key`, resolved through its region container.
    fn node_at(&self, key: GridKey) -> Option<&Self::Node> {
        self.region(key.world, key.region())
            .and_then(|r| r.node_at(key))
    }
}

/// One node willing to receive some of a parcel's payload.
///
/// Produced by [`Network::candidate_acceptors`]; consumed, never mutated, by
/// the routing layer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AcceptorCandidate {
    /// Where the acceptor sits.
    pub location: GridKey,

    /// Travel directions a parcel may enter the acceptor by — one for each
    /// adjacent conduit.
    pub sides: DirSet,

    /// How much of the request the acceptor takes.
    pub response: TransitResponse,
}
