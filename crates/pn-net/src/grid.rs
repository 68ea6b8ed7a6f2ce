//! In-memory reference network of conduits and endpoints.
//!
//! # Data layout
//!
//! Nodes are stored per region (`(WorldId, RegionId)` → `GridRegion`) so the
//! routing layer's batched region lookup has something real to batch against.
//! Endpoint keys are additionally tracked in a `BTreeSet`, which makes
//! acceptor enumeration a sorted scan — repeated searches over an unchanged
//! network see candidates in the same order every time.
//!
//! # Mutability
//!
//! The network may change arbitrarily between searches ([`recolor`],
//! [`node_mut`], [`remove`]).  Nothing is notified; cached paths are
//! revalidated lazily on their next use instead.
//!
//! [`recolor`]: GridNetwork::recolor
//! [`node_mut`]: GridNetwork::node_mut
//! [`remove`]: GridNetwork::remove

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use pn_core::{ColorTag, Direction, DirSet, GridKey, ItemId, RegionId, WorldId};

use crate::error::{NetError, NetResult};
use crate::node::{AcceptorCandidate, Network, Region, TransitNode};
use crate::parcel::Parcel;
use crate::transit::{TransitRequest, TransitResponse};

// ── Node kinds ────────────────────────────────────────────────────────────────

/// A transit pipe: parcels pass through, nothing is delivered into it.
#[derive(Clone, PartialEq, Debug)]
pub struct Conduit {
    /// Cost of routing one parcel through this conduit.
    pub cost: f64,

    /// Optional routing color.  Tagged conduits only admit parcels carrying
    /// the same tag.
    pub color: Option<ColorTag>,

    /// Sides this conduit may emit through.  Closing sides makes one-way
    /// links and walls.
    pub emit: DirSet,
}

/// A delivery target: parcels are inserted into it, never relayed through.
#[derive(Clone, PartialEq, Debug)]
pub struct Endpoint {
    /// Only this item is accepted; `None` accepts any item.
    pub filter: Option<ItemId>,

    /// Maximum amount taken per request.
    pub capacity: u32,

    /// Whether forced (home-return) deliveries are taken even when ordinary
    /// acceptance would refuse.
    pub home_return: bool,
}

impl Endpoint {
    /// How much of `request` this endpoint takes: zero on a filter mismatch,
    /// otherwise the request amount clamped to capacity.
    pub fn accept_amount(&self, request: &TransitRequest) -> u32 {
        match self.filter {
            Some(item) if item != request.item => 0,
            _ => request.amount.min(self.capacity),
        }
    }
}

/// One node of a [`GridNetwork`].
#[derive(Clone, PartialEq, Debug)]
pub enum GridNode {
    Conduit(Conduit),
    Endpoint(Endpoint),
}

impl GridNode {
    /// An uncolored conduit with all sides open.
    pub fn conduit(cost: f64) -> Self {
        GridNode::Conduit(Conduit { cost, color: None, emit: DirSet::ALL })
    }

    /// A conduit carrying a routing color.
    pub fn colored_conduit(cost: f64, color: ColorTag) -> Self {
        GridNode::Conduit(Conduit { cost, color: Some(color), emit: DirSet::ALL })
    }

    /// An endpoint taking up to `capacity` of any item.
    pub fn endpoint(capacity: u32) -> Self {
        GridNode::Endpoint(Endpoint { filter: None, capacity, home_return: false })
    }

    /// An endpoint taking up to `capacity` of `item` only.
    pub fn filtered_endpoint(item: ItemId, capacity: u32) -> Self {
        GridNode::Endpoint(Endpoint { filter: Some(item), capacity, home_return: false })
    }

    /// An endpoint that also takes forced home returns.
    pub fn home_endpoint(capacity: u32) -> Self {
        GridNode::Endpoint(Endpoint { filter: None, capacity, home_return: true })
    }

    fn as_endpoint(&self) -> Option<&Endpoint> {
        match self {
            GridNode::Endpoint(e) => Some(e),
            GridNode::Conduit(_) => None,
        }
    }
}

impl TransitNode for GridNode {
    fn can_accept(&self, parcel: &Parcel, _entry: Direction) -> bool {
        match self {
            GridNode::Conduit(c) => parcel.color_allows(c.color),
            GridNode::Endpoint(_) => false,
        }
    }

    fn can_emit_to(&self, _neighbor: Option<&Self>, dir: Direction) -> bool {
        // Side masks are per-node here; the neighbor handle matters for
        // implementations with pairwise connection rules.
        match self {
            GridNode::Conduit(c) => c.emit.contains(dir),
            GridNode::Endpoint(_) => false,
        }
    }

    fn traversal_cost(&self) -> f64 {
        match self {
            GridNode::Conduit(c) => c.cost,
            GridNode::Endpoint(_) => 0.0,
        }
    }

    fn color_tag(&self) -> Option<ColorTag> {
        match self {
            GridNode::Conduit(c) => c.color,
            GridNode::Endpoint(_) => None,
        }
    }

    fn can_insert(&self, parcel: &Parcel, _entry: Direction, force: bool) -> bool {
        match self {
            GridNode::Conduit(_) => false,
            GridNode::Endpoint(e) => {
                if force {
                    // Home returns ignore capacity but still respect the filter.
                    e.home_return && e.filter.map_or(true, |item| item == parcel.payload.item)
                } else {
                    e.accept_amount(&parcel.request()) > 0
                }
            }
        }
    }
}

// ── Region container ──────────────────────────────────────────────────────────

/// All nodes of one coarse region.
#[derive(Default, Debug)]
pub struct GridRegion {
    nodes: FxHashMap<GridKey, GridNode>,
}

impl Region for GridRegion {
    type Node = GridNode;

    #[inline]
    fn node_at(&self, key: GridKey) -> Option<&GridNode> {
        self.nodes.get(&key)
    }
}

// ── GridNetwork ───────────────────────────────────────────────────────────────

/// An in-memory network of conduits and endpoints, mutable between searches.
#[derive(Default, Debug)]
pub struct GridNetwork {
    regions: FxHashMap<(WorldId, RegionId), GridRegion>,
    endpoints: BTreeSet<GridKey>,
}

impl GridNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `node` at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::NodeExists`] if the key is occupied; replacing a
    /// node is an explicit `remove` + `insert`.
    pub fn insert(&mut self, key: GridKey, node: GridNode) -> NetResult<()> {
        let region = self.regions.entry((key.world, key.region())).or_default();
        if region.nodes.contains_key(&key) {
            return Err(NetError::NodeExists(key));
        }
        if matches!(node, GridNode::Endpoint(_)) {
            self.endpoints.insert(key);
        }
        region.nodes.insert(key, node);
        Ok(())
    }

    /// Remove and return the node at `key`.
    pub fn remove(&mut self, key: GridKey) -> NetResult<GridNode> {
        let region = self
            .regions
            .get_mut(&(key.world, key.region()))
            .ok_or(NetError::NodeNotFound(key))?;
        let node = region.nodes.remove(&key).ok_or(NetError::NodeNotFound(key))?;
        self.endpoints.remove(&key);
        Ok(node)
    }

    /// Mutable access to the node at `key`, for topology edits between ticks.
    pub fn node_mut(&mut self, key: GridKey) -> Option<&mut GridNode> {
        self.regions
            .get_mut(&(key.world, key.region()))
            .and_then(|r| r.nodes.get_mut(&key))
    }

    /// Change the color tag of the conduit at `key`.
    ///
    /// # Errors
    ///
    /// [`NetError::NodeNotFound`] if the key is empty,
    /// [`NetError::NotConduit`] if it holds an endpoint.
    pub fn recolor(&mut self, key: GridKey, color: Option<ColorTag>) -> NetResult<()> {
        match self.node_mut(key) {
            None => Err(NetError::NodeNotFound(key)),
            Some(GridNode::Endpoint(_)) => Err(NetError::NotConduit(key)),
            Some(GridNode::Conduit(c)) => {
                c.color = color;
                Ok(())
            }
        }
    }

    /// Number of nodes across all regions and worlds.
    pub fn node_count(&self) -> usize {
        self.regions.values().map(|r| r.nodes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

impl Network for GridNetwork {
    type Node = GridNode;
    type Region = GridRegion;

    fn region(&self, world: WorldId, region: RegionId) -> Option<&GridRegion> {
        self.regions.get(&(world, region))
    }

    fn candidate_acceptors(
        &self,
        request: &TransitRequest,
        // Acceptance in this model depends only on the offered items.
        _parcel: &Parcel,
    ) -> Vec<AcceptorCandidate> {
        let mut out = Vec::new();
        for &location in &self.endpoints {
            let Some(endpoint) = self.node_at(location).and_then(GridNode::as_endpoint) else {
                continue;
            };
            let amount = endpoint.accept_amount(request);
            if amount == 0 {
                continue;
            }
            // A parcel enters along `d` when a conduit sits on the opposite
            // side; acceptors no conduit touches are unreachable anyway.
            let sides: DirSet = Direction::ALL
                .into_iter()
                .filter(|d| {
                    matches!(
                        self.node_at(location.offset(d.opposite())),
                        Some(GridNode::Conduit(_))
                    )
                })
                .collect();
            if sides.is_empty() {
                continue;
            }
            out.push(AcceptorCandidate {
                location,
                sides,
                response: TransitResponse::new(request.item, amount),
            });
        }
        out
    }
}
