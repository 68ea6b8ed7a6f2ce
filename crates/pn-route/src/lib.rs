//! `pn-route` — routing decisions for parcels on a live grid network.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`pathfinder`] | A* search between two keys with a capability destination check |
//! | [`memo`]       | `RegionMemo` — per-search region container memo               |
//! | [`cache`]      | `PathCache` — persistent `(origin, dest, side)` → path map    |
//! | [`dest`]       | `Destination`, `PathKind`                                     |
//! | [`ranking`]    | `rank`/`best`/`select`, `RoundRobinCursor`                    |
//! | [`idle`]       | idle-wander fallback when nothing accepts a parcel            |
//!
//! # Search model
//!
//! The network may change between any two searches; nothing pushes
//! invalidations here.  Instead every cached path is revalidated against
//! current node state before reuse, and a stale entry is simply discarded
//! and recomputed.  A failed search is an ordinary outcome (`None`/empty),
//! experienced by callers as the parcel pausing or idling for a tick.
//!
//! All paths produced by this crate run destination-first, origin-last.

pub mod cache;
pub mod dest;
pub mod idle;
pub mod memo;
pub mod pathfinder;
pub mod ranking;


pub use cache::{PathCache, PathKey};
pub use dest::{Destination, PathKind};
pub use idle::idle;
pub use memo::RegionMemo;
pub use pathfinder::PathResult;
pub use ranking::{best, rank, select, RoundRobinCursor};
