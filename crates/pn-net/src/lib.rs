//! `pn-net` — parcel state, transit negotiation, and the network node model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`transit`] | `Payload`, `TransitRequest`, `TransitResponse`                 |
//! | [`parcel`]  | `Parcel` — one in-flight item bundle                           |
//! | [`node`]    | `TransitNode`/`Region`/`Network` traits, `AcceptorCandidate`   |
//! | [`grid`]    | `GridNetwork` — in-memory network of conduits and endpoints    |
//! | [`error`]   | `NetError`, `NetResult<T>`                                     |
//!
//! # Transit vs. delivery
//!
//! A node answers two different questions:
//!
//! 1. `can_accept` — may a parcel *pass through* me (mid-path transit)?
//! 2. `can_insert` — may a parcel be *delivered into* me (final hop)?
//!
//! Conduits answer yes to the first and no to the second; endpoints the
//! reverse.  The routing layer keeps the two rules separate all the way
//! through: delivery at the destination is decided by a capability closure,
//! never by the transit rule.

pub mod error;
pub mod grid;
pub mod node;
pub mod parcel;
pub mod transit;

#[cfg(test)]
mod tests;

pub use error::{NetError, NetResult};
pub use grid::{Conduit, Endpoint, GridNetwork, GridNode, GridRegion};
pub use node::{AcceptorCandidate, Network, Region, TransitNode};
pub use parcel::Parcel;
pub use transit::{Payload, TransitRequest, TransitResponse};
