//! Network-model error type.
//!
//! Routing failure is never an error — searches return `None`/empty results.
//! These variants cover misuse of the network model itself.

use thiserror::Error;

use pn_core::GridKey;

/// Errors produced by `pn-net`.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("a node already exists at {0}")]
    NodeExists(GridKey),

    #[error("no node at {0}")]
    NodeNotFound(GridKey),

    #[error("node at {0} is not a conduit")]
    NotConduit(GridKey),
}

pub type NetResult<T> = Result<T, NetError>;
