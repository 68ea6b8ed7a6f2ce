//! `pn-core` — foundational types for the parcelnet routing framework.
//!
//! This crate is a dependency of every other `pn-*` crate.  It intentionally
//! has no `pn-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`ids`]       | `WorldId`, `ItemId`, `RegionId`                     |
//! | [`key`]       | `GridKey` — world-tagged grid coordinate            |
//! | [`direction`] | `Direction` (six axis units), `DirSet` bitset       |
//! | [`color`]     | `ColorTag` — conduit/parcel routing color           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod color;
pub mod direction;
pub mod ids;
pub mod key;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::ColorTag;
pub use direction::{Direction, DirSet};
pub use ids::{ItemId, RegionId, WorldId};
pub use key::GridKey;
