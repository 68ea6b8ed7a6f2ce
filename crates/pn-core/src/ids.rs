//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` for
//! callers that assign their own numbering schemes (save formats, registries).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of a world/dimension.  Keys in different worlds never
    /// compare equal, so one routing layer can serve several worlds at once.
    pub struct WorldId(u32);
}

typed_id! {
    /// Identity of an item kind carried by a parcel.  Assigned by the
    /// application's item registry.
    pub struct ItemId(u32);
}

typed_id! {
    /// Coarse spatial region identifier: the chunk column containing a key,
    /// with both 16×16 chunk coordinates packed into one `u64`.
    pub struct RegionId(u64);
}

impl RegionId {
    /// Pack a pair of chunk coordinates into a single region key.
    #[inline]
    pub fn pack(chunk_x: i32, chunk_z: i32) -> Self {
        RegionId(((chunk_x as u32 as u64) << 32) | chunk_z as u32 as u64)
    }
}
