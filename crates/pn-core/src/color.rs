//! Routing color tags.
//!
//! Conduits may carry a color tag; parcels may carry a color filter.  The
//! matching rule lives on the parcel side (`pn-net`): an untagged conduit
//! admits every parcel, a tagged conduit admits only parcels carrying the
//! same tag.

/// An opaque routing color.  The application decides what each value means
/// (palette, dye, channel number); routing only ever compares for equality.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTag(pub u8);

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "color#{}", self.0)
    }
}
