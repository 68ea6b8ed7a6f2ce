//! One in-flight item bundle and its routing state.

use pn_core::{ColorTag, Direction, GridKey};

use crate::transit::{Payload, TransitRequest};

/// A parcel travelling through the network.
///
/// Owned exclusively by the transit layer; the idle wanderer and destination
/// search mutate `home` and `idle_dir` as results are applied.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    /// What the parcel carries.
    pub payload: Payload,

    /// Color filter.  A parcel only traverses conduits whose tag matches
    /// this, or that carry no tag at all.
    pub color: Option<ColorTag>,

    /// Preferred return destination when nothing accepts the payload.
    /// Cleared by the idle wanderer once home stops being reachable.
    pub home: Option<GridKey>,

    /// The direction the parcel is currently drifting in while idle, if any.
    pub idle_dir: Option<Direction>,
}

impl Parcel {
    pub fn new(payload: Payload) -> Self {
        Self { payload, color: None, home: None, idle_dir: None }
    }

    pub fn with_color(mut self, color: ColorTag) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_home(mut self, home: GridKey) -> Self {
        self.home = Some(home);
        self
    }

    /// Whether this parcel may traverse a node carrying `tag`.
    ///
    /// An untagged node admits everything.  A tagged node admits only parcels
    /// carrying the same tag — an unfiltered parcel is rejected too.
    #[inline]
    pub fn color_allows(&self, tag: Option<ColorTag>) -> bool {
        match tag {
            None => true,
            Some(t) => self.color == Some(t),
        }
    }

    /// The transit request offering this parcel's full payload.
    #[inline]
    pub fn request(&self) -> TransitRequest {
        TransitRequest::from_payload(&self.payload)
    }
}
