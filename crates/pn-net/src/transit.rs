//! Payloads and the request/response pair used to negotiate acceptance.

use pn_core::ItemId;

/// The contents of a parcel: an item kind and how much of it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payload {
    pub item: ItemId,
    pub amount: u32,
}

impl Payload {
    #[inline]
    pub fn new(item: ItemId, amount: u32) -> Self {
        Self { item, amount }
    }
}

/// What a sender is offering.  Built from a parcel's current payload and
/// answered by each prospective acceptor with a [`TransitResponse`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitRequest {
    pub item: ItemId,
    pub amount: u32,
}

impl TransitRequest {
    #[inline]
    pub fn new(item: ItemId, amount: u32) -> Self {
        Self { item, amount }
    }

    /// The request describing everything a payload currently holds.
    #[inline]
    pub fn from_payload(payload: &Payload) -> Self {
        Self { item: payload.item, amount: payload.amount }
    }
}

/// An acceptor's answer: how much of the offered payload it will take.
/// `amount` is always ≤ the requested amount and > 0 for surfaced candidates.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitResponse {
    pub item: ItemId,
    pub amount: u32,
}

impl TransitResponse {
    #[inline]
    pub fn new(item: ItemId, amount: u32) -> Self {
        Self { item, amount }
    }

    /// The quantity the acceptor agreed to take.
    #[inline]
    pub fn sending_amount(&self) -> u32 {
        self.amount
    }
}
