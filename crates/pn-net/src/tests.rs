//! Unit tests for the network model.
//!
//! All tests build small hand-crafted networks; nothing here exercises the
//! routing layer.

#[cfg(test)]
mod helpers {
    use pn_core::{GridKey, WorldId};

    pub const W: WorldId = WorldId(0);

    pub fn key(x: i32, y: i32, z: i32) -> GridKey {
        GridKey::new(W, x, y, z)
    }
}

#[cfg(test)]
mod parcels {
    use pn_core::{ColorTag, ItemId};

    use crate::{Parcel, Payload};

    #[test]
    fn untagged_node_admits_everything() {
        let plain = Parcel::new(Payload::new(ItemId(1), 8));
        let tinted = plain.clone().with_color(ColorTag(3));
        assert!(plain.color_allows(None));
        assert!(tinted.color_allows(None));
    }

    #[test]
    fn tagged_node_requires_matching_filter() {
        let plain = Parcel::new(Payload::new(ItemId(1), 8));
        let tinted = plain.clone().with_color(ColorTag(3));
        assert!(!plain.color_allows(Some(ColorTag(3))));
        assert!(tinted.color_allows(Some(ColorTag(3))));
        assert!(!tinted.color_allows(Some(ColorTag(4))));
    }

    #[test]
    fn request_offers_full_payload() {
        let parcel = Parcel::new(Payload::new(ItemId(7), 42));
        let request = parcel.request();
        assert_eq!(request.item, ItemId(7));
        assert_eq!(request.amount, 42);
    }
}

#[cfg(test)]
mod endpoints {
    use pn_core::{Direction, ItemId};

    use crate::{GridNode, Parcel, Payload, TransitNode, TransitRequest};

    #[test]
    fn accept_amount_clamps_to_capacity() {
        let GridNode::Endpoint(e) = GridNode::endpoint(10) else { unreachable!() };
        assert_eq!(e.accept_amount(&TransitRequest::new(ItemId(1), 4)), 4);
        assert_eq!(e.accept_amount(&TransitRequest::new(ItemId(1), 25)), 10);
    }

    #[test]
    fn filter_mismatch_takes_nothing() {
        let GridNode::Endpoint(e) = GridNode::filtered_endpoint(ItemId(1), 10) else {
            unreachable!()
        };
        assert_eq!(e.accept_amount(&TransitRequest::new(ItemId(1), 5)), 5);
        assert_eq!(e.accept_amount(&TransitRequest::new(ItemId(2), 5)), 0);
    }

    #[test]
    fn insert_vs_transit_split() {
        let endpoint = GridNode::endpoint(10);
        let conduit = GridNode::conduit(1.0);
        let parcel = Parcel::new(Payload::new(ItemId(1), 5));
        // Endpoints take deliveries but never transit.
        assert!(endpoint.can_insert(&parcel, Direction::East, false));
        assert!(!endpoint.can_accept(&parcel, Direction::East));
        // Conduits relay but never take deliveries.
        assert!(conduit.can_accept(&parcel, Direction::East));
        assert!(!conduit.can_insert(&parcel, Direction::East, false));
    }

    #[test]
    fn forced_insert_needs_home_return() {
        let ordinary = GridNode::endpoint(0);
        let home = GridNode::home_endpoint(0);
        let parcel = Parcel::new(Payload::new(ItemId(1), 5));
        // Capacity 0 refuses ordinary delivery either way.
        assert!(!ordinary.can_insert(&parcel, Direction::Up, false));
        assert!(!home.can_insert(&parcel, Direction::Up, false));
        // Only the home endpoint takes the forced return.
        assert!(!ordinary.can_insert(&parcel, Direction::Up, true));
        assert!(home.can_insert(&parcel, Direction::Up, true));
    }
}

#[cfg(test)]
mod grid {
    use pn_core::{ColorTag, Direction, DirSet, GridKey, ItemId, WorldId};

    use super::helpers::key;
    use crate::{GridNetwork, GridNode, NetError, Network, Parcel, Payload, TransitRequest};

    #[test]
    fn insert_and_lookup_across_regions() {
        let mut net = GridNetwork::new();
        // Two keys 40 apart sit in different 16×16 regions.
        net.insert(key(0, 0, 0), GridNode::conduit(1.0)).unwrap();
        net.insert(key(40, 0, 0), GridNode::conduit(2.0)).unwrap();
        assert_eq!(net.node_count(), 2);
        assert!(net.node_at(key(0, 0, 0)).is_some());
        assert!(net.node_at(key(40, 0, 0)).is_some());
        assert!(net.node_at(key(1, 0, 0)).is_none());
        assert_ne!(key(0, 0, 0).region(), key(40, 0, 0).region());
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut net = GridNetwork::new();
        net.insert(key(0, 0, 0), GridNode::conduit(1.0)).unwrap();
        let err = net.insert(key(0, 0, 0), GridNode::conduit(9.0)).unwrap_err();
        assert!(matches!(err, NetError::NodeExists(k) if k == key(0, 0, 0)));
    }

    #[test]
    fn remove_clears_endpoint_tracking() {
        let mut net = GridNetwork::new();
        net.insert(key(0, 0, 0), GridNode::endpoint(10)).unwrap();
        net.remove(key(0, 0, 0)).unwrap();
        let parcel = Parcel::new(Payload::new(ItemId(1), 5));
        let found = net.candidate_acceptors(&TransitRequest::new(ItemId(1), 5), &parcel);
        assert!(found.is_empty());
        assert!(net.is_empty());
    }

    #[test]
    fn recolor_only_applies_to_conduits() {
        let mut net = GridNetwork::new();
        net.insert(key(0, 0, 0), GridNode::conduit(1.0)).unwrap();
        net.insert(key(1, 0, 0), GridNode::endpoint(5)).unwrap();
        net.recolor(key(0, 0, 0), Some(ColorTag(2))).unwrap();
        assert!(matches!(
            net.recolor(key(1, 0, 0), Some(ColorTag(2))),
            Err(NetError::NotConduit(_))
        ));
        assert!(matches!(
            net.recolor(key(9, 9, 9), None),
            Err(NetError::NodeNotFound(_))
        ));
    }

    #[test]
    fn worlds_are_disjoint() {
        let mut net = GridNetwork::new();
        net.insert(key(0, 0, 0), GridNode::conduit(1.0)).unwrap();
        let other = GridKey::new(WorldId(1), 0, 0, 0);
        assert!(net.node_at(other).is_none());
        net.insert(other, GridNode::conduit(1.0)).unwrap();
        assert_eq!(net.node_count(), 2);
    }

    #[test]
    fn acceptors_report_conduit_sides() {
        let mut net = GridNetwork::new();
        // Endpoint at origin, conduits to its west and above it.
        net.insert(key(0, 0, 0), GridNode::endpoint(10)).unwrap();
        net.insert(key(-1, 0, 0), GridNode::conduit(1.0)).unwrap();
        net.insert(key(0, 1, 0), GridNode::conduit(1.0)).unwrap();
        let parcel = Parcel::new(Payload::new(ItemId(1), 5));
        let found = net.candidate_acceptors(&TransitRequest::new(ItemId(1), 5), &parcel);
        assert_eq!(found.len(), 1);
        let cand = &found[0];
        assert_eq!(cand.location, key(0, 0, 0));
        // Entered travelling east (from the west conduit) or down (from above).
        let expected: DirSet = [Direction::East, Direction::Down].into_iter().collect();
        assert_eq!(cand.sides, expected);
        assert_eq!(cand.response.sending_amount(), 5);
    }

    #[test]
    fn unreachable_or_refusing_acceptors_are_skipped() {
        let mut net = GridNetwork::new();
        // No adjacent conduit at all.
        net.insert(key(0, 0, 0), GridNode::endpoint(10)).unwrap();
        // Wrong item.
        net.insert(key(4, 0, 0), GridNode::filtered_endpoint(ItemId(2), 10)).unwrap();
        net.insert(key(3, 0, 0), GridNode::conduit(1.0)).unwrap();
        let parcel = Parcel::new(Payload::new(ItemId(1), 5));
        let found = net.candidate_acceptors(&TransitRequest::new(ItemId(1), 5), &parcel);
        assert!(found.is_empty());
    }

    #[test]
    fn acceptors_come_back_sorted() {
        let mut net = GridNetwork::new();
        for x in [8, 2, 5] {
            net.insert(key(x, 0, 0), GridNode::endpoint(10)).unwrap();
            net.insert(key(x, 1, 0), GridNode::conduit(1.0)).unwrap();
        }
        let parcel = Parcel::new(Payload::new(ItemId(1), 5));
        let found = net.candidate_acceptors(&TransitRequest::new(ItemId(1), 5), &parcel);
        let xs: Vec<i32> = found.iter().map(|c| c.location.x).collect();
        assert_eq!(xs, [2, 5, 8]);
    }
}
