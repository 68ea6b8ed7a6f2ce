//! Unit tests for pn-core primitives.

#[cfg(test)]
mod keys {
    use crate::{Direction, GridKey, WorldId};

    fn key(x: i32, y: i32, z: i32) -> GridKey {
        GridKey::new(WorldId(0), x, y, z)
    }

    #[test]
    fn offset_moves_one_axis() {
        let k = key(10, 64, -3);
        assert_eq!(k.offset(Direction::Up), key(10, 65, -3));
        assert_eq!(k.offset(Direction::North), key(10, 64, -4));
        assert_eq!(k.offset(Direction::East), key(11, 64, -3));
    }

    #[test]
    fn offset_by_scales() {
        let k = key(0, 0, 0);
        assert_eq!(k.offset_by(Direction::West, 5), key(-5, 0, 0));
        assert_eq!(k.offset_by(Direction::South, 3), key(0, 0, 3));
    }

    #[test]
    fn offset_round_trip() {
        let k = key(7, 7, 7);
        for dir in Direction::ALL {
            assert_eq!(k.offset(dir).offset(dir.opposite()), k);
        }
    }

    #[test]
    fn distance_euclidean() {
        assert_eq!(key(0, 0, 0).distance_to(key(1, 0, 0)), 1.0);
        assert_eq!(key(0, 0, 0).distance_to(key(3, 4, 0)), 5.0);
        assert_eq!(key(2, 2, 2).distance_to(key(2, 2, 2)), 0.0);
    }

    #[test]
    fn world_distinguishes_keys() {
        let a = GridKey::new(WorldId(0), 1, 2, 3);
        let b = GridKey::new(WorldId(1), 1, 2, 3);
        assert_ne!(a, b);
    }

    #[test]
    fn region_is_chunk_granular() {
        // Same 16×16 column → same region, regardless of y.
        assert_eq!(key(0, 0, 0).region(), key(15, 255, 15).region());
        // Crossing x=16 or z=16 changes the region.
        assert_ne!(key(15, 0, 0).region(), key(16, 0, 0).region());
        assert_ne!(key(0, 0, 15).region(), key(0, 0, 16).region());
        // Negative coordinates floor toward −∞, so −1 and 0 differ.
        assert_ne!(key(-1, 0, 0).region(), key(0, 0, 0).region());
        assert_eq!(key(-1, 0, 0).region(), key(-16, 0, 0).region());
    }
}

#[cfg(test)]
mod directions {
    use crate::Direction;

    #[test]
    fn opposites_pair_up() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn units_are_unit_length() {
        for dir in Direction::ALL {
            let (dx, dy, dz) = dir.unit();
            assert_eq!(dx.abs() + dy.abs() + dz.abs(), 1, "{dir}");
        }
    }

    #[test]
    fn scan_order_is_stable() {
        // Routing tie-breaks depend on this exact order.
        let names: Vec<&str> = Direction::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, ["down", "up", "north", "south", "west", "east"]);
    }
}

#[cfg(test)]
mod dirsets {
    use crate::{Direction, DirSet};

    #[test]
    fn insert_contains_remove() {
        let mut set = DirSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Direction::East);
        set.insert(Direction::Up);
        assert!(set.contains(Direction::East));
        assert!(!set.contains(Direction::West));
        assert_eq!(set.len(), 2);
        set.remove(Direction::East);
        assert!(!set.contains(Direction::East));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iterates_in_scan_order() {
        let set: DirSet = [Direction::East, Direction::Down, Direction::North]
            .into_iter()
            .collect();
        let order: Vec<Direction> = set.iter().collect();
        assert_eq!(order, [Direction::Down, Direction::North, Direction::East]);
    }

    #[test]
    fn all_has_six() {
        assert_eq!(DirSet::ALL.len(), 6);
        for dir in Direction::ALL {
            assert!(DirSet::ALL.contains(dir));
        }
    }
}
