//! The six axis-aligned unit directions and a compact direction set.
//!
//! # Scan order
//!
//! [`Direction::ALL`] fixes the order Down, Up, North, South, West, East.
//! Every neighbor scan in the routing layer iterates in this order, which is
//! what makes tie-breaking between equally good candidates deterministic.
//! Do not reorder.

/// One of the six axis-aligned unit offsets.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// −Y
    Down,
    /// +Y
    Up,
    /// −Z
    North,
    /// +Z
    South,
    /// −X
    West,
    /// +X
    East,
}

impl Direction {
    /// All six directions in canonical scan order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The unit offset `(dx, dy, dz)` of this direction.
    #[inline]
    pub fn unit(self) -> (i32, i32, i32) {
        match self {
            Direction::Down  => (0, -1, 0),
            Direction::Up    => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West  => (-1, 0, 0),
            Direction::East  => (1, 0, 0),
        }
    }

    /// The direction pointing the opposite way.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down  => Direction::Up,
            Direction::Up    => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
            Direction::East  => Direction::West,
        }
    }

    /// Position in [`Direction::ALL`]; doubles as the bit index in [`DirSet`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Down  => "down",
            Direction::Up    => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West  => "west",
            Direction::East  => "east",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DirSet ────────────────────────────────────────────────────────────────────

/// A set of [`Direction`]s stored as one byte.
///
/// Iteration follows [`Direction::ALL`] order regardless of insertion order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirSet(u8);

impl DirSet {
    pub const EMPTY: DirSet = DirSet(0);
    pub const ALL: DirSet = DirSet(0b0011_1111);

    /// A set containing exactly `dir`.
    #[inline]
    pub fn of(dir: Direction) -> Self {
        DirSet(1 << dir.index())
    }

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= 1 << dir.index();
    }

    #[inline]
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !(1 << dir.index());
    }

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & (1 << dir.index()) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the members in canonical scan order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirSet::EMPTY;
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}
