use crate::math::{Coord, Offset};

/// One of the eight neighbours of a pixel.
///
/// Variants are declared in clockwise order starting at north-west, in a
/// y-up frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl Neighbor {
    /// All neighbours in clockwise order.
    pub const CLOCKWISE: [Neighbor; 8] = [
        Neighbor::NorthWest,
        Neighbor::North,
        Neighbor::NorthEast,
        Neighbor::East,
        Neighbor::SouthEast,
        Neighbor::South,
        Neighbor::SouthWest,
        Neighbor::West,
    ];

    /// Offset from a pixel to this neighbour.
    #[must_use]
    pub fn offset(self) -> Offset {
        match self {
            Self::NorthWest => Offset::new(-1, 1),
            Self::North => Offset::new(0, 1),
            Self::NorthEast => Offset::new(1, 1),
            Self::East => Offset::new(1, 0),
            Self::SouthEast => Offset::new(1, -1),
            Self::South => Offset::new(0, -1),
            Self::SouthWest => Offset::new(-1, -1),
            Self::West => Offset::new(-1, 0),
        }
    }

    /// Inverse of [`Neighbor::offset`]. Returns `None` for offsets that are
    /// not a unit step in the 8-neighbourhood.
    #[must_use]
    pub fn from_offset(offset: Offset) -> Option<Self> {
        Self::CLOCKWISE.into_iter().find(|n| n.offset() == offset)
    }

    /// The next neighbour in clockwise order (wrapping).
    #[must_use]
    pub fn clockwise(self) -> Self {
        Self::CLOCKWISE[(self as usize + 1) % Self::CLOCKWISE.len()]
    }

    /// Where the previous neighbour in clockwise order lies, seen from this
    /// neighbour. After a scan moves onto this neighbour, the last
    /// transparent pixel it tested is always in this direction.
    #[must_use]
    pub fn backtrack(self) -> Self {
        match self {
            Self::North | Self::NorthEast => Self::West,
            Self::East | Self::SouthEast => Self::North,
            Self::South | Self::SouthWest => Self::East,
            Self::West | Self::NorthWest => Self::South,
        }
    }

    /// `true` for N, E, S and W.
    #[must_use]
    pub fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    /// The pixel side facing this neighbour, as a unit edge directed so the
    /// four sides of a pixel chain into a clockwise loop. Diagonal
    /// neighbours share no side with the pixel.
    #[must_use]
    pub fn side_of(self, pixel: Coord) -> Option<Edge> {
        let (x, y) = (pixel.x, pixel.y);
        let (start, end) = match self {
            Self::West => ((x, y), (x, y + 1)),
            Self::North => ((x, y + 1), (x + 1, y + 1)),
            Self::East => ((x + 1, y + 1), (x + 1, y)),
            Self::South => ((x + 1, y), (x, y)),
            _ => return None,
        };
        Some(Edge::new(
            Coord::new(start.0, start.1),
            Coord::new(end.0, end.1),
        ))
    }
}

/// A directed unit segment between two pixel corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: Coord,
    pub end: Coord,
}

impl Edge {
    #[must_use]
    pub fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }
}
