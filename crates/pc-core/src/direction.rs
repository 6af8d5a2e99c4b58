//! Cardinal directions and border rules
//!
//! All direction math is table driven: step vectors, opposites and the
//! per-edge mandates are constant arrays indexed by discriminant.

use pc_rng::{RandomSource, shuffle};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::grid::Point;

/// Movement direction. `Up` is +y.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Step vectors, indexed by `Direction as usize`
const VECTORS: [(i32, i32); 4] = [
    (0, 1),  // Up
    (0, -1), // Down
    (-1, 0), // Left
    (1, 0),  // Right
];

const OPPOSITES: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

/// Which end of the path a border point anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Role {
    /// The path leaves the grid interior from here
    Start,
    /// The path arrives here
    End,
}

/// Grid edge a border point belongs to.
///
/// Corners are resolved in declaration order: a cell in the first column is
/// always `Left`, even when it also lies on the bottom or top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Edge {
    Left = 0,
    Right = 1,
    Bottom = 2,
    Top = 3,
}

/// (start, end) mandates, indexed by `Edge as usize`
const MANDATES: [(Direction, Direction); 4] = [
    (Direction::Right, Direction::Left), // Left edge
    (Direction::Left, Direction::Right), // Right edge
    (Direction::Up, Direction::Down),    // Bottom edge
    (Direction::Down, Direction::Up),    // Top edge
];

impl Edge {
    /// Classify a border point. Any point off the first column, last column
    /// and bottom row falls through to `Top`.
    pub fn of(point: Point, width: usize) -> Self {
        if point.x == 0 {
            Edge::Left
        } else if point.x == width as i32 - 1 {
            Edge::Right
        } else if point.y == 0 {
            Edge::Bottom
        } else {
            Edge::Top
        }
    }
}

impl Direction {
    /// Canonical order, before any shuffle
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)`
    pub const fn vector(self) -> (i32, i32) {
        VECTORS[self as usize]
    }

    pub const fn opposite(self) -> Direction {
        OPPOSITES[self as usize]
    }

    /// True for Up/Down and Left/Right pairs
    pub const fn is_opposite(self, other: Direction) -> bool {
        OPPOSITES[self as usize] as u8 == other as u8
    }

    /// The direction a path must leave (`Start`) or enter (`End`) through
    /// the edge `point` lies on. The caller guarantees border membership.
    pub fn mandated(point: Point, width: usize, role: Role) -> Direction {
        let (start, end) = MANDATES[Edge::of(point, width) as usize];
        match role {
            Role::Start => start,
            Role::End => end,
        }
    }

    /// All four directions in a uniformly random order
    pub fn shuffled<R: RandomSource + ?Sized>(rng: &mut R) -> [Direction; 4] {
        let mut order = Self::ALL;
        shuffle(rng, &mut order);
        order
    }
}
