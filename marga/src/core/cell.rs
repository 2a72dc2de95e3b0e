//! Grid cell coordinates.
//!
//! A [`Cell`] is a plain `(x, y)` value. Identity is value equality, so cells
//! are freely copied and used as hash keys by the search structures.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::pathfinding::Connectivity;

const CARDINAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Integer grid coordinate (column `x`, row `y`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl Cell {
    /// Create a new cell coordinate
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Absolute per-axis differences `(dx, dy)` to another cell
    #[inline]
    pub fn abs_diff(&self, other: &Cell) -> (u32, u32) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }

    /// Manhattan distance to another cell
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        let (dx, dy) = self.abs_diff(other);
        dx + dy
    }

    /// Chebyshev distance (max of x and y distance)
    #[inline]
    pub fn chebyshev_distance(&self, other: &Cell) -> u32 {
        let (dx, dy) = self.abs_diff(other);
        dx.max(dy)
    }

    /// Cell shifted by `(dx, dy)`, or `None` if a coordinate overflows `i32`
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Cell> {
        Some(Cell::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The cardinal neighbors, in order `+x`, `-x`, `+y`, `-y`.
    ///
    /// Expansion order is part of the search's deterministic behavior, so
    /// this order must stay fixed. Neighbors outside the `i32` range are
    /// skipped.
    pub fn neighbors_4(&self) -> impl Iterator<Item = Cell> + use<> {
        let cell = *self;
        CARDINAL_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| cell.offset(dx, dy))
    }

    /// The diagonal neighbors, in order `(+1,+1)`, `(-1,+1)`, `(+1,-1)`, `(-1,-1)`.
    pub fn diagonal_neighbors(&self) -> impl Iterator<Item = Cell> + use<> {
        let cell = *self;
        DIAGONAL_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| cell.offset(dx, dy))
    }

    /// All neighbors reachable under `connectivity`: cardinals first, then diagonals.
    pub fn neighbors(&self, connectivity: Connectivity) -> impl Iterator<Item = Cell> + use<> {
        let diagonals = match connectivity {
            Connectivity::Four => None,
            Connectivity::Eight => Some(self.diagonal_neighbors()),
        };
        self.neighbors_4().chain(diagonals.into_iter().flatten())
    }

    /// Is `other` exactly one legal move away under `connectivity`?
    pub fn is_adjacent(&self, other: &Cell, connectivity: Connectivity) -> bool {
        match self.abs_diff(other) {
            (1, 0) | (0, 1) => true,
            (1, 1) => connectivity == Connectivity::Eight,
            _ => false,
        }
    }
}

impl Add for Cell {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Cell::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Cell {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Cell::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
