//! Grid oracle: the search's only view of the world.
//!
//! The search never looks at raw map encodings. It asks a [`GridOracle`]
//! whether a cell is inside the grid and traversable, and nothing else.
//! [`OccupancyGrid`] is the in-memory implementation used by the CLI and
//! tests; map images are converted into one by [`crate::io::map_image`].

mod occupancy;

pub use occupancy::{CellState, OccupancyGrid};

use crate::core::Cell;

/// Answer to a single cell query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellQuery {
    /// Inside the grid and free to traverse
    Traversable,
    /// Outside `0 <= x < width`, `0 <= y < height`
    OutOfBounds,
    /// Inside the grid but not traversable
    Blocked,
}

impl CellQuery {
    /// Can the search expand into this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        self == CellQuery::Traversable
    }
}

/// Read-only traversability source consumed by the search.
pub trait GridOracle {
    /// Grid size as `(width, height)` in cells.
    fn dimensions(&self) -> (usize, usize);

    /// Is `cell` in bounds and free? Out-of-bounds cells must return `false`.
    fn is_traversable(&self, cell: Cell) -> bool;

    /// Is `cell` inside the grid?
    ///
    /// Bounds are strict: a coordinate equal to the width or height is outside.
    fn in_bounds(&self, cell: Cell) -> bool {
        let (width, height) = self.dimensions();
        usize::try_from(cell.x).is_ok_and(|x| x < width)
            && usize::try_from(cell.y).is_ok_and(|y| y < height)
    }

    /// Classify `cell` as traversable, out of bounds, or blocked.
    fn query(&self, cell: Cell) -> CellQuery {
        if !self.in_bounds(cell) {
            CellQuery::OutOfBounds
        } else if self.is_traversable(cell) {
            CellQuery::Traversable
        } else {
            CellQuery::Blocked
        }
    }
}

impl<G: GridOracle + ?Sized> GridOracle for &G {
    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn is_traversable(&self, cell: Cell) -> bool {
        (**self).is_traversable(cell)
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        (**self).in_bounds(cell)
    }

    fn query(&self, cell: Cell) -> CellQuery {
        (**self).query(cell)
    }
}
