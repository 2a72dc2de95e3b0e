//! Binary occupancy grid storage.

use std::fmt;

use crate::core::Cell;
use crate::error::{Error, Result};

use super::GridOracle;

/// Occupancy state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    /// Traversable surface
    #[default]
    Free = 0,
    /// Obstacle, boundary, or unexplored area
    Blocked = 1,
}

impl CellState {
    /// Can the search traverse this cell?
    #[inline]
    pub fn is_free(self) -> bool {
        self == CellState::Free
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Blocked => '#',
        }
    }

    /// Parse the debugging character back into a state
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellState::Free),
            '#' => Some(CellState::Blocked),
            _ => None,
        }
    }
}

/// Row-major binary occupancy grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl OccupancyGrid {
    /// Create an all-free grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Free; width * height],
        }
    }

    /// Create a grid from row-major cell states.
    pub fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Result<Self> {
        if cells.len() != width * height {
            return Err(Error::InvalidMap(format!(
                "expected {} cells for a {}x{} grid, got {}",
                width * height,
                width,
                height,
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse an ASCII map: `.` is free, `#` is blocked, one row per line.
    ///
    /// Leading and trailing blank lines and surrounding whitespace on each row
    /// are ignored so maps can be written as indented raw strings.
    ///
    /// ```
    /// use marga::grid::{GridOracle, OccupancyGrid};
    /// use marga::core::Cell;
    ///
    /// let grid = OccupancyGrid::from_ascii("
    ///     ...
    ///     .#.
    ///     ...
    /// ").unwrap();
    /// assert_eq!(grid.dimensions(), (3, 3));
    /// assert!(!grid.is_traversable(Cell::new(1, 1)));
    /// ```
    pub fn from_ascii(map: &str) -> Result<Self> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(Error::InvalidMap(format!(
                    "row {} has {} columns, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let state = CellState::from_char(c).ok_or_else(|| {
                    Error::InvalidMap(format!("unexpected character {:?} at ({}, {})", c, x, y))
                })?;
                cells.push(state);
            }
        }

        Self::from_cells(width, height, cells)
    }

    /// Width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major index of `cell`, if it is inside the grid
    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        let x = usize::try_from(cell.x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(cell.y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    /// State of `cell`, or `None` when out of bounds
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        self.index(cell).map(|idx| self.cells[idx])
    }

    /// Set the state of `cell`. Returns `false` if the cell is out of bounds.
    pub fn set(&mut self, cell: Cell, state: CellState) -> bool {
        match self.index(cell) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    /// Mark `cell` as an obstacle
    pub fn set_blocked(&mut self, cell: Cell) -> bool {
        self.set(cell, CellState::Blocked)
    }

    /// Mark `cell` as free
    pub fn set_free(&mut self, cell: Cell) -> bool {
        self.set(cell, CellState::Free)
    }

    /// Number of traversable cells
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_free()).count()
    }

    /// Iterate over every cell coordinate in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Cell::new(x as i32, y as i32))
        })
    }
}

impl GridOracle for OccupancyGrid {
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn is_traversable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(CellState::is_free)
    }

    #[inline]
    fn in_bounds(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for state in row {
                write!(f, "{}", state.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
