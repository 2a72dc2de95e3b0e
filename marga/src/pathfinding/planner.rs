//! Path finder front end.

use crate::core::Cell;
use crate::error::SearchError;
use crate::grid::GridOracle;

use super::engine::SearchEngine;
use super::types::{SearchConfig, SearchOutcome};

/// Blocking path finder bound to one grid.
///
/// Holds no state between calls; every query builds a fresh frontier and
/// ledger and discards them when it returns.
///
/// # Example
/// ```
/// use marga::core::Cell;
/// use marga::grid::OccupancyGrid;
/// use marga::pathfinding::{Connectivity, PathFinder, SearchConfig};
///
/// let grid = OccupancyGrid::new(5, 5);
/// let finder = PathFinder::new(&grid, SearchConfig::new(Connectivity::Four));
/// let outcome = finder.find_path(Cell::new(0, 0), Cell::new(4, 0)).unwrap();
/// assert_eq!(outcome.path().len(), 5);
/// ```
pub struct PathFinder<'a, G: GridOracle + ?Sized> {
    grid: &'a G,
    config: SearchConfig,
}

impl<'a, G: GridOracle + ?Sized> PathFinder<'a, G> {
    /// Create a path finder
    pub fn new(grid: &'a G, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration (8-connected, first discovery)
    pub fn with_defaults(grid: &'a G) -> Self {
        Self::new(grid, SearchConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a route from `start` to `goal`.
    pub fn find_path(&self, start: Cell, goal: Cell) -> Result<SearchOutcome, SearchError> {
        self.find_path_observed(start, goal, |_, _| {})
    }

    /// Find a route, reporting every newly discovered cell to `on_expand`.
    ///
    /// The callback runs synchronously on the calling thread, once per
    /// discovered cell in discovery order, and is not called for `start`.
    pub fn find_path_observed<F>(
        &self,
        start: Cell,
        goal: Cell,
        mut on_expand: F,
    ) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(Cell, f32),
    {
        SearchEngine::new(self.grid, start, goal, self.config)?.run(&mut on_expand)
    }

    /// Does any route exist between `start` and `goal`?
    pub fn path_exists(&self, start: Cell, goal: Cell) -> bool {
        self.find_path(start, goal)
            .is_ok_and(|outcome| outcome.is_found())
    }
}
