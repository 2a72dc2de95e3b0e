//! Best-first route search on an occupancy grid.
//!
//! The search is split along its data:
//!
//! - [`cost`]: step costs and the octile / Manhattan heuristic
//! - [`frontier`]: binary-heap priority queue that tolerates stale entries
//! - [`ledger`]: write-once record of each cell's predecessor and cost
//! - [`engine`]: the expansion loop and its `Running → Succeeded | Exhausted` states
//! - [`reconstruct`]: predecessor walk from goal back to start
//!
//! ## Usage
//!
//! ```rust
//! use marga::core::Cell;
//! use marga::grid::OccupancyGrid;
//! use marga::pathfinding::{find_path, Connectivity};
//!
//! let grid = OccupancyGrid::from_ascii("
//!     ...
//!     .#.
//!     ...
//! ").unwrap();
//!
//! let outcome = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2), Connectivity::Four).unwrap();
//! let found = outcome.found().unwrap();
//! assert_eq!(found.path.len(), 5);
//! assert!(!found.path.contains(&Cell::new(1, 1)));
//! ```

pub mod cost;
pub mod engine;
pub mod frontier;
pub mod ledger;
mod planner;
pub mod reconstruct;
mod types;

pub use cost::{Connectivity, heuristic, step_cost};
pub use engine::SearchEngine;
pub use frontier::Frontier;
pub use ledger::{DiscoveryLedger, LedgerEntry, Predecessor};
pub use planner::PathFinder;
pub use reconstruct::reconstruct;
pub use types::{DiscoveryPolicy, FoundPath, SearchConfig, SearchOutcome, SearchState};

use crate::core::Cell;
use crate::error::SearchError;
use crate::grid::GridOracle;

/// Quick first-discovery search with the given connectivity
pub fn find_path<G: GridOracle + ?Sized>(
    grid: &G,
    start: Cell,
    goal: Cell,
    connectivity: Connectivity,
) -> Result<SearchOutcome, SearchError> {
    PathFinder::new(grid, SearchConfig::new(connectivity)).find_path(start, goal)
}

/// First-discovery search that reports each newly discovered cell and its cost
pub fn find_path_observed<G, F>(
    grid: &G,
    start: Cell,
    goal: Cell,
    connectivity: Connectivity,
    on_expand: F,
) -> Result<SearchOutcome, SearchError>
where
    G: GridOracle + ?Sized,
    F: FnMut(Cell, f32),
{
    PathFinder::new(grid, SearchConfig::new(connectivity)).find_path_observed(start, goal, on_expand)
}
