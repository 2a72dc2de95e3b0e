//! # Marga: Grid Route Search
//!
//! Best-first (A*-style) route search between two cells of a binary
//! occupancy grid, with an observer hook that reports every newly discovered
//! cell as the search runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{Cell, Connectivity, OccupancyGrid, find_path};
//!
//! let grid = OccupancyGrid::from_ascii("
//!     ....
//!     .##.
//!     ....
//! ").unwrap();
//!
//! let outcome = find_path(&grid, Cell::new(0, 1), Cell::new(3, 1), Connectivity::Eight).unwrap();
//! assert!(outcome.is_found());
//! assert_eq!(outcome.path().first(), Some(&Cell::new(0, 1)));
//! assert_eq!(outcome.path().last(), Some(&Cell::new(3, 1)));
//! ```
//!
//! ## Discovery Semantics
//!
//! By default the search records the first route by which it reaches a cell
//! and never revises it. Returned routes are valid but not guaranteed to be
//! the cheapest. [`DiscoveryPolicy::Relaxing`] switches to canonical A* that
//! re-parents a cell whenever a strictly cheaper route to it is found.
//!
//! ## Architecture
//!
//! - [`core`]: integer [`Cell`] coordinates and neighbor ordering
//! - [`grid`]: the [`GridOracle`] trait and the [`OccupancyGrid`] implementation
//! - [`pathfinding`]: cost model, frontier, ledger, engine, reconstruction
//! - [`config`]: YAML configuration
//! - [`io`]: map images, result overlays and frame snapshots
//!
//! ## Coordinate Frame
//!
//! Cells are `(x, y)` with `x` in `[0, width)` and `y` in `[0, height)`.
//! When a grid comes from an image, `x` is the pixel column and `y` the row.

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod io;
pub mod pathfinding;

// Re-export main types at crate root
pub use config::MargaConfig;
pub use crate::core::Cell;
pub use error::{Error, FrontierError, LedgerError, Result, SearchError};
pub use grid::{CellQuery, GridOracle, OccupancyGrid};
pub use pathfinding::{
    Connectivity, DiscoveryPolicy, FoundPath, PathFinder, SearchConfig, SearchOutcome,
    SearchState, find_path, find_path_observed,
};
