//! Error types for Marga

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::core::Cell;
use crate::grid::CellQuery;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error for map loading, configuration, and search.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Map image could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    /// Search refused to start or hit an internal contract violation
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Map data is malformed
    #[error("Invalid map: {0}")]
    InvalidMap(String),

    /// Invalid user-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Reasons a search cannot run to a terminal state.
///
/// Note that an unreachable goal is not an error: it is reported as
/// [`crate::pathfinding::SearchOutcome::NoPathFound`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start cell is out of bounds or blocked; the search never began
    #[error("Invalid start {cell}: {reason:?}")]
    InvalidStart {
        /// Requested start cell
        cell: Cell,
        /// Why the grid rejected it
        reason: CellQuery,
    },

    /// Goal cell is out of bounds or blocked; the search never began
    #[error("Invalid goal {cell}: {reason:?}")]
    InvalidGoal {
        /// Requested goal cell
        cell: Cell,
        /// Why the grid rejected it
        reason: CellQuery,
    },

    /// Step cost requested for cells that are not one move apart
    #[error("Cells {from} and {to} are not adjacent")]
    InvalidStep {
        /// Step origin
        from: Cell,
        /// Step destination
        to: Cell,
    },

    /// Discovery ledger contract violated (engine bug)
    #[error("Ledger contract violated: {0}")]
    Ledger(#[from] LedgerError),

    /// Frontier contract violated (engine bug)
    #[error("Frontier contract violated: {0}")]
    Frontier(#[from] FrontierError),
}

/// Discovery ledger and path reconstruction contract violations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// `record_discovery` called twice for the same cell
    #[error("cell {0} already discovered")]
    AlreadyDiscovered(Cell),

    /// Lookup for a cell that was never discovered
    #[error("cell {0} not discovered")]
    NotDiscovered(Cell),

    /// Path reconstruction requested for a goal missing from the ledger
    #[error("goal {0} was never reached")]
    UnreachedGoal(Cell),

    /// Predecessor links starting at this cell never reach the start
    #[error("predecessor chain from {0} does not reach the start")]
    PredecessorCycle(Cell),
}

/// Frontier contract violations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FrontierError {
    /// `pop_min` called on an empty frontier
    #[error("pop from empty frontier")]
    EmptyFrontier,
}
