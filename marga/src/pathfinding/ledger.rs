//! Discovery ledger: how and at what cost each cell was first reached.
//!
//! Entries are keyed by cell coordinate in a flat map. Predecessor links form
//! a tree rooted at the start cell; a predecessor is always recorded before
//! its successors, so the links cannot form a cycle.

use std::collections::{HashMap, HashSet};

use crate::core::Cell;
use crate::error::LedgerError;

/// Discovering predecessor of a ledger entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Predecessor {
    /// The entry is the start cell
    Start,
    /// The entry was discovered while expanding this cell
    Cell(Cell),
}

/// One ledger entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LedgerEntry {
    /// Discovering predecessor
    pub predecessor: Predecessor,
    /// Accumulated step cost from the start
    pub accumulated_cost: f32,
}

/// Per-search record of discovered cells.
///
/// `record_discovery` is write-once: a second call for the same cell fails
/// with [`LedgerError::AlreadyDiscovered`].
#[derive(Debug, Default)]
pub struct DiscoveryLedger {
    entries: HashMap<Cell, LedgerEntry>,
}

impl DiscoveryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Has `cell` been discovered?
    #[inline]
    pub fn is_discovered(&self, cell: Cell) -> bool {
        self.entries.contains_key(&cell)
    }

    /// Record the first discovery of `cell`.
    ///
    /// A `Predecessor::Cell` must already be in the ledger, so every entry is
    /// recorded after the cell it was reached from.
    pub fn record_discovery(
        &mut self,
        cell: Cell,
        predecessor: Predecessor,
        accumulated_cost: f32,
    ) -> Result<(), LedgerError> {
        if self.entries.contains_key(&cell) {
            return Err(LedgerError::AlreadyDiscovered(cell));
        }
        if let Predecessor::Cell(prev) = predecessor {
            if !self.entries.contains_key(&prev) {
                return Err(LedgerError::NotDiscovered(prev));
            }
        }
        self.entries.insert(
            cell,
            LedgerEntry {
                predecessor,
                accumulated_cost,
            },
        );
        Ok(())
    }

    /// Accumulated cost of a discovered cell
    pub fn accumulated_cost_of(&self, cell: Cell) -> Result<f32, LedgerError> {
        self.entry(cell).map(|e| e.accumulated_cost)
    }

    /// Discovering predecessor of a discovered cell
    pub fn predecessor_of(&self, cell: Cell) -> Result<Predecessor, LedgerError> {
        self.entry(cell).map(|e| e.predecessor)
    }

    /// Full entry of a discovered cell
    pub fn entry(&self, cell: Cell) -> Result<&LedgerEntry, LedgerError> {
        self.entries
            .get(&cell)
            .ok_or(LedgerError::NotDiscovered(cell))
    }

    /// Re-parent a discovered cell if `accumulated_cost` is strictly cheaper.
    ///
    /// Only used by [`DiscoveryPolicy::Relaxing`](super::DiscoveryPolicy).
    /// Returns whether the entry changed. The start entry is never re-parented.
    pub fn relax(
        &mut self,
        cell: Cell,
        predecessor: Cell,
        accumulated_cost: f32,
    ) -> Result<bool, LedgerError> {
        if !self.entries.contains_key(&predecessor) {
            return Err(LedgerError::NotDiscovered(predecessor));
        }
        let entry = self
            .entries
            .get_mut(&cell)
            .ok_or(LedgerError::NotDiscovered(cell))?;
        if entry.predecessor == Predecessor::Start || accumulated_cost >= entry.accumulated_cost {
            return Ok(false);
        }
        entry.predecessor = Predecessor::Cell(predecessor);
        entry.accumulated_cost = accumulated_cost;
        Ok(true)
    }

    /// Number of discovered cells
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No cell discovered yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discovered cells, in no particular order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.entries.keys().copied()
    }

    /// Consume the ledger into the explored set
    pub fn into_explored(self) -> HashSet<Cell> {
        self.entries.into_keys().collect()
    }
}
