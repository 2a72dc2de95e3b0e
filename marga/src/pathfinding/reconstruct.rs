//! Path reconstruction from the discovery ledger.

use crate::core::Cell;
use crate::error::LedgerError;

use super::ledger::{DiscoveryLedger, Predecessor};

/// Walk predecessor links back from `goal` and return the route start..=goal.
///
/// The returned path has `hops + 1` cells. The start cell is the one whose
/// predecessor is [`Predecessor::Start`]. A route can never be longer than
/// the ledger, so a walk that exceeds it fails with
/// [`LedgerError::PredecessorCycle`].
pub fn reconstruct(ledger: &DiscoveryLedger, goal: Cell) -> Result<Vec<Cell>, LedgerError> {
    if !ledger.is_discovered(goal) {
        return Err(LedgerError::UnreachedGoal(goal));
    }

    let mut path = vec![goal];
    let mut current = goal;

    while let Predecessor::Cell(prev) = ledger.predecessor_of(current)? {
        if path.len() >= ledger.len() {
            return Err(LedgerError::PredecessorCycle(goal));
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();

    Ok(path)
}
