//! Search engine: the best-first expansion loop.
//!
//! The engine owns one search's frontier and ledger. It is created already
//! seeded with the start cell, advanced with [`SearchEngine::step`], and
//! consumed by [`SearchEngine::run`]. Once it reaches
//! [`SearchState::Succeeded`] or [`SearchState::Exhausted`] it does nothing more.
//!
//! Under [`DiscoveryPolicy::FirstDiscovery`] a neighbor that is already in the
//! ledger is skipped outright, with no cost comparison and no re-push. Each cell
//! is therefore discovered once and expanded at most once.

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, trace};

use crate::core::Cell;
use crate::error::SearchError;
use crate::grid::GridOracle;

use super::cost::{heuristic, neighbor_step_cost};
use super::frontier::Frontier;
use super::ledger::{DiscoveryLedger, Predecessor};
use super::reconstruct::reconstruct;
use super::types::{DiscoveryPolicy, FoundPath, SearchConfig, SearchOutcome, SearchState};

/// One in-flight search over a grid oracle.
pub struct SearchEngine<'a, G: GridOracle + ?Sized> {
    grid: &'a G,
    config: SearchConfig,
    start: Cell,
    goal: Cell,
    frontier: Frontier,
    ledger: DiscoveryLedger,
    /// Cells already expanded; later frontier entries for them are stale
    expanded: HashSet<Cell>,
    state: SearchState,
    started_at: Instant,
}

impl<'a, G: GridOracle + ?Sized> SearchEngine<'a, G> {
    /// Validate the endpoints and seed the search with the start cell.
    pub fn new(
        grid: &'a G,
        start: Cell,
        goal: Cell,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        trace!(
            "[Search] new: start={} goal={} {} {:?}",
            start, goal, config.connectivity, config.policy
        );

        let reason = grid.query(start);
        if !reason.is_traversable() {
            debug!("[Search] FAILED: InvalidStart {} ({:?})", start, reason);
            return Err(SearchError::InvalidStart {
                cell: start,
                reason,
            });
        }
        let reason = grid.query(goal);
        if !reason.is_traversable() {
            debug!("[Search] FAILED: InvalidGoal {} ({:?})", goal, reason);
            return Err(SearchError::InvalidGoal { cell: goal, reason });
        }

        let mut ledger = DiscoveryLedger::new();
        ledger.record_discovery(start, Predecessor::Start, 0.0)?;

        let mut frontier = Frontier::new();
        frontier.push(start, heuristic(start, goal, config.connectivity));

        Ok(Self {
            grid,
            config,
            start,
            goal,
            frontier,
            ledger,
            expanded: HashSet::new(),
            state: SearchState::Running,
            started_at: Instant::now(),
        })
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Start cell
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Goal cell
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Cells discovered so far
    #[inline]
    pub fn discovered_count(&self) -> usize {
        self.ledger.len()
    }

    /// Cells expanded so far
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expanded.len()
    }

    /// Run one iteration of the loop: pop one frontier entry and act on it.
    ///
    /// `on_expand` is called once for each newly discovered cell, in discovery
    /// order, with its accumulated cost. It is never called for the start cell.
    /// Calling `step` in a terminal state returns that state unchanged.
    pub fn step<F>(&mut self, on_expand: &mut F) -> Result<SearchState, SearchError>
    where
        F: FnMut(Cell, f32) + ?Sized,
    {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        if self.frontier.is_empty() {
            self.state = SearchState::Exhausted;
            return Ok(self.state);
        }

        let (cell, _) = self.frontier.pop_min()?;

        // Stale duplicate of an already expanded cell
        if !self.expanded.insert(cell) {
            return Ok(self.state);
        }

        if cell == self.goal {
            self.state = SearchState::Succeeded;
            return Ok(self.state);
        }

        let cell_cost = self.ledger.accumulated_cost_of(cell)?;
        let connectivity = self.config.connectivity;

        for neighbor in cell.neighbors(connectivity) {
            if !self.grid.is_traversable(neighbor) {
                continue;
            }

            let new_cost = cell_cost + neighbor_step_cost(cell, neighbor);

            if self.ledger.is_discovered(neighbor) {
                match self.config.policy {
                    DiscoveryPolicy::FirstDiscovery => continue,
                    DiscoveryPolicy::Relaxing => {
                        if !self.expanded.contains(&neighbor)
                            && self.ledger.relax(neighbor, cell, new_cost)?
                        {
                            self.frontier.push(
                                neighbor,
                                new_cost + heuristic(neighbor, self.goal, connectivity),
                            );
                        }
                        continue;
                    }
                }
            }

            self.ledger
                .record_discovery(neighbor, Predecessor::Cell(cell), new_cost)?;
            self.frontier.push(
                neighbor,
                new_cost + heuristic(neighbor, self.goal, connectivity),
            );
            on_expand(neighbor, new_cost);
        }

        Ok(self.state)
    }

    /// Drive the search to a terminal state and build the outcome.
    pub fn run<F>(mut self, on_expand: &mut F) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(Cell, f32) + ?Sized,
    {
        while !self.step(on_expand)?.is_terminal() {}
        self.into_outcome()
    }

    fn into_outcome(self) -> Result<SearchOutcome, SearchError> {
        let elapsed = self.started_at.elapsed();
        let expansions = self.expanded.len();

        match self.state {
            SearchState::Succeeded => {
                let path = reconstruct(&self.ledger, self.goal)?;
                let cost = self.ledger.accumulated_cost_of(self.goal)?;
                debug!(
                    "[Search] SUCCESS: {} -> {} path={} cells cost={:.2} discovered={} expanded={} in {:?}",
                    self.start,
                    self.goal,
                    path.len(),
                    cost,
                    self.ledger.len(),
                    expansions,
                    elapsed
                );
                Ok(SearchOutcome::Found(FoundPath {
                    path,
                    cost,
                    explored: self.ledger.into_explored(),
                    expansions,
                }))
            }
            SearchState::Exhausted | SearchState::Running => {
                debug!(
                    "[Search] NoPathFound: {} -> {} discovered={} expanded={} in {:?}",
                    self.start,
                    self.goal,
                    self.ledger.len(),
                    expansions,
                    elapsed
                );
                Ok(SearchOutcome::NoPathFound {
                    explored: self.ledger.into_explored(),
                    expansions,
                })
            }
        }
    }
}
