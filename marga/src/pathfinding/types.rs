//! Search configuration and result types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::Cell;

use super::cost::Connectivity;

/// How the search treats a cell it reaches a second time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryPolicy {
    /// Predecessor and cost are fixed on first discovery; later routes are ignored.
    ///
    /// Every cell is expanded at most once. The path is always valid but may
    /// cost more than the cheapest route.
    #[default]
    FirstDiscovery,
    /// Canonical A*: a cheaper route re-parents a cell that is not yet expanded.
    Relaxing,
}

impl std::str::FromStr for DiscoveryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_discovery" | "first" => Ok(DiscoveryPolicy::FirstDiscovery),
            "relaxing" | "relax" => Ok(DiscoveryPolicy::Relaxing),
            other => Err(format!(
                "policy must be first-discovery or relaxing, got {:?}",
                other
            )),
        }
    }
}

/// Per-invocation search settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Allowed moves (4- or 8-connected)
    pub connectivity: Connectivity,
    /// Rediscovery handling
    pub policy: DiscoveryPolicy,
}

impl SearchConfig {
    /// First-discovery search with the given connectivity
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            policy: DiscoveryPolicy::FirstDiscovery,
        }
    }

    /// Override the discovery policy
    pub fn with_policy(mut self, policy: DiscoveryPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Engine lifecycle. `Succeeded` and `Exhausted` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Frontier still has entries to expand
    Running,
    /// Goal popped from the frontier
    Succeeded,
    /// Frontier emptied without reaching the goal
    Exhausted,
}

impl SearchState {
    /// Has the engine stopped?
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

/// A successful search.
#[derive(Clone, Debug)]
pub struct FoundPath {
    /// Cells from start to goal inclusive
    pub path: Vec<Cell>,
    /// Accumulated cost of the goal
    pub cost: f32,
    /// Every discovered cell (a superset of `path`)
    pub explored: HashSet<Cell>,
    /// Number of cells expanded
    pub expansions: usize,
}

impl FoundPath {
    /// Number of moves in the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Terminal outcome of a search.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    /// Goal reached
    Found(FoundPath),
    /// Frontier exhausted; the goal is unreachable from the start
    NoPathFound {
        /// Every discovered cell, for diagnostics
        explored: HashSet<Cell>,
        /// Number of cells expanded
        expansions: usize,
    },
}

impl SearchOutcome {
    /// Was a path found?
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The found path, if any
    pub fn found(&self) -> Option<&FoundPath> {
        match self {
            SearchOutcome::Found(found) => Some(found),
            SearchOutcome::NoPathFound { .. } => None,
        }
    }

    /// Consume into the found path, if any
    pub fn into_found(self) -> Option<FoundPath> {
        match self {
            SearchOutcome::Found(found) => Some(found),
            SearchOutcome::NoPathFound { .. } => None,
        }
    }

    /// Path cells (empty when no path was found)
    pub fn path(&self) -> &[Cell] {
        self.found().map_or(&[], |found| found.path.as_slice())
    }

    /// Discovered cells, whatever the outcome
    pub fn explored(&self) -> &HashSet<Cell> {
        match self {
            SearchOutcome::Found(found) => &found.explored,
            SearchOutcome::NoPathFound { explored, .. } => explored,
        }
    }

    /// Number of cells expanded
    pub fn expansions(&self) -> usize {
        match self {
            SearchOutcome::Found(found) => found.expansions,
            SearchOutcome::NoPathFound { expansions, .. } => *expansions,
        }
    }
}
