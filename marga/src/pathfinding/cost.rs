//! Step costs and heuristics.

use std::f32::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Cell;
use crate::error::SearchError;

/// Which moves the search may make from a cell.
///
/// Serialized as `four`/`eight`; the neighbor counts `4`/`8` are also accepted
/// when deserializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "ConnectivityRepr")]
pub enum Connectivity {
    /// Axis-aligned moves only, unit cost, Manhattan heuristic
    Four,
    /// Axis-aligned and diagonal moves, octile heuristic
    #[default]
    Eight,
}

impl Connectivity {
    /// Number of neighbors per cell (4 or 8)
    pub const fn degree(self) -> u8 {
        match self {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        }
    }
}

impl TryFrom<u8> for Connectivity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Connectivity::Four),
            8 => Ok(Connectivity::Eight),
            other => Err(format!("connectivity must be 4 or 8, got {}", other)),
        }
    }
}

/// Accepted config spellings of [`Connectivity`]
#[derive(Deserialize)]
#[serde(untagged)]
enum ConnectivityRepr {
    Degree(u8),
    Name(String),
}

impl TryFrom<ConnectivityRepr> for Connectivity {
    type Error = String;

    fn try_from(repr: ConnectivityRepr) -> Result<Self, Self::Error> {
        match repr {
            ConnectivityRepr::Degree(degree) => Connectivity::try_from(degree),
            ConnectivityRepr::Name(name) => name.parse(),
        }
    }
}

impl FromStr for Connectivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4" | "four" => Ok(Connectivity::Four),
            "8" | "eight" => Ok(Connectivity::Eight),
            other => Err(format!("connectivity must be 4 or 8, got {:?}", other)),
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-connected", self.degree())
    }
}

/// Cost of moving from `a` to adjacent cell `b`.
///
/// Cardinal moves cost `1`, diagonal moves cost `√2`. Anything else is not a
/// single move and is rejected.
pub fn step_cost(a: Cell, b: Cell) -> Result<f32, SearchError> {
    match a.abs_diff(&b) {
        (1, 0) | (0, 1) => Ok(1.0),
        (1, 1) => Ok(SQRT_2),
        _ => Err(SearchError::InvalidStep { from: a, to: b }),
    }
}

/// Step cost for a move already known to be a neighbor hop.
#[inline]
pub(crate) fn neighbor_step_cost(a: Cell, b: Cell) -> f32 {
    if a.x != b.x && a.y != b.y {
        SQRT_2
    } else {
        1.0
    }
}

/// Admissible, consistent estimate of the remaining cost from `cell` to `goal`.
///
/// Octile distance `min(dx,dy)·√2 + |dx−dy|` for 8-connected grids,
/// Manhattan distance `dx + dy` for 4-connected grids.
pub fn heuristic(cell: Cell, goal: Cell, connectivity: Connectivity) -> f32 {
    let (dx, dy) = cell.abs_diff(&goal);
    match connectivity {
        Connectivity::Eight => octile_distance(dx, dy),
        Connectivity::Four => (dx + dy) as f32,
    }
}

#[inline]
fn octile_distance(dx: u32, dy: u32) -> f32 {
    let min = dx.min(dy) as f32;
    let max = dx.max(dy) as f32;
    min * SQRT_2 + (max - min)
}
