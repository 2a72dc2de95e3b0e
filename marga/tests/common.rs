//! Test utilities for Marga search tests.
//!
//! Grid builders and path checks shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use marga::pathfinding::step_cost;
use marga::{Cell, Connectivity, GridOracle, OccupancyGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Grid with a full-height wall at column `x`.
pub fn walled_grid(width: usize, height: usize, x: i32) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(width, height);
    for y in 0..height as i32 {
        grid.set_blocked(Cell::new(x, y));
    }
    grid
}

/// Random obstacle field; the same seed always gives the same grid.
pub fn random_grid(seed: u64, width: usize, height: usize, density: f64) -> OccupancyGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = OccupancyGrid::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if rng.random_bool(density) {
                grid.set_blocked(Cell::new(x, y));
            }
        }
    }
    grid
}

/// Pick a random traversable cell.
pub fn random_free_cell(rng: &mut StdRng, grid: &OccupancyGrid) -> Option<Cell> {
    let free: Vec<Cell> = grid.cells().filter(|&c| grid.is_traversable(c)).collect();
    if free.is_empty() {
        None
    } else {
        Some(free[rng.random_range(0..free.len())])
    }
}

/// Cells reachable from `start` by breadth-first flood fill.
pub fn reachable_from(grid: &OccupancyGrid, start: Cell, connectivity: Connectivity) -> HashSet<Cell> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        for next in cell.neighbors(connectivity) {
            if grid.is_traversable(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Assert every cell is traversable and every hop is one legal move.
pub fn assert_valid_path(grid: &OccupancyGrid, path: &[Cell], connectivity: Connectivity) {
    assert!(!path.is_empty(), "empty path");
    for &cell in path {
        assert!(grid.is_traversable(cell), "path crosses {}", cell);
    }
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1], connectivity),
            "{} -> {} is not a {} move",
            pair[0],
            pair[1],
            connectivity
        );
    }
}

/// Sum of step costs along a path, accumulated from the start.
pub fn path_cost(path: &[Cell]) -> f32 {
    path.windows(2)
        .map(|pair| step_cost(pair[0], pair[1]).unwrap())
        .fold(0.0, |acc, step| acc + step)
}
