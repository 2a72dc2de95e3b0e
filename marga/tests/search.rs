//! Search behavior integration tests.
//!
//! Exercises the public search API end to end on hand-built and seeded
//! random grids.

mod common;

use std::collections::HashSet;
use std::f32::consts::SQRT_2;

use approx::assert_relative_eq;
use marga::pathfinding::SearchEngine;
use marga::{
    Cell, CellQuery, Connectivity, DiscoveryPolicy, OccupancyGrid, PathFinder, SearchConfig,
    SearchError, SearchOutcome, SearchState, find_path, find_path_observed,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use common::{assert_valid_path, path_cost, random_free_cell, random_grid, reachable_from, walled_grid};

const BOTH: [Connectivity; 2] = [Connectivity::Four, Connectivity::Eight];

// ============================================================================
// Reference Scenarios
// ============================================================================

#[test]
fn test_straight_line_four_connected() {
    let grid = OccupancyGrid::new(5, 5);
    let found = find_path(&grid, Cell::new(0, 0), Cell::new(4, 0), Connectivity::Four)
        .unwrap()
        .into_found()
        .unwrap();
    assert_eq!(
        found.path,
        vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(3, 0),
            Cell::new(4, 0)
        ]
    );
    assert_relative_eq!(found.cost, 4.0);
}

#[test]
fn test_diagonal_eight_connected() {
    let grid = OccupancyGrid::new(5, 5);
    let found = find_path(&grid, Cell::new(0, 0), Cell::new(4, 4), Connectivity::Eight)
        .unwrap()
        .into_found()
        .unwrap();
    assert_eq!(found.path.len(), 5);
    for pair in found.path.windows(2) {
        assert_eq!(pair[1] - pair[0], Cell::new(1, 1));
    }
    assert_relative_eq!(found.cost, 4.0 * SQRT_2, epsilon = 1e-5);
}

#[test]
fn test_routes_around_center_block() {
    let grid = OccupancyGrid::from_ascii(
        "
        ...
        .#.
        ...
        ",
    )
    .unwrap();
    let found = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2), Connectivity::Four)
        .unwrap()
        .into_found()
        .unwrap();
    assert!(!found.path.contains(&Cell::new(1, 1)));
    assert!(found.path[1] == Cell::new(1, 0) || found.path[1] == Cell::new(0, 1));
    assert_valid_path(&grid, &found.path, Connectivity::Four);
}

#[test]
fn test_start_equals_goal() {
    let grid = OccupancyGrid::new(3, 3);
    let start = Cell::new(1, 2);
    for connectivity in BOTH {
        let mut calls = 0;
        let outcome = find_path_observed(&grid, start, start, connectivity, |_, _| calls += 1).unwrap();
        let found = outcome.into_found().unwrap();
        assert_eq!(found.path, vec![start]);
        assert_eq!(found.cost, 0.0);
        assert_eq!(found.explored, HashSet::from([start]));
        assert_eq!(calls, 0);
    }
}

// ============================================================================
// Reachability
// ============================================================================

#[test]
fn test_open_grid_always_reachable() {
    let grid = OccupancyGrid::new(7, 5);
    let cells: Vec<Cell> = grid.cells().collect();
    for connectivity in BOTH {
        for &start in cells.iter().step_by(3) {
            for &goal in cells.iter().step_by(4) {
                let outcome = find_path(&grid, start, goal, connectivity).unwrap();
                let path = outcome.path();
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&goal));
                assert_valid_path(&grid, path, connectivity);
            }
        }
    }
}

#[test]
fn test_wall_makes_goal_unreachable() {
    let grid = walled_grid(9, 6, 4);
    for connectivity in BOTH {
        let outcome = find_path(&grid, Cell::new(0, 0), Cell::new(8, 5), connectivity).unwrap();
        match outcome {
            SearchOutcome::NoPathFound { explored, .. } => {
                assert_eq!(explored.len(), 4 * 6);
                assert!(explored.iter().all(|c| c.x < 4));
            }
            SearchOutcome::Found(found) => panic!("crossed the wall: {:?}", found.path),
        }
    }
}

#[test]
fn test_diagonal_gap_only_passable_eight_connected() {
    // Only a diagonal move crosses the blocked anti-diagonal
    let grid = OccupancyGrid::from_ascii(
        "
        ..#
        .#.
        #..
        ",
    )
    .unwrap();
    let start = Cell::new(0, 0);
    let goal = Cell::new(2, 2);

    let four = find_path(&grid, start, goal, Connectivity::Four).unwrap();
    assert!(!four.is_found());

    let eight = find_path(&grid, start, goal, Connectivity::Eight).unwrap();
    let found = eight.into_found().unwrap();
    assert_valid_path(&grid, &found.path, Connectivity::Eight);
}

// ============================================================================
// Invalid Endpoints
// ============================================================================

#[test]
fn test_invalid_endpoints() {
    let grid = OccupancyGrid::from_ascii("..#\n...").unwrap();

    assert_eq!(
        find_path(&grid, Cell::new(-1, 0), Cell::new(0, 0), Connectivity::Eight).unwrap_err(),
        SearchError::InvalidStart {
            cell: Cell::new(-1, 0),
            reason: CellQuery::OutOfBounds
        }
    );
    assert_eq!(
        find_path(&grid, Cell::new(0, 0), Cell::new(2, 0), Connectivity::Eight).unwrap_err(),
        SearchError::InvalidGoal {
            cell: Cell::new(2, 0),
            reason: CellQuery::Blocked
        }
    );
    // Height is 2, so y = 2 is outside
    assert_eq!(
        find_path(&grid, Cell::new(0, 0), Cell::new(0, 2), Connectivity::Eight).unwrap_err(),
        SearchError::InvalidGoal {
            cell: Cell::new(0, 2),
            reason: CellQuery::OutOfBounds
        }
    );
}

#[test]
fn test_invalid_start_reported_before_goal() {
    let grid = OccupancyGrid::new(2, 2);
    let err = find_path(&grid, Cell::new(5, 5), Cell::new(6, 6), Connectivity::Four).unwrap_err();
    assert!(matches!(err, SearchError::InvalidStart { .. }));
}

// ============================================================================
// Discovery Reporting
// ============================================================================

#[test]
fn test_explored_contains_path_and_reports_once() {
    let grid = random_grid(7, 24, 18, 0.2);
    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0;

    for _ in 0..20 {
        let (Some(start), Some(goal)) = (
            random_free_cell(&mut rng, &grid),
            random_free_cell(&mut rng, &grid),
        ) else {
            continue;
        };
        let mut reported = Vec::new();
        let outcome = find_path_observed(&grid, start, goal, Connectivity::Eight, |cell, cost| {
            reported.push((cell, cost))
        })
        .unwrap();

        let unique: HashSet<Cell> = reported.iter().map(|&(c, _)| c).collect();
        assert_eq!(unique.len(), reported.len(), "a cell was reported twice");
        assert!(!unique.contains(&start));

        let mut expected = unique.clone();
        expected.insert(start);
        assert_eq!(outcome.explored(), &expected);

        if let Some(found) = outcome.found() {
            assert!(found.path.iter().all(|c| found.explored.contains(c)));
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn test_reported_costs_are_accumulated() {
    let grid = OccupancyGrid::new(4, 4);
    let mut reported = Vec::new();
    find_path_observed(&grid, Cell::new(0, 0), Cell::new(3, 3), Connectivity::Eight, |c, cost| {
        reported.push((c, cost))
    })
    .unwrap();

    // First expansion discovers the start's neighbors in fixed order
    assert_eq!(
        reported[..3],
        [
            (Cell::new(1, 0), 1.0),
            (Cell::new(0, 1), 1.0),
            (Cell::new(1, 1), SQRT_2)
        ]
    );
}

#[test]
fn test_no_path_explores_whole_component() {
    let grid = walled_grid(12, 8, 6);
    let start = Cell::new(2, 3);
    for connectivity in BOTH {
        let outcome = find_path(&grid, start, Cell::new(10, 3), connectivity).unwrap();
        assert!(!outcome.is_found());
        assert_eq!(outcome.explored(), &reachable_from(&grid, start, connectivity));
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_identical_inputs_identical_paths() {
    let grid = random_grid(11, 30, 30, 0.25);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let (Some(start), Some(goal)) = (
            random_free_cell(&mut rng, &grid),
            random_free_cell(&mut rng, &grid),
        ) else {
            continue;
        };
        for connectivity in BOTH {
            let first = find_path(&grid, start, goal, connectivity).unwrap();
            let second = find_path(&grid, start, goal, connectivity).unwrap();
            assert_eq!(first.path(), second.path());
            assert_eq!(first.explored(), second.explored());
            assert_eq!(first.expansions(), second.expansions());
        }
    }
}

// ============================================================================
// Policies on Random Grids
// ============================================================================

#[test]
fn test_policies_agree_on_reachability_and_relaxing_is_never_worse() {
    for seed in 0..8u64 {
        let grid = random_grid(seed, 20, 20, 0.3);
        let mut rng = StdRng::seed_from_u64(seed + 100);

        for _ in 0..5 {
            let (Some(start), Some(goal)) = (
                random_free_cell(&mut rng, &grid),
                random_free_cell(&mut rng, &grid),
            ) else {
                continue;
            };

            for connectivity in BOTH {
                let reachable = reachable_from(&grid, start, connectivity).contains(&goal);
                let first = PathFinder::new(&grid, SearchConfig::new(connectivity))
                    .find_path(start, goal)
                    .unwrap();
                let relaxed = PathFinder::new(
                    &grid,
                    SearchConfig::new(connectivity).with_policy(DiscoveryPolicy::Relaxing),
                )
                .find_path(start, goal)
                .unwrap();

                assert_eq!(first.is_found(), reachable, "seed {} {}", seed, connectivity);
                assert_eq!(relaxed.is_found(), reachable, "seed {} {}", seed, connectivity);

                if let (Some(a), Some(b)) = (first.found(), relaxed.found()) {
                    assert_valid_path(&grid, &a.path, connectivity);
                    assert_valid_path(&grid, &b.path, connectivity);
                    assert_relative_eq!(a.cost, path_cost(&a.path), epsilon = 1e-4);
                    assert_relative_eq!(b.cost, path_cost(&b.path), epsilon = 1e-4);
                    assert!(
                        b.cost <= a.cost + 1e-3,
                        "relaxing cost {} > first discovery cost {}",
                        b.cost,
                        a.cost
                    );
                }
            }
        }
    }
}

// ============================================================================
// Engine Stepping
// ============================================================================

#[test]
fn test_engine_steps_to_terminal_state() {
    let grid = OccupancyGrid::new(6, 1);
    let mut engine =
        SearchEngine::new(&grid, Cell::new(0, 0), Cell::new(5, 0), SearchConfig::new(Connectivity::Four))
            .unwrap();
    assert_eq!(engine.state(), SearchState::Running);

    let mut noop = |_: Cell, _: f32| {};
    let mut steps = 0;
    while engine.step(&mut noop).unwrap() == SearchState::Running {
        steps += 1;
        assert!(steps < 100, "search did not terminate");
    }
    assert_eq!(engine.state(), SearchState::Succeeded);
    // Stepping a finished search changes nothing
    assert_eq!(engine.step(&mut noop).unwrap(), SearchState::Succeeded);

    let outcome = engine.run(&mut noop).unwrap();
    assert_eq!(outcome.path().len(), 6);
}
