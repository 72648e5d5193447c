mod common;

use common::lines_from_mask;
use guard_patrol::{
    detect_loop, find_loop_obstructions, walk, Cell, Grid, Guard, Limits, Position, SearchConfig,
    Verdict, Walk,
};
use proptest::prelude::*;

/// Small random grids: dimensions, obstruction mask (~20% blocked), start index
fn grid_strategy() -> impl Strategy<Value = Vec<String>> {
    (1usize..9, 1usize..9).prop_flat_map(|(rows, cols)| {
        let cells = rows * cols;
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(prop::bool::weighted(0.2), cells),
            0..cells,
        )
            .prop_map(|(rows, cols, blocked, start)| lines_from_mask(rows, cols, &blocked, start))
    })
}

fn setup(lines: &[String]) -> (Grid, Guard) {
    let grid = Grid::from_lines(lines).unwrap();
    let guard = Guard::from_grid(&grid).unwrap();
    (grid, guard)
}

/// Try an obstruction on every empty non-start cell, ignoring the baseline route
fn exhaustive_loop_obstructions(grid: &Grid, guard: Guard) -> Vec<Position> {
    let mut found = Vec::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            if pos == guard.position || grid.get(pos) != Some(Cell::Empty) {
                continue;
            }
            let mut trial = grid.clone();
            trial.set(pos, Cell::Obstruction);
            if detect_loop(&trial, guard, Limits::default()).unwrap() == Verdict::LoopDetected {
                found.push(pos);
            }
        }
    }
    found
}

proptest! {
    #[test]
    fn baseline_walk_terminates_within_state_bound(lines in grid_strategy()) {
        let (grid, guard) = setup(&lines);
        // rows * cols * 4 states, plus the final exiting call
        let bound = grid.len() as u64 * 4 + 1;
        let limits = Limits { max_steps: Some(bound) };

        prop_assert!(walk(&grid, guard, limits).is_ok());
        prop_assert!(detect_loop(&grid, guard, limits).is_ok());
    }

    #[test]
    fn walk_and_detect_loop_agree(lines in grid_strategy()) {
        let (grid, guard) = setup(&lines);
        let walked = walk(&grid, guard, Limits::default()).unwrap();
        let verdict = detect_loop(&grid, guard, Limits::default()).unwrap();

        match walked {
            Walk::LeftGrid(visited) => {
                prop_assert_eq!(verdict, Verdict::NoLoop);
                prop_assert!(visited.contains(&guard.position));
                prop_assert!(visited.iter().all(|p| grid.contains(*p)));
            }
            Walk::Looped => prop_assert_eq!(verdict, Verdict::LoopDetected),
        }
    }

    #[test]
    fn search_restores_grid_and_modes_agree(lines in grid_strategy()) {
        let (mut grid, guard) = setup(&lines);
        let Walk::LeftGrid(visited) = walk(&grid, guard, Limits::default()).unwrap() else {
            return Ok(());
        };
        let before = grid.clone();

        let sequential = SearchConfig { parallel: false, ..SearchConfig::default() };
        let seq = find_loop_obstructions(&mut grid, guard, &visited, &sequential).unwrap();
        prop_assert_eq!(&grid, &before);

        let again = find_loop_obstructions(&mut grid, guard, &visited, &sequential).unwrap();
        let par = find_loop_obstructions(&mut grid, guard, &visited, &SearchConfig::default()).unwrap();
        prop_assert_eq!(&grid, &before);
        prop_assert_eq!(&seq, &again);
        prop_assert_eq!(&seq, &par);

        prop_assert!(!seq.contains(&guard.position));
        prop_assert!(seq.iter().all(|p| visited.contains(p)));
    }

    #[test]
    fn route_candidates_match_exhaustive_search(lines in grid_strategy()) {
        let (mut grid, guard) = setup(&lines);
        let Walk::LeftGrid(visited) = walk(&grid, guard, Limits::default()).unwrap() else {
            return Ok(());
        };

        let expected = exhaustive_loop_obstructions(&grid, guard);
        let found = find_loop_obstructions(&mut grid, guard, &visited, &SearchConfig::default()).unwrap();
        prop_assert_eq!(found, expected);
    }
}
