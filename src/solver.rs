//! Lines in, two answers out.

use crate::actor::Guard;
use crate::config::SearchConfig;
use crate::error::PatrolError;
use crate::grid::{Grid, Position};
use crate::search::find_loop_obstructions;
use crate::simulate::visited_positions;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::info;

/// The two puzzle answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    /// Distinct positions visited before the guard leaves the grid
    pub visited: usize,
    /// Positions where one new obstruction traps the guard in a loop
    pub loop_obstructions: usize,
}

/// Everything computed while solving, kept for rendering and reporting
#[derive(Debug, Clone)]
pub struct Solution {
    /// The input grid, unchanged by the search
    pub grid: Grid,
    pub start: Guard,
    pub visited: HashSet<Position>,
    /// Row-major order
    pub loop_obstructions: Vec<Position>,
    pub elapsed: Duration,
}

impl Solution {
    pub fn answers(&self) -> Answers {
        Answers {
            visited: self.visited.len(),
            loop_obstructions: self.loop_obstructions.len(),
        }
    }
}

/// Parse the grid, walk the baseline route, then search for loop-causing
/// obstructions along it.
///
/// Structural input errors are returned before any simulation runs.
pub fn solve<S: AsRef<str>>(lines: &[S], config: &SearchConfig) -> Result<Solution, PatrolError> {
    let started = Instant::now();

    let mut grid = Grid::from_lines(lines)?;
    let start = Guard::from_grid(&grid)?;
    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        obstructions = grid.obstruction_count(),
        start = %start.position,
        "grid loaded"
    );

    let visited = visited_positions(&grid, start, config.limits())?;
    info!(visited = visited.len(), "baseline walk finished");

    let loop_obstructions = find_loop_obstructions(&mut grid, start, &visited, config)?;

    let elapsed = started.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "solved");

    Ok(Solution {
        grid,
        start,
        visited,
        loop_obstructions,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_solve_small_grid() {
        let lines = [".#..", "...#", "^...", "..#."];
        let solution = solve(&lines, &SearchConfig::default()).unwrap();
        assert_eq!(
            solution.answers(),
            Answers { visited: 3, loop_obstructions: 0 }
        );
        assert_eq!(solution.grid, Grid::from_lines(&lines).unwrap());
    }

    #[test]
    fn test_solve_rejects_missing_start() {
        let err = solve(&["...", "..."], &SearchConfig::default()).unwrap_err();
        assert_eq!(err, PatrolError::Grid(GridError::MissingStart));
    }

    #[test]
    fn test_solve_rejects_trapped_guard() {
        let err = solve(&[".#..", "...#", "#^..", "..#."], &SearchConfig::default()).unwrap_err();
        assert_eq!(err, PatrolError::GuardNeverExits { start: Position::new(2, 1) });
    }
}
