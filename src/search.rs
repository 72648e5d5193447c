//! Search for single obstructions that trap the guard in a loop.
//!
//! Candidates come from the baseline walk: an obstruction anywhere the guard
//! never stands cannot change its route. Each trial places one obstruction,
//! reruns [`detect_loop`] from the original start, and restores the cell.

use crate::actor::Guard;
use crate::config::SearchConfig;
use crate::error::PatrolError;
use crate::grid::{Cell, Grid, Position};
use crate::simulate::{detect_loop, Limits, Verdict};
use rayon::prelude::*;
use std::collections::HashSet;
use std::ops::Deref;
use tracing::{debug, info};

/// A temporary obstruction. Dropping it writes the previous cell back, so
/// the grid is restored on every exit path of a trial.
struct PlacedObstruction<'g> {
    grid: &'g mut Grid,
    position: Position,
    previous: Cell,
}

impl<'g> PlacedObstruction<'g> {
    fn place(grid: &'g mut Grid, position: Position) -> Option<Self> {
        let previous = grid.get(position)?;
        grid.set(position, Cell::Obstruction);
        Some(PlacedObstruction {
            grid,
            position,
            previous,
        })
    }
}

impl Deref for PlacedObstruction<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        self.grid
    }
}

impl Drop for PlacedObstruction<'_> {
    fn drop(&mut self) {
        self.grid.set(self.position, self.previous);
    }
}

/// Sorted candidate list: visited, in bounds, not already blocked, and never
/// the guard's own start.
fn candidates(grid: &Grid, start: Guard, visited: &HashSet<Position>) -> Vec<Position> {
    let mut out: Vec<Position> = visited
        .iter()
        .copied()
        .filter(|&p| p != start.position)
        .filter(|&p| matches!(grid.get(p), Some(cell) if !cell.is_obstruction()))
        .collect();
    out.sort_unstable();
    out
}

/// Run one trial. Returns whether the obstruction at `candidate` traps the guard.
fn trial(grid: &mut Grid, start: Guard, candidate: Position, limits: Limits) -> Result<bool, PatrolError> {
    let Some(placed) = PlacedObstruction::place(grid, candidate) else {
        return Ok(false);
    };
    let verdict = detect_loop(&placed, start, limits)?;
    if verdict == Verdict::LoopDetected {
        debug!(%candidate, "obstruction traps the guard");
    }
    Ok(verdict == Verdict::LoopDetected)
}

/// Every position where one added obstruction traps the guard, in row-major
/// order.
///
/// `visited` must be the baseline visited set for `start` on `grid`. In
/// sequential mode `grid` is mutated in place and restored after each
/// trial; in parallel mode each worker thread clones it and `grid` is only
/// read.
pub fn find_loop_obstructions(
    grid: &mut Grid,
    start: Guard,
    visited: &HashSet<Position>,
    config: &SearchConfig,
) -> Result<Vec<Position>, PatrolError> {
    let candidates = candidates(grid, start, visited);
    let limits = config.limits();

    let found: Vec<Position> = if config.parallel {
        let base: &Grid = grid;
        let verdicts: Vec<Option<Position>> = candidates
            .par_iter()
            .map_init(
                || base.clone(),
                |local, &candidate| {
                    trial(local, start, candidate, limits).map(|hit| hit.then_some(candidate))
                },
            )
            .collect::<Result<Vec<_>, PatrolError>>()?;
        verdicts.into_iter().flatten().collect()
    } else {
        let mut found = Vec::new();
        for &candidate in &candidates {
            if trial(grid, start, candidate, limits)? {
                found.push(candidate);
            }
        }
        found
    };

    info!(
        candidates = candidates.len(),
        loops = found.len(),
        parallel = config.parallel,
        "obstruction search finished"
    );
    Ok(found)
}

/// Number of positions where one added obstruction traps the guard.
pub fn count_loop_obstructions(
    grid: &mut Grid,
    start: Guard,
    visited: &HashSet<Position>,
    config: &SearchConfig,
) -> Result<usize, PatrolError> {
    find_loop_obstructions(grid, start, visited, config).map(|found| found.len())
}
