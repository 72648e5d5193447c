//! Patrol simulation over a fixed grid.
//!
//! Two entry points share one step loop:
//!
//! - [`walk`] (baseline mode) collects every distinct position the guard
//!   stands on before leaving the grid.
//! - [`detect_loop`] (loop-detection mode) only reports whether the guard
//!   ever repeats a `(position, direction)` state.
//!
//! Both track `(position, direction)` states, so both terminate: the state
//! space is at most `rows * cols * 4`, and any run that never exits must
//! revisit a state within that many steps.

use crate::actor::{Advance, Guard};
use crate::error::PatrolError;
use crate::grid::{Grid, Position};
use std::collections::HashSet;
use tracing::debug;

/// Optional run limits. The default imposes none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of `advance` calls per run.
    pub max_steps: Option<u64>,
}

/// Outcome of a baseline walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Walk {
    /// The guard walked off the grid after visiting these positions.
    LeftGrid(HashSet<Position>),
    /// The guard is trapped even without any added obstruction.
    Looped,
}

/// Outcome of a loop-detection run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoLoop,
    LoopDetected,
}

/// `(position, direction)` states seen so far: one 4-bit mask per cell.
///
/// Kept separate from the position-only set of [`walk`]; a position seen
/// before with a different facing is not a loop.
struct VisitedStates {
    masks: Vec<u8>,
}

impl VisitedStates {
    fn new(grid: &Grid) -> Self {
        VisitedStates {
            masks: vec![0; grid.len()],
        }
    }

    /// Record the guard's state. Returns `false` if it was already recorded.
    fn insert(&mut self, grid: &Grid, guard: &Guard) -> bool {
        let Some(i) = grid.index(guard.position) else {
            return true;
        };
        let bit = 1u8 << guard.direction.index();
        let fresh = self.masks[i] & bit == 0;
        self.masks[i] |= bit;
        fresh
    }
}

/// Drive `guard` until it exits or repeats a state.
///
/// `on_move` sees every position the guard steps onto (not the start).
fn run(
    grid: &Grid,
    mut guard: Guard,
    limits: Limits,
    mut on_move: impl FnMut(Position),
) -> Result<Verdict, PatrolError> {
    let mut states = VisitedStates::new(grid);
    states.insert(grid, &guard);

    let mut steps: u64 = 0;
    loop {
        if let Some(budget) = limits.max_steps {
            if steps >= budget {
                return Err(PatrolError::StepBudgetExceeded { budget });
            }
        }
        steps += 1;

        match guard.advance(grid) {
            Advance::Exited => return Ok(Verdict::NoLoop),
            // A loop can close on a turn-in-place state, so turns are
            // checked as well as moves.
            Advance::Blocked => {}
            Advance::Moved(position) => on_move(position),
        }

        if !states.insert(grid, &guard) {
            return Ok(Verdict::LoopDetected);
        }
    }
}

/// Baseline walk: every distinct position visited, start included.
pub fn walk(grid: &Grid, guard: Guard, limits: Limits) -> Result<Walk, PatrolError> {
    let mut visited = HashSet::from([guard.position]);
    let verdict = run(grid, guard, limits, |position| {
        visited.insert(position);
    })?;

    match verdict {
        Verdict::NoLoop => {
            debug!(visited = visited.len(), "guard left the grid");
            Ok(Walk::LeftGrid(visited))
        }
        Verdict::LoopDetected => {
            debug!(start = %guard.position, "guard trapped on baseline grid");
            Ok(Walk::Looped)
        }
    }
}

/// Loop detection: does the guard repeat a `(position, direction)` state?
pub fn detect_loop(grid: &Grid, guard: Guard, limits: Limits) -> Result<Verdict, PatrolError> {
    run(grid, guard, limits, |_| {})
}

/// Baseline walk that treats a trapped guard as an error.
pub fn visited_positions(
    grid: &Grid,
    guard: Guard,
    limits: Limits,
) -> Result<HashSet<Position>, PatrolError> {
    match walk(grid, guard, limits)? {
        Walk::LeftGrid(visited) => Ok(visited),
        Walk::Looped => Err(PatrolError::GuardNeverExits {
            start: guard.position,
        }),
    }
}
