use crate::direction::Direction;
use crate::error::GridError;
use crate::grid::{Grid, Position};

/// The patrolling guard: a position plus the direction it is facing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Guard {
    pub position: Position,
    pub direction: Direction,
}

/// Result of a single [`Guard::advance`] call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The cell ahead is off the grid. The guard is unchanged.
    Exited,
    /// The cell ahead is an obstruction. The guard turned right in place.
    Blocked,
    /// The guard stepped forward onto this position.
    Moved(Position),
}

impl Guard {
    /// Create a guard facing up, as the `^` marker indicates
    pub fn new(position: Position) -> Self {
        Guard {
            position,
            direction: Direction::Up,
        }
    }

    /// Create a guard on the grid's start marker
    pub fn from_grid(grid: &Grid) -> Result<Self, GridError> {
        grid.find_guard_start().map(Guard::new)
    }

    /// The position directly ahead of the guard
    pub fn ahead(&self) -> Position {
        self.position.step(self.direction)
    }

    /// Take one step of the patrol protocol.
    ///
    /// At most one turn happens per call; a corner blocked on several sides
    /// takes several calls to resolve.
    pub fn advance(&mut self, grid: &Grid) -> Advance {
        let next = self.ahead();
        match grid.get(next) {
            None => Advance::Exited,
            Some(cell) if cell.is_obstruction() => {
                self.direction = self.direction.turn_right();
                Advance::Blocked
            }
            Some(_) => {
                self.position = next;
                Advance::Moved(next)
            }
        }
    }
}
