use serde::{Deserialize, Serialize};

/// Facing of the guard. Turning always goes clockwise through [`Direction::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise order, starting from the initial facing.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Position of this direction in [`Direction::ALL`]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Unit step as `(d_row, d_col)`
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Next direction clockwise; Left wraps back to Up.
    pub fn turn_right(self) -> Direction {
        Direction::ALL[(self.index() + 1) % Direction::ALL.len()]
    }
}
