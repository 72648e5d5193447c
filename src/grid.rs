use crate::direction::Direction;
use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the grid. Row 0 is the top line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// The neighbouring position one step in `direction` (may be off-grid)
    pub fn step(self, direction: Direction) -> Position {
        let (dr, dc) = direction.vector();
        Position::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Obstruction,
    /// The `^` marker. Traversable; only used to locate the guard.
    GuardStart,
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Obstruction),
            '^' => Some(Cell::GuardStart),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Obstruction => '#',
            Cell::GuardStart => '^',
        }
    }

    pub fn is_obstruction(self) -> bool {
        self == Cell::Obstruction
    }
}

/// Fixed-size lab map stored row-major in a single buffer.
///
/// Dimensions are set at construction and never change; [`Grid::set`] is the
/// only mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn new(rows: i32, cols: i32) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; (rows.max(0) * cols.max(0)) as usize],
        }
    }

    /// Parse already-split input lines.
    ///
    /// All rows must have the width of the first row. A trailing `\r` is
    /// ignored so CRLF input parses the same as LF input.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        let rows: Vec<&str> = lines
            .iter()
            .map(|line| line.as_ref().trim_end_matches('\r'))
            .collect();

        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.chars().count(),
            _ => return Err(GridError::EmptyGrid),
        };

        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::UnevenRows { row, expected, found });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(GridError::UnknownCell {
                    position: Position::new(row as i32, col as i32),
                    symbol,
                })?;
                cells.push(cell);
            }
        }

        Ok(Grid {
            rows: rows.len() as i32,
            cols: expected as i32,
            cells,
        })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw row-major cell buffer
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check that `position` lies in `[0, rows) x [0, cols)`
    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0 && position.row < self.rows && position.col >= 0 && position.col < self.cols
    }

    /// Row-major buffer index, or `None` when out of bounds
    pub fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some((position.row * self.cols + position.col) as usize)
        } else {
            None
        }
    }

    /// Convert a buffer index back to a position
    pub fn position(&self, index: usize) -> Position {
        let index = index as i32;
        Position::new(index / self.cols, index % self.cols)
    }

    /// Cell at `position`; `None` means the position is off the grid.
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `position`.
    ///
    /// Callers must stay in bounds; out-of-bounds writes are dropped.
    pub fn set(&mut self, position: Position, cell: Cell) {
        debug_assert!(self.contains(position), "write outside grid at {position}");
        if let Some(i) = self.index(position) {
            self.cells[i] = cell;
        }
    }

    /// Locate the unique `^` marker with a single row-major scan.
    pub fn find_guard_start(&self) -> Result<Position, GridError> {
        let mut markers = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::GuardStart)
            .map(|(i, _)| self.position(i));

        let first = markers.next().ok_or(GridError::MissingStart)?;
        match markers.next() {
            Some(second) => Err(GridError::AmbiguousStart { first, second }),
            None => Ok(first),
        }
    }

    /// Count obstruction cells
    pub fn obstruction_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_obstruction()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1) as usize) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
