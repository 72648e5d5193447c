use crate::grid::{Cell, Grid, Position};
use std::collections::HashSet;

/// Draw the grid with the patrol route marked.
///
/// `X` marks a visited cell, `O` an added obstruction, `#` an original
/// obstruction and `.` anything else. The start cell is drawn as `X` like
/// any other visited cell.
pub fn render_route(grid: &Grid, visited: &HashSet<Position>, added: Option<Position>) -> String {
    let mut result = String::with_capacity(grid.len() + grid.rows().max(0) as usize);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            let symbol = if Some(pos) == added {
                'O'
            } else if visited.contains(&pos) {
                'X'
            } else {
                match grid.get(pos) {
                    Some(Cell::Obstruction) => '#',
                    _ => '.',
                }
            };
            result.push(symbol);
        }
        result.push('\n');
    }

    result
}
