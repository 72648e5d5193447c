#![allow(dead_code)]

use guard_patrol::{Grid, Guard, Limits, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The worked example from the puzzle statement
pub const EXAMPLE: [&str; 10] = [
    "....#.....",
    ".........#",
    "..........",
    "..#.......",
    ".......#..",
    "..........",
    ".#..^.....",
    "........#.",
    "#.........",
    "......#...",
];

/// Test case stored as JSON under `test_data/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatrolTestData {
    #[serde(rename = "testName")]
    pub test_name: String,
    pub grid: Vec<String>,
    #[serde(rename = "expectedVisited")]
    pub expected_visited: usize,
    #[serde(rename = "expectedLoopObstructions")]
    pub expected_loop_obstructions: usize,
}

/// Load a test from JSON file
pub fn load_test(path: &Path) -> Result<PatrolTestData, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let test_data: PatrolTestData = serde_json::from_str(&contents)?;
    Ok(test_data)
}

/// Parse `lines` and place the guard on its marker
pub fn setup(lines: &[&str]) -> (Grid, Guard) {
    let grid = Grid::from_lines(lines).expect("test grid should parse");
    let guard = Guard::from_grid(&grid).expect("test grid should have one guard");
    (grid, guard)
}

/// Baseline visited set, panicking if the guard is trapped
pub fn baseline(grid: &Grid, guard: Guard) -> HashSet<Position> {
    guard_patrol::visited_positions(grid, guard, Limits::default()).expect("guard should exit")
}

/// Build grid lines from an obstruction mask and a start index
pub fn lines_from_mask(rows: usize, cols: usize, blocked: &[bool], start: usize) -> Vec<String> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let i = r * cols + c;
                    if i == start {
                        '^'
                    } else if blocked[i] {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}
