use crate::error::ReportError;
use crate::grid::Position;
use crate::solver::Solution;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable summary of a solved grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Grid dimensions
    pub rows: i32,
    pub cols: i32,
    /// Guard start position
    pub start: Position,
    pub visited_count: usize,
    pub loop_obstruction_count: usize,
    /// Loop-causing obstruction positions, row-major
    pub loop_obstructions: Vec<Position>,
    pub elapsed_ms: u64,
}

impl Report {
    pub fn from_solution(solution: &Solution) -> Self {
        let answers = solution.answers();
        Report {
            rows: solution.grid.rows(),
            cols: solution.grid.cols(),
            start: solution.start.position,
            visited_count: answers.visited,
            loop_obstruction_count: answers.loop_obstructions,
            loop_obstructions: solution.loop_obstructions.clone(),
            elapsed_ms: solution.elapsed.as_millis() as u64,
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save to file as pretty-printed JSON
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let json = self.to_json()?;

        fs::write(path, json).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
