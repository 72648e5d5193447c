//! Error types for grid loading and patrol simulation.

use crate::grid::Position;
use std::io;
use std::path::PathBuf;

/// Structural problems found while building a [`Grid`](crate::Grid).
///
/// Every variant names the invariant that failed so callers can report it
/// directly instead of a generic "bad input".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No lines were supplied.
    #[error("grid is empty")]
    EmptyGrid,

    /// A row does not have the same length as the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    UnevenRows {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A character other than `.`, `#` or `^` was found.
    #[error("unknown cell symbol {symbol:?} at {position}")]
    UnknownCell {
        /// Where the symbol was found.
        position: Position,
        /// The offending character.
        symbol: char,
    },

    /// The grid has no `^` marker.
    #[error("no guard start marker '^' found")]
    MissingStart,

    /// The grid has more than one `^` marker.
    #[error("multiple guard start markers: first at {first}, another at {second}")]
    AmbiguousStart {
        /// First marker in row-major order.
        first: Position,
        /// Second marker in row-major order.
        second: Position,
    },
}

/// Errors that can occur while simulating a patrol or searching obstructions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatrolError {
    /// The input grid is malformed.
    #[error("malformed grid: {0}")]
    Grid(#[from] GridError),

    /// The guard loops on the unmodified grid, so no visited set exists.
    #[error("guard starting at {start} never leaves the grid")]
    GuardNeverExits {
        /// The guard's starting position.
        start: Position,
    },

    /// A run took more steps than the configured budget.
    #[error("simulation exceeded the step budget of {budget}")]
    StepBudgetExceeded {
        /// The configured budget.
        budget: u64,
    },
}

/// Problems reading or parsing `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file does not exist.
    #[error("no config file at {}", .path.display())]
    Missing {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// The config path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid TOML for [`Config`](crate::Config).
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        /// The config path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Problems writing a JSON report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report could not be encoded as JSON.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The report file could not be written.
    #[error("failed to write report {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failed_invariant() {
        let uneven = GridError::UnevenRows { row: 3, expected: 10, found: 9 };
        assert_eq!(uneven.to_string(), "row 3 has 9 cells, expected 10");

        let ambiguous = GridError::AmbiguousStart {
            first: Position::new(0, 1),
            second: Position::new(2, 0),
        };
        assert!(ambiguous.to_string().contains("(0, 1)"));
        assert!(ambiguous.to_string().contains("(2, 0)"));

        let wrapped: PatrolError = GridError::MissingStart.into();
        assert!(wrapped.to_string().starts_with("malformed grid"));
    }
}
