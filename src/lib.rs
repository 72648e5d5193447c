pub mod actor;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod logging;
pub mod render;
pub mod report;
pub mod search;
pub mod simulate;
pub mod solver;

pub use actor::{Advance, Guard};
pub use config::{Config, SearchConfig};
pub use direction::Direction;
pub use error::{ConfigError, GridError, PatrolError, ReportError};
pub use grid::{Cell, Grid, Position};
pub use render::render_route;
pub use report::Report;
pub use search::{count_loop_obstructions, find_loop_obstructions};
pub use simulate::{detect_loop, visited_positions, walk, Limits, Verdict, Walk};
pub use solver::{solve, Answers, Solution};
