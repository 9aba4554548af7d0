//! Error types for the CLI

use aoc_calendar::CalendarCoordinate;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// The registry could not be built
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_calendar::RegistrationError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_calendar::SolverError),

    /// `--solution` matched nothing at the coordinate
    #[error("No solution named '{name}' registered for {date}")]
    UnknownSolution {
        name: String,
        date: CalendarCoordinate,
    },

    /// At least one requested part returned an error
    #[error("{failed} of {total} part(s) failed")]
    PartsFailed { failed: usize, total: usize },

    /// Puzzle input could not be read
    #[error("Cannot read input {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
