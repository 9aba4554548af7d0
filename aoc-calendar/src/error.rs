//! Error types for the calendar registry and the solve capability

use crate::coordinate::CalendarCoordinate;
use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds `PARTS`)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for running a registered solution
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solution registered at the given coordinate
    #[error("No solution registered for {0}")]
    NotFound(CalendarCoordinate),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error raised while building the solution registry.
///
/// Every variant is a configuration mistake in the solutions themselves, so the
/// build is never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Neither the type name nor an override yields a day
    #[error(
        "Unable to detect a valid day value from solution type '{type_name}'. \
         Follow the `DayNN` naming convention, or add #[day_override(N)] instead."
    )]
    UnresolvableDay { type_name: String },

    /// The same solution type was registered twice
    #[error(
        "Solution type '{type_name}' is already registered for {existing}, \
         refusing to register it again for {attempted}"
    )]
    DuplicateType {
        type_name: String,
        existing: CalendarCoordinate,
        attempted: CalendarCoordinate,
    },

    /// Two `calendar!` declarations share one module
    #[error("Module '{module_path}' declares calendar {first} and calendar {second}")]
    DuplicateCalendar {
        module_path: String,
        first: u16,
        second: u16,
    },
}
