//! Advent of Code solution calendar
//!
//! Finds every puzzle solution linked into the binary, works out which
//! (year, day) it belongs to, and indexes it so callers can ask for "all
//! solutions of 2025 day 7" or "where is `Day07` registered".
//!
//! # Declaring solutions
//!
//! A module becomes a calendar group with [`calendar!`]. Every type below it
//! that derives [`PuzzleSolution`] is registered under that year; its day is
//! the first number in the type name (`Day07`, `Solution7Part2`), or the value
//! of `#[day_override(N)]` when the name has no usable number.
//!
//! ```ignore
//! mod year_2025 {
//!     aoc_calendar::calendar!(2025);
//!
//!     #[derive(AocSolver, PuzzleSolution)]
//!     #[aoc_solver(max_parts = 2)]
//!     pub struct Day07;
//!
//!     #[derive(AocSolver, PuzzleSolution)]
//!     #[aoc_solver(max_parts = 2)]
//!     #[day_override(12)]
//!     pub struct ChristmasTreeFarm;
//! }
//! ```
//!
//! # Querying
//!
//! ```no_run
//! use aoc_calendar::SolutionRegistry;
//!
//! let registry = SolutionRegistry::get();
//! for entry in registry.solutions(2025, 7) {
//!     let mut solver = entry.create_solver("input").unwrap();
//!     println!("{}: {}", entry.solution_type.name(), solver.solve(1).unwrap().answer);
//! }
//! ```
//!
//! The registry is built once, on first access. A solution whose day cannot be
//! resolved fails the build: [`SolutionRegistry::try_get`] returns the error,
//! [`SolutionRegistry::get`] panics with it.

mod coordinate;
mod day_override;
mod error;
mod instance;
mod naming;
mod registry;
mod scanner;
mod solver;

#[cfg(test)]
mod test_support;

// Re-export public API
pub use coordinate::CalendarCoordinate;
pub use day_override::resolve_override;
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use naming::{extract_day, simple_type_name};
pub use registry::{
    RegistrationEntry, SolutionCalendar, SolutionRegistry, SolutionType, SolverFactory,
};
pub use scanner::{CalendarGroup, ScannedGroup, Scanner, SolutionPlugin};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by `calendar!` and the derive macros
pub use inventory;

// Re-export the derive macros
pub use aoc_calendar_macros::{AocSolver, PuzzleSolution};
