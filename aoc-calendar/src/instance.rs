//! Running a registered solution on one input

use crate::coordinate::CalendarCoordinate;
use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part, with the wall-clock window it was computed in
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed puzzle, ready to solve its parts.
///
/// Created by the factory stored in a
/// [`SolutionType`](crate::SolutionType); the registry hands it out boxed as a
/// [`DynSolver`].
pub struct SolverInstance<'a, S: Solver> {
    date: CalendarCoordinate,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` for the solution registered at `date`, recording parse timing.
    pub fn new(date: CalendarCoordinate, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            date,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased view of a [`SolverInstance`].
///
/// # Example
///
/// ```no_run
/// use aoc_calendar::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{} part {}: {}", solver.date(), part, result.answer);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part, rejecting parts outside `1..=parts()`
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    /// The coordinate this solution was registered at
    fn date(&self) -> CalendarCoordinate;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn date(&self) -> CalendarCoordinate {
        self.date
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
