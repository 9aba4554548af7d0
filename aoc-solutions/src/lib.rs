//! Advent of Code puzzle solutions
//!
//! Each year is a module declared with `aoc_calendar::calendar!`; the solutions
//! inside derive `PuzzleSolution` and are picked up by the registry without
//! any central list.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
