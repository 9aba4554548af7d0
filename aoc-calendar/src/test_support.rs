//! Minimal solutions shared by the unit tests

use crate::error::{ParseError, SolveError};
use crate::solver::{AocParser, Solver};

/// Parses one integer per line and answers part 1 with their sum
macro_rules! summing_solution {
    ($($name:ident),* $(,)?) => {
        $(
            pub struct $name;

            impl AocParser for $name {
                type SharedData<'a> = Vec<i64>;

                fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
                    input
                        .lines()
                        .map(|l| {
                            l.trim().parse().map_err(|_| {
                                ParseError::InvalidFormat(format!("not an integer: {l}"))
                            })
                        })
                        .collect()
                }
            }

            impl Solver for $name {
                const PARTS: u8 = 1;

                fn solve_part(
                    shared: &mut Self::SharedData<'_>,
                    part: u8,
                ) -> Result<String, SolveError> {
                    match part {
                        1 => Ok(shared.iter().sum::<i64>().to_string()),
                        _ => Err(SolveError::PartNotImplemented(part)),
                    }
                }
            }
        )*
    };
}

summing_solution!(Day01, Day03, Day03Fast, Helper, Sum);
