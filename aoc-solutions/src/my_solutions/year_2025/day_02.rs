use aoc_calendar::{AocParser, AocSolver, ParseError, PartSolver, PuzzleSolution, SolveError};
use std::ops::RangeInclusive;

/// Product ID ranges; the invalid IDs are digit blocks repeated
#[derive(AocSolver, PuzzleSolution)]
#[aoc_solver(max_parts = 2)]
#[day_override(2)]
pub struct GiftShop;

impl AocParser for GiftShop {
    type SharedData<'a> = Vec<RangeInclusive<u64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|range| {
                let (start, end) = range.trim().split_once('-').ok_or_else(|| {
                    ParseError::InvalidFormat(format!("expected `start-end`, got `{range}`"))
                })?;
                let parse = |id: &str| {
                    id.parse::<u64>()
                        .map_err(|e| ParseError::InvalidFormat(format!("bad id `{id}`: {e}")))
                };
                Ok(parse(start)?..=parse(end)?)
            })
            .collect()
    }
}

impl PartSolver<1> for GiftShop {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid(shared, |id| repeated_exactly_twice(&id.to_string())).to_string())
    }
}

impl PartSolver<2> for GiftShop {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid(shared, |id| repeated_at_least_twice(&id.to_string())).to_string())
    }
}

fn sum_invalid(ranges: &[RangeInclusive<u64>], is_invalid: impl Fn(u64) -> bool) -> u64 {
    ranges
        .iter()
        .flat_map(|range| range.clone())
        .filter(|&id| is_invalid(id))
        .sum()
}

fn repeated_exactly_twice(digits: &str) -> bool {
    let len = digits.len();
    len % 2 == 0 && digits[..len / 2] == digits[len / 2..]
}

fn repeated_at_least_twice(digits: &str) -> bool {
    let len = digits.len();
    let bytes = digits.as_bytes();
    (1..=len / 2)
        .filter(|block| len % block == 0)
        .any(|block| bytes.chunks(block).all(|chunk| chunk == &bytes[..block]))
}
