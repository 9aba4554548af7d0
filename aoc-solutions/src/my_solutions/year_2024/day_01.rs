use aoc_calendar::{AocParser, AocSolver, ParseError, PartSolver, PuzzleSolution, SolveError};
use std::collections::HashMap;

#[derive(AocSolver, PuzzleSolution)]
#[aoc_solver(max_parts = 2)]
pub struct Day01;

#[derive(Debug)]
pub struct LocationLists {
    left: Vec<u32>,
    right: Vec<u32>,
}

impl AocParser for Day01 {
    type SharedData<'a> = LocationLists;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (left, right) = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| {
                let mut ids = line.split_whitespace().map(str::parse::<u32>);
                match (ids.next(), ids.next(), ids.next()) {
                    (Some(Ok(l)), Some(Ok(r)), None) => Ok((l, r)),
                    _ => Err(ParseError::InvalidFormat(format!(
                        "(line {}) expected two location ids",
                        idx + 1
                    ))),
                }
            })
            .collect::<Result<(Vec<_>, Vec<_>), _>>()?;

        Ok(LocationLists { left, right })
    }
}

impl PartSolver<1> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.left.sort_unstable();
        shared.right.sort_unstable();
        let distance: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(&l, &r)| u64::from(l.abs_diff(r)))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<u32, u64> = HashMap::new();
        for &id in &shared.right {
            *counts.entry(id).or_default() += 1;
        }
        let similarity: u64 = shared
            .left
            .iter()
            .map(|&id| u64::from(id) * counts.get(&id).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}
