use anyhow::anyhow;
use aoc_calendar::{AocParser, AocSolver, ParseError, PartSolver, PuzzleSolution, SolveError};
use std::str::FromStr;

const DIAL_SIZE: i32 = 100;
const DIAL_START: i32 = 50;

/// Counts zeros arithmetically, one step per rotation
#[derive(AocSolver, PuzzleSolution)]
#[aoc_solver(max_parts = 2)]
pub struct Day01;

/// Turns the dial one click at a time; kept as a cross-check for `Day01`
#[derive(AocSolver, PuzzleSolution)]
#[aoc_solver(max_parts = 2)]
pub struct Day01Clicks;

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<i32>,
    common_result: Option<CommonResult>,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonResult {
    zero_counts: u64,
    pass_zero_counts: u64,
}

fn parse_rotations(input: &str) -> Result<SharedData, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::MissingData("no rotations in input".to_string()));
    }

    input
        .trim()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            parse_rotation(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|rotations| SharedData {
            rotations,
            common_result: None,
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

fn parse_rotation(line: &str) -> Result<i32, anyhow::Error> {
    let negative = match line.as_bytes().first() {
        Some(b'L') => true,
        Some(b'R') => false,
        _ => return Err(anyhow!("first character need to be 'L' or 'R'")),
    };

    let val = <i32 as FromStr>::from_str(&line[1..])?;
    if val < 0 {
        Err(anyhow!("Rotate value must be non negative"))
    } else if negative {
        Ok(-val)
    } else {
        Ok(val)
    }
}

impl AocParser for Day01 {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_rotations(input)
    }
}

impl PartSolver<1> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_once(shared, rotate_arithmetic).zero_counts.to_string())
    }
}

impl PartSolver<2> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_once(shared, rotate_arithmetic).pass_zero_counts.to_string())
    }
}

impl AocParser for Day01Clicks {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_rotations(input)
    }
}

impl PartSolver<1> for Day01Clicks {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_once(shared, rotate_clicks).zero_counts.to_string())
    }
}

impl PartSolver<2> for Day01Clicks {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_once(shared, rotate_clicks).pass_zero_counts.to_string())
    }
}

/// Apply one rotation; returns the new dial position and how often it passed 0
type Rotate = fn(i32, i32) -> (i32, u64);

fn count_once(shared: &mut SharedData, rotate: Rotate) -> CommonResult {
    *shared.common_result.get_or_insert_with(|| {
        let (_, zero_counts, pass_zero_counts) = shared.rotations.iter().fold(
            (DIAL_START, 0u64, 0u64),
            |(dial, zero_counts, pass_zero_counts), &rotation| {
                let (dial, passed) = rotate(dial, rotation);
                (
                    dial,
                    zero_counts + u64::from(dial == 0),
                    pass_zero_counts + passed,
                )
            },
        );

        CommonResult {
            zero_counts,
            pass_zero_counts,
        }
    })
}

fn rotate_arithmetic(dial: i32, rotation: i32) -> (i32, u64) {
    // i64: a full i32 rotation on top of the dial position must not overflow
    let moved = i64::from(dial) + i64::from(rotation);
    let size = i64::from(DIAL_SIZE);
    let mut passed = (moved / size).unsigned_abs();
    if moved <= 0 && dial != 0 {
        passed += 1;
    }
    // rem_euclid of a positive size is in 0..DIAL_SIZE
    (moved.rem_euclid(size) as i32, passed)
}

fn rotate_clicks(dial: i32, rotation: i32) -> (i32, u64) {
    let step = rotation.signum();
    (0..rotation.unsigned_abs()).fold((dial, 0), |(dial, passed), _| {
        let dial = (dial + step).rem_euclid(DIAL_SIZE);
        (dial, passed + u64::from(dial == 0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_calendar::{CalendarCoordinate, SolutionRegistry, Solver};
    use proptest::prelude::*;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82";

    #[test]
    fn test_example() {
        let mut shared = Day01::parse(EXAMPLE).unwrap();
        assert_eq!(Day01::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Day01::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_example_clicks() {
        let mut shared = Day01Clicks::parse(EXAMPLE).unwrap();
        assert_eq!(Day01Clicks::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Day01Clicks::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_parse_rejects_bad_direction() {
        let err = Day01::parse("R10\nX5").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(Day01::parse("  \n"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_largest_rotation_does_not_overflow() {
        assert_eq!(rotate_arithmetic(50, i32::MAX), (97, 21_474_836));
        assert_eq!(rotate_arithmetic(99, i32::MAX), (46, 21_474_837));
        assert_eq!(rotate_arithmetic(50, -i32::MAX), (3, 21_474_836));

        let mut shared = Day01::parse("R2147483647\nL2147483647").unwrap();
        assert_eq!(Day01::solve_part(&mut shared, 1).unwrap(), "0");
        assert_eq!(Day01::solve_part(&mut shared, 2).unwrap(), "42949672");
    }

    #[test]
    fn test_both_variants_registered_for_day_one() {
        let registry = SolutionRegistry::get();
        let names: Vec<_> = registry
            .solutions_at(CalendarCoordinate::new(2025, 1))
            .iter()
            .map(|e| e.solution_type.name())
            .collect();

        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Day01"));
        assert!(names.contains(&"Day01Clicks"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// *For any* rotation, the arithmetic count matches clicking through it.
        #[test]
        fn prop_arithmetic_matches_clicks(dial in 0i32..100, rotation in -450i32..450) {
            prop_assert_eq!(rotate_arithmetic(dial, rotation), rotate_clicks(dial, rotation));
        }
    }
}
