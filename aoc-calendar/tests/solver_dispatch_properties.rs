//! Property-based tests for the part dispatch generated by `#[derive(AocSolver)]`
//! and the range check in `SolverExt`

use aoc_calendar::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

#[derive(Debug)]
struct Readings {
    depths: Vec<i32>,
    increases: Option<usize>,
}

/// Part 1 caches its count so part 2 can reuse it
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SonarSweep;

impl AocParser for SonarSweep {
    type SharedData<'a> = Readings;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let depths = input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad depth: {l}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(Readings {
            depths,
            increases: None,
        })
    }
}

impl PartSolver<1> for SonarSweep {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let increases = shared.depths.windows(2).filter(|w| w[1] > w[0]).count();
        shared.increases = Some(increases);
        Ok(increases.to_string())
    }
}

impl PartSolver<2> for SonarSweep {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let increases = shared.increases.ok_or_else(|| {
            SolveError::SolveFailed("part 1 has not run yet".into())
        })?;
        Ok((increases * 2).to_string())
    }
}

/// Zero-copy shared data borrowed from the input
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct LongestLine;

impl AocParser for LongestLine {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for LongestLine {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max_by_key(|line| line.len())
            .map(|line| line.to_string())
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))
    }
}

fn depths_input(depths: &[i32]) -> String {
    depths
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* part in 1..=max_parts, `Solver::solve_part` gives the same
    /// answer as calling `PartSolver<N>` directly.
    #[test]
    fn prop_dispatch_matches_part_solver(depths in prop::collection::vec(0i32..1000, 2..20)) {
        let input = depths_input(&depths);
        let mut via_solver = SonarSweep::parse(&input).unwrap();
        let mut direct = SonarSweep::parse(&input).unwrap();

        let dispatched = SonarSweep::solve_part(&mut via_solver, 1).unwrap();
        let expected = <SonarSweep as PartSolver<1>>::solve(&mut direct).unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    /// *For any* part outside 1..=max_parts, the generated dispatch rejects it
    /// with `PartNotImplemented`.
    #[test]
    fn prop_unknown_part_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SonarSweep::parse("1\n2").unwrap();

        match SonarSweep::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    /// *For any* part outside 1..=PARTS, the checked call never reaches the
    /// dispatch and reports `PartOutOfRange`.
    #[test]
    fn prop_checked_range_rejects_out_of_range(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SonarSweep::parse("1\n2").unwrap();

        match SonarSweep::solve_part_checked_range(&mut shared, part) {
            Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
        }
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(SonarSweep::PARTS, 2);
    assert_eq!(LongestLine::PARTS, 1);
}

#[test]
fn test_mutation_is_visible_to_later_parts() {
    let mut shared = SonarSweep::parse("199\n200\n208\n210\n200\n207").unwrap();

    assert_eq!(SonarSweep::solve_part(&mut shared, 1).unwrap(), "4");
    assert_eq!(shared.increases, Some(4));
    assert_eq!(SonarSweep::solve_part(&mut shared, 2).unwrap(), "8");
}

#[test]
fn test_borrowed_shared_data() {
    let input = String::from("a\nlongest\nmid");
    let mut shared = LongestLine::parse(&input).unwrap();

    assert_eq!(LongestLine::solve_part_checked_range(&mut shared, 1).unwrap(), "longest");
}

#[test]
fn test_parse_error_surfaces() {
    assert!(matches!(
        SonarSweep::parse("12\nabc"),
        Err(ParseError::InvalidFormat(msg)) if msg.contains("abc")
    ));
}
