//! Runs the solutions registered at one coordinate

use crate::config::RunConfig;
use crate::error::CliError;
use aoc_calendar::{
    CalendarCoordinate, RegistrationEntry, SolutionRegistry, SolveError, SolverError,
};
use chrono::TimeDelta;
use std::fs;
use tracing::{debug, info};

/// Outcome of one solution part
#[derive(Debug)]
pub struct SolverResult {
    pub date: CalendarCoordinate,
    pub solution: &'static str,
    pub part: u8,
    pub answer: Result<String, SolveError>,
    /// Only set on the first part of each solution (parse happens once)
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Entries at the configured coordinate, narrowed by `--solution`
pub fn select_entries<'r>(
    registry: &'r SolutionRegistry,
    config: &RunConfig,
) -> Result<Vec<&'r RegistrationEntry>, CliError> {
    let entries = registry.solutions_at(config.date);
    if entries.is_empty() {
        return Err(SolverError::NotFound(config.date).into());
    }

    match &config.solution {
        None => Ok(entries.iter().collect()),
        Some(name) => {
            let selected: Vec<_> = entries
                .iter()
                .filter(|e| e.solution_type.name() == name)
                .collect();
            if selected.is_empty() {
                return Err(CliError::UnknownSolution {
                    name: name.clone(),
                    date: config.date,
                });
            }
            Ok(selected)
        }
    }
}

/// Parse the input once per selected solution and solve each requested part.
///
/// Part failures are reported in the results; parse failures abort the run.
pub fn run(registry: &SolutionRegistry, config: &RunConfig) -> Result<Vec<SolverResult>, CliError> {
    let entries = select_entries(registry, config)?;

    let input = fs::read_to_string(&config.input_path).map_err(|source| CliError::Input {
        path: config.input_path.clone(),
        source,
    })?;
    debug!(path = %config.input_path.display(), bytes = input.len(), "read puzzle input");

    let mut results = Vec::new();
    for entry in entries {
        let solution = entry.solution_type.name();
        info!(date = %entry.date, solution, "running solution");

        let mut solver = entry.create_solver(&input)?;
        let mut parse_duration = Some(solver.parse_duration());
        let parts = match config.part_filter {
            Some(part) => part..=part,
            None => 1..=solver.parts(),
        };

        for part in parts {
            let (answer, solve_duration) = match solver.solve(part) {
                Ok(result) => {
                    let duration = result.duration();
                    (Ok(result.answer), duration)
                }
                Err(err) => (Err(err), TimeDelta::zero()),
            };
            results.push(SolverResult {
                date: entry.date,
                solution,
                part,
                answer,
                parse_duration: parse_duration.take(),
                solve_duration,
            });
        }
    }
    Ok(results)
}

/// Fail the run when any part reported an error
pub fn check_failures(results: &[SolverResult]) -> Result<(), CliError> {
    let failed = results.iter().filter(|r| r.answer.is_err()).count();
    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::PartsFailed {
            failed,
            total: results.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_calendar::{AocParser, AocSolver, ParseError, PartSolver, SolutionType, Solver};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Day05;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 1)]
    struct Day05Alt;

    impl AocParser for Day05 {
        type SharedData<'a> = Vec<u32>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .split_whitespace()
                .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
                .collect()
        }
    }

    impl PartSolver<1> for Day05 {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().max().copied().unwrap_or_default().to_string())
        }
    }

    impl PartSolver<2> for Day05 {
        fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Err(SolveError::SolveFailed("not solved yet".into()))
        }
    }

    impl AocParser for Day05Alt {
        type SharedData<'a> = &'a str;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            Ok(input)
        }
    }

    impl PartSolver<1> for Day05Alt {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.split_whitespace().count().to_string())
        }
    }

    const DATE: CalendarCoordinate = CalendarCoordinate::new(2020, 5);

    fn registry() -> SolutionRegistry {
        let mut registry = SolutionRegistry::new();
        registry.register(DATE, SolutionType::of::<Day05>()).unwrap();
        registry.register(DATE, SolutionType::of::<Day05Alt>()).unwrap();
        registry
    }

    fn config(input_path: PathBuf) -> RunConfig {
        RunConfig {
            date: DATE,
            part_filter: None,
            solution: None,
            input_path,
            quiet: true,
        }
    }

    fn input_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_runs_every_solution_and_part() {
        let file = input_file("3 9 4");
        let results = run(&registry(), &config(file.path().to_path_buf())).unwrap();

        let summary: Vec<_> = results
            .iter()
            .map(|r| (r.solution, r.part, r.answer.as_ref().ok().cloned()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Day05", 1, Some("9".to_string())),
                ("Day05", 2, None),
                ("Day05Alt", 1, Some("3".to_string())),
            ]
        );
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_failed_part_fails_the_run() {
        let file = input_file("3 9 4");
        let results = run(&registry(), &config(file.path().to_path_buf())).unwrap();

        assert!(matches!(
            check_failures(&results),
            Err(CliError::PartsFailed { failed: 1, total: 3 })
        ));
    }

    #[test]
    fn test_out_of_range_part_fails_the_run() {
        let file = input_file("1 2");
        let config = RunConfig {
            part_filter: Some(3),
            solution: Some("Day05".to_string()),
            ..config(file.path().to_path_buf())
        };

        let results = run(&registry(), &config).unwrap();

        assert!(matches!(results[0].answer, Err(SolveError::PartOutOfRange(3))));
        assert!(matches!(
            check_failures(&results),
            Err(CliError::PartsFailed { failed: 1, total: 1 })
        ));
    }

    #[test]
    fn test_all_parts_solved_passes() {
        let file = input_file("1 2");
        let config = RunConfig {
            part_filter: Some(1),
            ..config(file.path().to_path_buf())
        };

        let results = run(&registry(), &config).unwrap();

        assert_eq!(results.len(), 2);
        assert!(check_failures(&results).is_ok());
    }

    #[test]
    fn test_part_and_solution_filters() {
        let file = input_file("1 2");
        let config = RunConfig {
            part_filter: Some(1),
            solution: Some("Day05".to_string()),
            ..config(file.path().to_path_buf())
        };

        let results = run(&registry(), &config).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].answer.as_deref().ok(), Some("2"));
    }

    #[test]
    fn test_unknown_coordinate_is_not_found() {
        let config = RunConfig {
            date: CalendarCoordinate::new(2020, 6),
            ..config(PathBuf::from("/nonexistent"))
        };

        let err = run(&registry(), &config).unwrap_err();

        assert!(matches!(err, CliError::Solver(SolverError::NotFound(d)) if d.day == 6));
    }

    #[test]
    fn test_unknown_solution_name() {
        let config = RunConfig {
            solution: Some("Day05Fast".to_string()),
            ..config(PathBuf::from("/nonexistent"))
        };

        assert!(matches!(
            select_entries(&registry(), &config),
            Err(CliError::UnknownSolution { .. })
        ));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&registry(), &config(dir.path().join("missing.txt"))).unwrap_err();

        assert!(matches!(err, CliError::Input { .. }));
    }

    #[test]
    fn test_parse_failure_aborts() {
        let file = input_file("3 x");
        let err = run(&registry(), &config(file.path().to_path_buf())).unwrap_err();

        assert!(matches!(err, CliError::Solver(SolverError::ParseError(_))));
        assert_eq!(Day05::PARTS, 2);
    }
}
