//! Configuration resolution from CLI args

use crate::cli::RunArgs;
use aoc_calendar::CalendarCoordinate;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default input directory
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

const DEFAULT_INPUT_DIR: &str = "~/.cache/aoc_solver/inputs";

/// Resolved configuration for `aoc run`
#[derive(Debug)]
pub struct RunConfig {
    /// Coordinate to run
    pub date: CalendarCoordinate,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Solution name filter (None = every solution at the coordinate)
    pub solution: Option<String>,
    /// Input file to feed every selected solution
    pub input_path: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl RunConfig {
    /// Build config from CLI args, reading `AOC_INPUT_DIR` from the environment
    pub fn from_args(args: RunArgs) -> Self {
        Self::from_args_with_env(args, std::env::var_os(INPUT_DIR_ENV).map(PathBuf::from))
    }

    fn from_args_with_env(args: RunArgs, env_input_dir: Option<PathBuf>) -> Self {
        let date = CalendarCoordinate::new(args.year, args.day);

        let input_path = match args.input {
            Some(path) => expand_tilde(&path),
            None => {
                let dir = args
                    .input_dir
                    .or(env_input_dir)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
                input_path(&expand_tilde(&dir), date)
            }
        };

        RunConfig {
            date,
            part_filter: args.part,
            solution: args.solution,
            input_path,
            quiet: args.quiet,
        }
    }
}

/// Input file for a coordinate: `{dir}/{year}_day{day:02}.txt`
pub fn input_path(dir: &Path, date: CalendarCoordinate) -> PathBuf {
    dir.join(format!("{}_day{:02}.txt", date.year, date.day))
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args() -> RunArgs {
        RunArgs {
            year: 2025,
            day: 1,
            part: None,
            solution: None,
            input: None,
            input_dir: None,
            quiet: false,
        }
    }

    #[test]
    fn test_input_path_format() {
        let path = input_path(Path::new("/inputs"), CalendarCoordinate::new(2024, 1));
        assert_eq!(path, PathBuf::from("/inputs/2024_day01.txt"));

        let path = input_path(Path::new("/inputs"), CalendarCoordinate::new(2023, 25));
        assert!(path.to_string_lossy().ends_with("2023_day25.txt"));
    }

    #[test]
    fn test_explicit_input_wins() {
        let args = RunArgs {
            input: Some(PathBuf::from("/tmp/custom.txt")),
            input_dir: Some(PathBuf::from("/ignored")),
            ..run_args()
        };

        let config = RunConfig::from_args_with_env(args, Some(PathBuf::from("/env")));

        assert_eq!(config.input_path, PathBuf::from("/tmp/custom.txt"));
    }

    #[test]
    fn test_input_dir_precedence() {
        let args = RunArgs {
            input_dir: Some(PathBuf::from("/flag")),
            ..run_args()
        };
        let config = RunConfig::from_args_with_env(args, Some(PathBuf::from("/env")));
        assert_eq!(config.input_path, PathBuf::from("/flag/2025_day01.txt"));

        let config = RunConfig::from_args_with_env(run_args(), Some(PathBuf::from("/env")));
        assert_eq!(config.input_path, PathBuf::from("/env/2025_day01.txt"));
    }

    #[test]
    fn test_default_input_dir_expands_home() {
        let config = RunConfig::from_args_with_env(run_args(), None);

        assert!(config.input_path.ends_with(".cache/aoc_solver/inputs/2025_day01.txt"));
        if dirs::home_dir().is_some() {
            assert!(!config.input_path.starts_with("~"));
        }
    }

    #[test]
    fn test_expand_tilde_leaves_other_paths() {
        assert_eq!(expand_tilde(Path::new("rel/path")), PathBuf::from("rel/path"));
        assert_eq!(expand_tilde(Path::new("/abs")), PathBuf::from("/abs"));
    }
}
