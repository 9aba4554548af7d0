//! AOC CLI - Command-line interface for the Advent of Code solution calendar

mod cli;
mod config;
mod error;
mod output;
mod runner;

// Import aoc-solutions to link the solution plugins
use aoc_solutions as _;

use aoc_calendar::SolutionRegistry;
use clap::Parser;
use cli::{Args, Command};
use config::RunConfig;
use error::CliError;
use output::OutputFormatter;
use std::env;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose log level follows `--log-level` when RUST_LOG is unset
const LOG_TARGETS: [&str; 3] = ["aoc_cli", "aoc_calendar", "aoc_solutions"];

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(log_level: &str) {
    let level = parse_level(log_level);
    let mut filter = EnvFilter::from_default_env();

    if env::var("RUST_LOG").is_err() {
        for target in LOG_TARGETS {
            if let Ok(directive) = format!("{}={}", target, level).parse() {
                filter = filter.add_directive(directive);
            }
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = SolutionRegistry::try_get().map_err(|e| CliError::Registration(e.clone()))?;

    match args.command {
        Command::List { year } => {
            output::print_calendar(registry, year);
            Ok(())
        }
        Command::Run(run_args) => {
            let config = RunConfig::from_args(run_args);
            let results = runner::run(registry, &config)?;

            let formatter = OutputFormatter::new(config.quiet);
            for result in &results {
                formatter.print_result(result);
            }
            formatter.print_summary(&results);
            runner::check_failures(&results)
        }
    }
}
