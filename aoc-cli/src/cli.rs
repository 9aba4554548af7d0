//! CLI argument parsing using clap

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code solution calendar
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "List and run registered Advent of Code solutions", version)]
pub struct Args {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered solutions
    List {
        /// Only list this year
        #[arg(short, long)]
        year: Option<u16>,
    },
    /// Run the solutions registered for one day
    Run(RunArgs),
}

#[derive(ClapArgs, Debug)]
pub struct RunArgs {
    /// Year to run
    #[arg(short, long)]
    pub year: u16,

    /// Day to run
    #[arg(short, long)]
    pub day: u32,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub part: Option<u8>,

    /// Only run the solution with this type name (e.g. Day01Clicks)
    #[arg(short, long)]
    pub solution: Option<String>,

    /// Puzzle input file (defaults to {input_dir}/{year}_day{day:02}.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding puzzle inputs [env: AOC_INPUT_DIR] [default: ~/.cache/aoc_solver/inputs]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
