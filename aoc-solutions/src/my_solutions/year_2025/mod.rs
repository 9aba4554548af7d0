aoc_calendar::calendar!(2025);

pub mod day_01;
pub mod day_02;
