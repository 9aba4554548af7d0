aoc_calendar::calendar!(2024);

pub mod day_01;
