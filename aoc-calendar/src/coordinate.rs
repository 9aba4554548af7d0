//! Calendar coordinates

use std::fmt;

/// A (year, day) pair identifying one puzzle slot.
///
/// Ordering is by year, then day. The core enforces no bounds; a day of `0`
/// or `300` is a valid coordinate as far as the registry is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarCoordinate {
    /// The Advent of Code year
    pub year: u16,
    /// The day number
    pub day: u32,
}

impl CalendarCoordinate {
    pub const fn new(year: u16, day: u32) -> Self {
        Self { year, day }
    }
}

impl From<(u16, u32)> for CalendarCoordinate {
    fn from((year, day): (u16, u32)) -> Self {
        Self::new(year, day)
    }
}

impl fmt::Display for CalendarCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}
