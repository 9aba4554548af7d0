//! Calendar discovery
//!
//! A module becomes a calendar group with [`calendar!`](crate::calendar), and a
//! type becomes a discoverable solution with `#[derive(PuzzleSolution)]`. Both
//! submit a record to a link-time [`inventory`] collection; the scanner pairs
//! each solution with the calendar group whose module contains it.

use crate::error::RegistrationError;
use crate::registry::SolutionType;
use tracing::warn;

/// A module declared as holding the solutions of one year.
///
/// Submitted by [`calendar!`](crate::calendar):
///
/// ```ignore
/// mod year_2025 {
///     aoc_calendar::calendar!(2025);
///
///     mod day_01;
///     mod day_02;
/// }
/// ```
#[derive(Debug)]
pub struct CalendarGroup {
    /// The Advent of Code year of every solution below this module
    pub year: u16,
    /// `module_path!()` of the declaring module
    pub module_path: &'static str,
}

inventory::collect!(CalendarGroup);

/// Registration record for one solution type.
///
/// Submitted by `#[derive(PuzzleSolution)]`; can also be submitted by hand:
///
/// ```ignore
/// aoc_calendar::inventory::submit! {
///     aoc_calendar::SolutionPlugin {
///         module_path: module_path!(),
///         day_override: Some(12),
///         solution_type: aoc_calendar::SolutionType::of::<Knots>,
///     }
/// }
/// ```
#[derive(Debug)]
pub struct SolutionPlugin {
    /// `module_path!()` where the type is declared
    pub module_path: &'static str,
    /// Explicit day, taking precedence over the type name
    pub day_override: Option<u32>,
    /// Identity of the solution type
    pub solution_type: fn() -> SolutionType,
}

impl SolutionPlugin {
    pub fn solution_type(&self) -> SolutionType {
        (self.solution_type)()
    }
}

inventory::collect!(SolutionPlugin);

/// Declare the enclosing module as the calendar group for `year`.
///
/// Every `#[derive(PuzzleSolution)]` type in this module or below it is
/// registered under `year`, unless a nested module declares its own calendar.
#[macro_export]
macro_rules! calendar {
    ($year:expr $(,)?) => {
        $crate::inventory::submit! {
            $crate::CalendarGroup {
                year: $year,
                module_path: ::core::module_path!(),
            }
        }
    };
}

/// A calendar group together with the solutions it claimed
#[derive(Debug)]
pub struct ScannedGroup<'a> {
    pub group: &'a CalendarGroup,
    pub solutions: Vec<&'a SolutionPlugin>,
}

impl ScannedGroup<'_> {
    pub fn year(&self) -> u16 {
        self.group.year
    }
}

/// Matches solution plugins to calendar groups.
pub struct Scanner<'a> {
    groups: Vec<&'a CalendarGroup>,
    plugins: Vec<&'a SolutionPlugin>,
}

impl Scanner<'static> {
    /// Scanner over everything submitted via `calendar!` and
    /// `#[derive(PuzzleSolution)]` in the linked binary.
    pub fn from_inventory() -> Self {
        Self::new(
            inventory::iter::<CalendarGroup>(),
            inventory::iter::<SolutionPlugin>(),
        )
    }
}

impl<'a> Scanner<'a> {
    pub fn new<G, P>(groups: G, plugins: P) -> Self
    where
        G: IntoIterator<Item = &'a CalendarGroup>,
        P: IntoIterator<Item = &'a SolutionPlugin>,
    {
        Self {
            groups: groups.into_iter().collect(),
            plugins: plugins.into_iter().collect(),
        }
    }

    /// Pair every solution with the innermost calendar group containing it.
    ///
    /// Solutions outside every group are skipped with a warning. Two groups
    /// declared in the same module are an error.
    pub fn scan_all(&self) -> Result<Vec<ScannedGroup<'a>>, RegistrationError> {
        let mut scanned: Vec<ScannedGroup<'a>> = Vec::with_capacity(self.groups.len());

        for &group in &self.groups {
            if let Some(existing) = scanned
                .iter()
                .find(|s| s.group.module_path == group.module_path)
            {
                return Err(RegistrationError::DuplicateCalendar {
                    module_path: group.module_path.to_string(),
                    first: existing.group.year,
                    second: group.year,
                });
            }
            scanned.push(ScannedGroup {
                group,
                solutions: Vec::new(),
            });
        }

        for &plugin in &self.plugins {
            let owner = scanned
                .iter_mut()
                .filter(|s| in_scope(s.group.module_path, plugin.module_path))
                .max_by_key(|s| s.group.module_path.len());

            match owner {
                Some(owner) => owner.solutions.push(plugin),
                None => warn!(
                    solution = plugin.solution_type().type_name(),
                    module = plugin.module_path,
                    "solution is not inside any calendar module, skipping"
                ),
            }
        }

        Ok(scanned)
    }
}

/// `module_path` is `group_path` itself or one of its descendants.
fn in_scope(group_path: &str, module_path: &str) -> bool {
    module_path
        .strip_prefix(group_path)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}
