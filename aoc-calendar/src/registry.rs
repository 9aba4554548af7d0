//! The solution registry: built once from the calendar scan, queried by
//! coordinate or by solution type.

use crate::coordinate::CalendarCoordinate;
use crate::day_override::resolve_day;
use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::naming::simple_type_name;
use crate::scanner::Scanner;
use crate::solver::Solver;
use std::any::TypeId;
use std::collections::hash_map::{self, HashMap};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Factory that parses input into a boxed solver for a given coordinate
pub type SolverFactory =
    for<'a> fn(CalendarCoordinate, &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

/// All solutions of one year, keyed by day, in registration order per day
pub type SolutionCalendar = BTreeMap<u32, Vec<RegistrationEntry>>;

static EMPTY_CALENDAR: SolutionCalendar = BTreeMap::new();

static REGISTRY: OnceLock<Result<SolutionRegistry, RegistrationError>> = OnceLock::new();

/// Identity of a solution type.
///
/// Equality and hashing go through the [`TypeId`] only; the names are for
/// diagnostics and day extraction.
#[derive(Clone, Copy)]
pub struct SolutionType {
    id: TypeId,
    name: &'static str,
    type_name: &'static str,
    factory: SolverFactory,
}

impl SolutionType {
    pub fn of<S: Solver + 'static>() -> Self {
        let type_name = std::any::type_name::<S>();
        Self {
            id: TypeId::of::<S>(),
            name: simple_type_name(type_name),
            type_name,
            factory: instantiate::<S>,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Simple name, e.g. `Day07`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified name, e.g. `aoc_solutions::year_2025::day_07::Day07`
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Parse `input` and return a solver ready to run for `date`
    pub fn create_solver<'a>(
        &self,
        date: CalendarCoordinate,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        (self.factory)(date, input).map_err(SolverError::ParseError)
    }
}

fn instantiate<'a, S: Solver + 'static>(
    date: CalendarCoordinate,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    Ok(Box::new(SolverInstance::<S>::new(date, input)?))
}

impl PartialEq for SolutionType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SolutionType {}

impl Hash for SolutionType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SolutionType").field(&self.type_name).finish()
    }
}

/// Binds a solution type to the coordinate it resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationEntry {
    pub solution_type: SolutionType,
    pub date: CalendarCoordinate,
}

impl RegistrationEntry {
    pub fn create_solver<'a>(
        &self,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        self.solution_type.create_solver(self.date, input)
    }
}

/// Index of every discovered solution.
///
/// Two views are kept in lock-step: year → day → entries, and type → entry.
/// Each type appears at most once; a day may hold several entries (alternate
/// or benchmark implementations), in the order they were registered.
///
/// The process-wide instance comes from [`SolutionRegistry::get`]. Explicit
/// instances from [`SolutionRegistry::new`] or [`SolutionRegistry::from_scanner`]
/// can be extended with [`SolutionRegistry::register`].
///
/// ```
/// use aoc_calendar::{CalendarCoordinate, SolutionRegistry};
///
/// let registry = SolutionRegistry::new();
/// assert!(registry.solutions(2025, 1).is_empty());
/// assert!(registry.solutions_at(CalendarCoordinate::new(2025, 1)).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SolutionRegistry {
    calendar_years: BTreeMap<u16, SolutionCalendar>,
    by_type: HashMap<TypeId, RegistrationEntry>,
}

impl SolutionRegistry {
    /// An empty registry, for manual registration
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, built from the linked inventory on first use.
    ///
    /// Concurrent first callers wait for a single build; every call returns
    /// the same instance, or the same build error.
    pub fn try_get() -> Result<&'static Self, &'static RegistrationError> {
        REGISTRY.get_or_init(Self::discover).as_ref()
    }

    /// Like [`SolutionRegistry::try_get`], treating a failed build as fatal.
    ///
    /// # Panics
    ///
    /// Panics with the build error when a solution cannot be registered, for
    /// example a type whose name has no day and no `#[day_override]`.
    pub fn get() -> &'static Self {
        match Self::try_get() {
            Ok(registry) => registry,
            Err(err) => panic!("failed to build the solution registry: {err}"),
        }
    }

    /// Build a registry from every `calendar!` and `#[derive(PuzzleSolution)]`
    /// linked into the binary.
    pub fn discover() -> Result<Self, RegistrationError> {
        Self::from_scanner(&Scanner::from_inventory())
    }

    /// Build a registry from the groups and solutions a scanner yields.
    ///
    /// Each solution's day is its `#[day_override]` when present, otherwise the
    /// first digit run of its simple type name. A solution with neither, or a
    /// type seen twice, fails the whole build.
    pub fn from_scanner(scanner: &Scanner<'_>) -> Result<Self, RegistrationError> {
        let mut registry = Self::new();

        for scanned in scanner.scan_all()? {
            let year = scanned.year();
            for plugin in scanned.solutions {
                let solution_type = plugin.solution_type();
                let day = resolve_day(plugin, solution_type.name()).ok_or_else(|| {
                    RegistrationError::UnresolvableDay {
                        type_name: solution_type.type_name().to_string(),
                    }
                })?;

                registry.register(CalendarCoordinate::new(year, day), solution_type)?;
                debug!(
                    solution = solution_type.type_name(),
                    year,
                    day,
                    overridden = plugin.day_override.is_some(),
                    "registered solution"
                );
            }
        }

        info!(
            solutions = registry.len(),
            years = registry.calendar_years.len(),
            "solution registry built"
        );
        Ok(registry)
    }

    /// Register `solution_type` at `date` directly, bypassing day resolution.
    ///
    /// `date` is a [`CalendarCoordinate`] or a `(year, day)` tuple. A type that
    /// is already registered is rejected and the index is left unchanged.
    pub fn register(
        &mut self,
        date: impl Into<CalendarCoordinate>,
        solution_type: SolutionType,
    ) -> Result<(), RegistrationError> {
        let date = date.into();
        let entry = RegistrationEntry {
            solution_type,
            date,
        };

        match self.by_type.entry(solution_type.id()) {
            hash_map::Entry::Occupied(existing) => Err(RegistrationError::DuplicateType {
                type_name: solution_type.type_name().to_string(),
                existing: existing.get().date,
                attempted: date,
            }),
            hash_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                self.calendar_years
                    .entry(date.year)
                    .or_default()
                    .entry(date.day)
                    .or_default()
                    .push(entry);
                Ok(())
            }
        }
    }

    /// Every day of `year` with its solutions; empty for unknown years
    pub fn solution_calendar(&self, year: u16) -> &SolutionCalendar {
        self.calendar_years.get(&year).unwrap_or(&EMPTY_CALENDAR)
    }

    /// Solutions registered for `year`/`day`, in registration order.
    ///
    /// An empty slice means no solution exists for that day.
    pub fn solutions(&self, year: u16, day: u32) -> &[RegistrationEntry] {
        self.solution_calendar(year)
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn solutions_at(&self, date: CalendarCoordinate) -> &[RegistrationEntry] {
        self.solutions(date.year, date.day)
    }

    /// Registration of `solution_type`, if it was ever registered
    pub fn entry(&self, solution_type: &SolutionType) -> Option<&RegistrationEntry> {
        self.by_type.get(&solution_type.id())
    }

    pub fn entry_of<S: Solver + 'static>(&self) -> Option<&RegistrationEntry> {
        self.by_type.get(&TypeId::of::<S>())
    }

    /// Years with at least one registered solution, ascending
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.calendar_years.keys().copied()
    }

    /// All entries ordered by year and day, registration order within a day
    pub fn iter(&self) -> impl Iterator<Item = &RegistrationEntry> + '_ {
        self.calendar_years
            .values()
            .flat_map(|calendar| calendar.values().flatten())
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
