//! Explicit day overrides
//!
//! `#[day_override(N)]` on a `#[derive(PuzzleSolution)]` type stores `N` in the
//! plugin record. It wins over whatever the type name says.

use crate::naming::extract_day;
use crate::scanner::SolutionPlugin;

/// The day declared with `#[day_override(N)]`, if any.
pub fn resolve_override(plugin: &SolutionPlugin) -> Option<u32> {
    plugin.day_override
}

/// Day for a discovered solution: the override when present, otherwise the
/// first digit run of the simple type name.
pub(crate) fn resolve_day(plugin: &SolutionPlugin, simple_name: &str) -> Option<u32> {
    let mut day = extract_day(simple_name);
    if let Some(forced) = resolve_override(plugin) {
        day = Some(forced);
    }
    day
}
