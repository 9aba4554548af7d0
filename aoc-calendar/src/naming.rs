//! Day extraction from solution type names
//!
//! Solutions embed their day in the type name (`Day7`, `Day07`, `Solution07`),
//! so most types need no metadata at all.

/// Extract the day number from a type's simple name.
///
/// Returns the first maximal run of ASCII digits with leading zeros stripped,
/// or `None` when the name has no digits. A run too large for `u32` also
/// yields `None`.
///
/// ```
/// use aoc_calendar::extract_day;
///
/// assert_eq!(extract_day("Day07"), Some(7));
/// assert_eq!(extract_day("Solution123Part2"), Some(123));
/// assert_eq!(extract_day("NoDigitsHere"), None);
/// ```
pub fn extract_day(name: &str) -> Option<u32> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let rest = &name[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest[..end].trim_start_matches('0');

    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

/// Strip the module path and generic arguments from a `std::any::type_name`.
///
/// `aoc_solutions::year_2025::Day07` becomes `Day07`, so the year in the module
/// path never leaks into day extraction.
pub fn simple_type_name(type_name: &str) -> &str {
    let base = type_name
        .find('<')
        .map_or(type_name, |generics| &type_name[..generics]);
    base.rsplit("::").next().unwrap_or(base)
}
