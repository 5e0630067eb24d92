//! Conversion between Buddhist Era (B.E.) and Gregorian (C.E.) years.
//!
//! Thai statutes are dated in B.E.; international readers cite C.E.
//! The two differ by a fixed [`ERA_OFFSET`].

use chrono::Datelike;

use crate::config::ERA_OFFSET;

/// Convert a B.E. year to C.E.
///
/// # Examples
/// ```
/// use lexthai_citation::calendar::to_western;
///
/// assert_eq!(to_western(2562), 2019);
/// ```
#[must_use]
pub const fn to_western(era_year: i32) -> i32 {
    era_year - ERA_OFFSET
}

/// Convert a C.E. year to B.E.
///
/// # Examples
/// ```
/// use lexthai_citation::calendar::to_era;
///
/// assert_eq!(to_era(2019), 2562);
/// ```
#[must_use]
pub const fn to_era(western_year: i32) -> i32 {
    western_year + ERA_OFFSET
}

/// The current year in B.E., according to the local clock.
#[must_use]
pub fn current_era_year() -> i32 {
    to_era(chrono::Local::now().year())
}
