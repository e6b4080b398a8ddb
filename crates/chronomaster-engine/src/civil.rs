//! The civil date/time value type and Gregorian calendar helpers.

use serde::Serialize;

use crate::timezone::TimezoneLabel;

/// Full English month names, indexed by the 0-based month field.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A naive civil timestamp: a calendar date and wall-clock time with a
/// timezone label carried as metadata only.
///
/// Arithmetic on this type is calendar-relative (hours carry into days,
/// months, and years with real Gregorian month lengths), never true
/// UTC-instant arithmetic; the label shifts the value only during explicit
/// timezone conversion.
///
/// Values straight out of the parser may be non-canonical: the grammar
/// admits day 31 in every month and does not range-check the 12-hour hour
/// token, so `day` can point past the end of the month and `hour` can
/// exceed 23. [`add_hours`](crate::arith::add_hours) normalizes both.
#[derive(Debug, Clone, Serialize)]
pub struct CivilDateTime {
    pub year: i32,
    /// 0-indexed: January = 0, December = 11.
    pub month: u8,
    pub day: u8,
    /// 24-hour clock.
    pub hour: u8,
    pub minute: u8,
    pub zone: TimezoneLabel,
    /// The input text this value was parsed from, echoed for diagnostics.
    /// Arithmetic clears it; the structured fields are authoritative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

/// Equality over the structured fields only; the echoed `original` text is
/// diagnostics, not identity.
impl PartialEq for CivilDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.hour == other.hour
            && self.minute == other.minute
            && self.zone == other.zone
    }
}

impl Eq for CivilDateTime {}

/// Gregorian leap-year rule: divisible by 4, except centuries, unless also
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of the given 0-indexed month. `month` must be in 0–11.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    const LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 1 && is_leap_year(year) {
        29
    } else {
        LENGTHS[usize::from(month) % 12]
    }
}
