//! Canonical renderer for civil date/times.

use crate::civil::{CivilDateTime, MONTH_NAMES};

/// Render a [`CivilDateTime`] in the grammar the parser accepts:
/// `<MonthName> <Day> <Year> <Hour>:<Minute><am|pm> <TimezoneLabel>`.
///
/// Day and year are plain decimals; the hour is rendered on the 12-hour
/// clock (0 → `12am`, 12 → `12pm`); the minute is always two digits; the
/// marker is lower-case and glued to the minute; fields are joined by
/// single spaces.
///
/// Pure and total. The renderer is faithful: it does not normalize a
/// non-canonical value (that is [`add_hours`](crate::arith::add_hours)'s
/// job), so `format_date(&parse_date(s)?)` reproduces `s` exactly whenever
/// `s` was already canonical.
///
/// # Examples
///
/// ```
/// use date_engine::{format_date, parse_date};
///
/// let dt = parse_date("March 6 2009 7:30pm EST").unwrap();
/// assert_eq!(format_date(&dt), "March 6 2009 7:30pm EST");
/// ```
pub fn format_date(dt: &CivilDateTime) -> String {
    let (hour, marker) = to_12_hour(dt.hour);
    format!(
        "{} {} {} {}:{:02}{} {}",
        MONTH_NAMES[usize::from(dt.month) % 12],
        dt.day,
        dt.year,
        hour,
        dt.minute,
        marker,
        dt.zone,
    )
}

/// 24-hour field to 12-hour clock: midnight and noon both render as 12.
fn to_12_hour(hour: u8) -> (u8, &'static str) {
    match hour {
        0 => (12, "am"),
        12 => (12, "pm"),
        h if h > 12 => (h - 12, "pm"),
        h => (h, "am"),
    }
}
