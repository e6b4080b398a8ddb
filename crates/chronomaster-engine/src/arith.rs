//! Calendar-correct hour arithmetic and fixed-offset timezone conversion.

use crate::civil::{days_in_month, CivilDateTime};
use crate::error::EngineError;
use crate::timezone::TimezoneLabel;

/// Add `delta` hours (signed, any magnitude) to a civil timestamp.
///
/// The carry is calendar-relative: hours roll into days, days into months
/// with real Gregorian month lengths (including the leap-year rule), and
/// months into years, in both directions. The zone label rides along
/// unchanged — it is metadata here, never applied as an offset.
///
/// Total for any finite `delta`. A non-canonical input (February 31, a
/// 24-hour field past 23) normalizes forward during the carry pass, so
/// `add_hours(dt, 0)` canonicalizes a permissively parsed value.
///
/// # Examples
///
/// ```
/// use date_engine::{add_hours, format_date, parse_date};
///
/// let dt = parse_date("February 29 2004 9:15pm EST").unwrap();
/// assert_eq!(format_date(&add_hours(&dt, 12)), "March 1 2004 9:15am EST");
/// ```
pub fn add_hours(dt: &CivilDateTime, delta: i64) -> CivilDateTime {
    let total = i64::from(dt.hour) + delta;
    let hour = total.rem_euclid(24) as u8;
    let mut day = i64::from(dt.day) + total.div_euclid(24);

    let mut year = dt.year;
    let mut month = i64::from(dt.month);

    // Normalize the day against real month lengths, rolling the month and
    // year in whichever direction the carry went.
    loop {
        if day < 1 {
            month -= 1;
            if month < 0 {
                month = 11;
                year -= 1;
            }
            day += i64::from(days_in_month(year, month as u8));
        } else {
            let len = i64::from(days_in_month(year, month as u8));
            if day <= len {
                break;
            }
            day -= len;
            month += 1;
            if month > 11 {
                month = 0;
                year += 1;
            }
        }
    }

    CivilDateTime {
        year,
        month: month as u8,
        day: day as u8,
        hour,
        minute: dt.minute,
        zone: dt.zone,
        original: None,
    }
}

/// Convert a civil timestamp to another fixed-offset zone.
///
/// Shifts the civil time by `offset(target) - offset(source)` hours via
/// [`add_hours`], then rewrites the zone label to `target`. Infallible:
/// both labels are already members of the closed set by construction.
///
/// # Examples
///
/// ```
/// use date_engine::{convert_timezone, format_date, parse_date, TimezoneLabel};
///
/// let dt = parse_date("March 6 2009 7:30pm EST").unwrap();
/// let pst = convert_timezone(&dt, TimezoneLabel::Pst);
/// assert_eq!(format_date(&pst), "March 6 2009 4:30pm PST");
/// ```
pub fn convert_timezone(dt: &CivilDateTime, target: TimezoneLabel) -> CivilDateTime {
    let delta = target.offset_hours() - dt.zone.offset_hours();
    let mut shifted = add_hours(dt, delta);
    shifted.zone = target;
    shifted
}

/// [`convert_timezone`] for callers holding a raw zone token.
///
/// # Errors
///
/// Returns [`EngineError::UnknownTimezone`] if `target` is not one of the
/// six supported codes.
pub fn convert_timezone_str(
    dt: &CivilDateTime,
    target: &str,
) -> Result<CivilDateTime, EngineError> {
    Ok(convert_timezone(dt, target.parse()?))
}
