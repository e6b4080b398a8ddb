//! Strict calendar validation on top of the permissive parser.

use crate::civil::{days_in_month, CivilDateTime, MONTH_NAMES};
use crate::error::EngineError;
use crate::parse::parse_date;

/// Parse `text`, then reject values the grammar admits but the calendar
/// does not: a day past the end of its month, or an hour token outside
/// 1–12 (which leaves a 24-hour field above 23).
///
/// [`parse_date`] itself stays permissive by policy; callers that need a
/// real calendar instant use this instead.
///
/// # Errors
///
/// Everything `parse_date` returns, plus
/// [`EngineError::InvalidDate`] for calendar-impossible values.
pub fn validate_date(text: &str) -> Result<CivilDateTime, EngineError> {
    let dt = parse_date(text)?;

    if dt.hour > 23 {
        return Err(EngineError::InvalidDate(format!(
            "hour {} is out of range for a 24-hour clock",
            dt.hour
        )));
    }

    let len = days_in_month(dt.year, dt.month);
    if dt.day > len {
        return Err(EngineError::InvalidDate(format!(
            "{} {} has only {} days, got day {}",
            MONTH_NAMES[usize::from(dt.month) % 12],
            dt.year,
            len,
            dt.day
        )));
    }

    Ok(dt)
}
