//! Parser for the fixed date-string grammar.
//!
//! Grammar: `<MonthName> <Day> <Year> <Hour>:<Minute><am|pm> <TimezoneLabel>`,
//! tokens separated by runs of whitespace. Month names are the twelve full
//! English names, case-sensitive; the am/pm marker and the timezone code are
//! case-insensitive; tokens beyond the fifth are ignored.
//!
//! The parser is deliberately permissive on two points, as a named policy:
//! day 1–31 is accepted in every month (February 31 parses), and the hour
//! digits are not range-checked against 1–12. Calendar validity is the job
//! of [`validate_date`](crate::validate::validate_date), and arithmetic
//! normalizes any non-canonical value it is handed.

use crate::civil::{CivilDateTime, MONTH_NAMES};
use crate::error::EngineError;
use crate::timezone::TimezoneLabel;

/// Parse a date string into a [`CivilDateTime`].
///
/// On success the returned value echoes the trimmed input text in
/// `original`; the structured fields are authoritative for all downstream
/// computation.
///
/// # Errors
///
/// One error per failed stage, naming the offending token:
/// [`MalformedInput`](EngineError::MalformedInput) (fewer than 5 tokens),
/// [`InvalidMonth`](EngineError::InvalidMonth),
/// [`InvalidDay`](EngineError::InvalidDay),
/// [`InvalidYear`](EngineError::InvalidYear),
/// [`InvalidTime`](EngineError::InvalidTime), or
/// [`UnknownTimezone`](EngineError::UnknownTimezone).
/// No partial value is ever returned.
///
/// # Examples
///
/// ```
/// use date_engine::parse_date;
///
/// let dt = parse_date("March 6 2009 7:30pm EST").unwrap();
/// assert_eq!(dt.month, 2); // 0-indexed
/// assert_eq!(dt.hour, 19); // 24-hour clock
/// assert_eq!(dt.minute, 30);
/// ```
pub fn parse_date(text: &str) -> Result<CivilDateTime, EngineError> {
    let trimmed = text.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() < 5 {
        return Err(EngineError::MalformedInput(tokens.len()));
    }

    let month = month_index(tokens[0])?;
    let day = parse_day(tokens[1])?;
    let year = tokens[2]
        .parse::<i32>()
        .map_err(|_| EngineError::InvalidYear(tokens[2].to_string()))?;
    let (hour, minute) = parse_clock(tokens[3])?;
    let zone: TimezoneLabel = tokens[4].parse()?;

    Ok(CivilDateTime {
        year,
        month,
        day,
        hour,
        minute,
        zone,
        original: Some(trimmed.to_string()),
    })
}

/// Exact, case-sensitive match against the twelve full English names,
/// returning the 0-based index.
fn month_index(token: &str) -> Result<u8, EngineError> {
    MONTH_NAMES
        .iter()
        .position(|&name| name == token)
        .map(|i| i as u8)
        .ok_or_else(|| EngineError::InvalidMonth(token.to_string()))
}

/// Day of month, 1–31. Short months are not cross-checked here.
fn parse_day(token: &str) -> Result<u8, EngineError> {
    match token.parse::<u8>() {
        Ok(day) if (1..=31).contains(&day) => Ok(day),
        _ => Err(EngineError::InvalidDay(token.to_string())),
    }
}

/// Scan `<1-2 digits>:<exactly 2 digits><am|pm>` and convert to the
/// 24-hour clock: pm adds 12 unless the hour is 12; 12am becomes 0.
///
/// The hour digits are accepted unchecked; an hour token outside 1–12
/// yields a non-canonical 24-hour field that arithmetic later normalizes.
/// The minute must be 0–59.
fn parse_clock(token: &str) -> Result<(u8, u8), EngineError> {
    let invalid = || EngineError::InvalidTime(token.to_string());

    if token.len() < 2 || !token.is_ascii() {
        return Err(invalid());
    }
    let (clock, marker) = token.split_at(token.len() - 2);
    let pm = match marker.to_ascii_lowercase().as_str() {
        "am" => false,
        "pm" => true,
        _ => return Err(invalid()),
    };

    let (hour_digits, minute_digits) = clock.split_once(':').ok_or_else(invalid)?;
    if hour_digits.is_empty()
        || hour_digits.len() > 2
        || minute_digits.len() != 2
        || !hour_digits.bytes().all(|b| b.is_ascii_digit())
        || !minute_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let mut hour: u8 = hour_digits.parse().map_err(|_| invalid())?;
    let minute: u8 = minute_digits.parse().map_err(|_| invalid())?;
    if minute > 59 {
        return Err(invalid());
    }

    if pm && hour != 12 {
        hour += 12;
    } else if !pm && hour == 12 {
        hour = 0;
    }

    Ok((hour, minute))
}
