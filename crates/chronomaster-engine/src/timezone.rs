//! The fixed timezone table.
//!
//! Six short codes, each bound to a constant whole-hour UTC offset for the
//! process lifetime. This is a tag-plus-offset table, not a timezone
//! database.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::EngineError;

/// One of the six supported timezone codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimezoneLabel {
    Est,
    Pst,
    Cst,
    Mst,
    Utc,
    Gmt,
}

impl TimezoneLabel {
    /// Every supported label, in table order.
    pub const ALL: [TimezoneLabel; 6] = [
        TimezoneLabel::Est,
        TimezoneLabel::Pst,
        TimezoneLabel::Cst,
        TimezoneLabel::Mst,
        TimezoneLabel::Utc,
        TimezoneLabel::Gmt,
    ];

    /// The fixed UTC offset in whole hours.
    pub fn offset_hours(self) -> i64 {
        match self {
            TimezoneLabel::Est => -5,
            TimezoneLabel::Pst => -8,
            TimezoneLabel::Cst => -6,
            TimezoneLabel::Mst => -7,
            TimezoneLabel::Utc | TimezoneLabel::Gmt => 0,
        }
    }

    /// The canonical upper-case code.
    pub fn code(self) -> &'static str {
        match self {
            TimezoneLabel::Est => "EST",
            TimezoneLabel::Pst => "PST",
            TimezoneLabel::Cst => "CST",
            TimezoneLabel::Mst => "MST",
            TimezoneLabel::Utc => "UTC",
            TimezoneLabel::Gmt => "GMT",
        }
    }
}

impl FromStr for TimezoneLabel {
    type Err = EngineError;

    /// Case-insensitive lookup; the token is upper-cased before matching.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownTimezone`] for anything outside the
    /// six-code set.
    fn from_str(s: &str) -> Result<Self, EngineError> {
        match s.to_ascii_uppercase().as_str() {
            "EST" => Ok(TimezoneLabel::Est),
            "PST" => Ok(TimezoneLabel::Pst),
            "CST" => Ok(TimezoneLabel::Cst),
            "MST" => Ok(TimezoneLabel::Mst),
            "UTC" => Ok(TimezoneLabel::Utc),
            "GMT" => Ok(TimezoneLabel::Gmt),
            _ => Err(EngineError::UnknownTimezone(s.to_string())),
        }
    }
}

impl fmt::Display for TimezoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
