//! # chronomaster-engine
//!
//! Deterministic civil date computation.
//!
//! Parses date strings in one fixed grammar (`March 6 2009 7:30pm EST`),
//! adds signed whole-hour offsets with calendar-correct rollover, converts
//! between six fixed-offset timezone codes, and renders values back to the
//! same grammar.
//!
//! ## Modules
//!
//! - [`timezone`] — the fixed label → UTC-offset-hours table
//! - [`civil`] — the [`CivilDateTime`] value type and Gregorian helpers
//! - [`parse`] — fixed-grammar string → `CivilDateTime`
//! - [`arith`] — hour addition and timezone conversion
//! - [`format`] — `CivilDateTime` → canonical string
//! - [`validate`] — strict calendar validation over the permissive parser
//! - [`error`] — error types
//!
//! ## Design Principle
//!
//! Every operation is a pure function from explicit inputs to an output or
//! an error: no system clock, no I/O, no cross-call state. Concurrency,
//! retries, and any wire protocol belong to the caller.
//!
//! The timezone model is deliberately a flat six-entry offset table, not a
//! timezone database — no DST, no historical rules.

pub mod arith;
pub mod civil;
pub mod error;
pub mod format;
pub mod parse;
pub mod timezone;
pub mod validate;

pub use arith::{add_hours, convert_timezone, convert_timezone_str};
pub use civil::CivilDateTime;
pub use error::EngineError;
pub use format::format_date;
pub use parse::parse_date;
pub use timezone::TimezoneLabel;
pub use validate::validate_date;
