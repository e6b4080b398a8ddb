//! ChronoMaster command-line interface.
//!
//! A thin surface over the date engine: each subcommand runs one engine
//! operation and prints a JSON response on stdout. No state, no retries —
//! errors propagate straight to the exit status, except `validate`, which
//! reports invalidity as data.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use date_engine::{
    add_hours, convert_timezone_str, format_date, parse_date, validate_date, CivilDateTime,
};

#[derive(Parser)]
#[command(
    name = "chronomaster",
    version,
    about = "Civil date arithmetic on strings like \"March 6 2009 7:30pm EST\""
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add (or subtract) whole hours to a date string
    Add {
        /// Date string, e.g. "March 6 2009 7:30pm EST"
        date: String,
        /// Signed number of hours to add
        #[arg(long, allow_hyphen_values = true)]
        hours: i64,
    },
    /// Convert a date string to another supported timezone
    Convert {
        /// Date string, e.g. "March 6 2009 7:30pm EST"
        date: String,
        /// Target timezone code: EST, PST, CST, MST, UTC, or GMT
        #[arg(long = "to")]
        target: String,
    },
    /// Check whether a date string names a real calendar instant
    Validate {
        /// Date string to check
        date: String,
    },
}

#[derive(Serialize)]
struct AddResponse {
    original: String,
    result: String,
    hours_added: i64,
    timezone: String,
}

#[derive(Serialize)]
struct ConvertResponse {
    original: String,
    converted: String,
    source_timezone: String,
    target_timezone: String,
}

#[derive(Serialize)]
struct ValidateResponse {
    valid: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parsed: Option<CivilDateTime>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let json = match cli.command {
        Command::Add { date, hours } => {
            let dt = parse_date(&date)?;
            let shifted = add_hours(&dt, hours);
            serde_json::to_string_pretty(&AddResponse {
                original: date,
                result: format_date(&shifted),
                hours_added: hours,
                timezone: shifted.zone.to_string(),
            })?
        }
        Command::Convert { date, target } => {
            let dt = parse_date(&date)?;
            let converted = convert_timezone_str(&dt, &target)?;
            serde_json::to_string_pretty(&ConvertResponse {
                original: date,
                converted: format_date(&converted),
                source_timezone: dt.zone.to_string(),
                target_timezone: converted.zone.to_string(),
            })?
        }
        Command::Validate { date } => {
            let response = match validate_date(&date) {
                Ok(dt) => ValidateResponse {
                    valid: true,
                    message: "Date format is valid".to_string(),
                    parsed: Some(dt),
                },
                Err(err) => ValidateResponse {
                    valid: false,
                    message: err.to_string(),
                    parsed: None,
                },
            };
            serde_json::to_string_pretty(&response)?
        }
    };

    println!("{json}");
    Ok(())
}
