//! Input parsing for the interactive shell.
//!
//! One I/O function reads prompted lines; the parsers are pure so they
//! can be tested without a terminal.

use std::io::{self, BufRead, Write};

use crate::domain::{ClockTime, InvalidClockTime};

/// Why a line of input could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A field that must be numeric was not
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// A timetable entry was not a valid HHMM time
    #[error(transparent)]
    BadClockTime(#[from] InvalidClockTime),
}

/// Prints a prompt and reads one trimmed line from stdin.
///
/// A closed input stream is reported as `UnexpectedEof` so the menu loop
/// can wind down instead of spinning on empty reads.
pub fn prompt_line(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Splits a line into station names.
pub fn parse_station_list(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Parses a line of whitespace-separated minute values.
pub fn parse_minute_list(line: &str) -> Result<Vec<u32>, InputError> {
    line.split_whitespace()
        .map(|field| {
            field
                .parse()
                .map_err(|_| InputError::NotANumber(field.to_string()))
        })
        .collect()
}

/// Parses a line of whitespace-separated HHMM clock times.
pub fn parse_clock_list(line: &str) -> Result<Vec<ClockTime>, InputError> {
    line.split_whitespace()
        .map(|field| {
            let value = field
                .parse()
                .map_err(|_| InputError::NotANumber(field.to_string()))?;
            Ok(ClockTime::from_hhmm(value)?)
        })
        .collect()
}
