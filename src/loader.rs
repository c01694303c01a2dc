//! Process table loader.
//!
//! Parses CSV-like text, one process per line:
//!
//! ```text
//! # id, burst, arrival[, priority]
//! 1,5,0
//! 2,3,1,2
//! ```
//!
//! Blank lines and `#` comments are skipped; fields are trimmed; a missing
//! priority column defaults to 0. Every other deviation is reported with
//! its 1-based line number. Range checks (positive burst, unique ids, ...)
//! are left to [`validate_processes`](crate::validation::validate_processes).

use std::fmt;
use std::io::{self, Read};

use crate::models::Process;
use crate::validation::{ValidationError, ValidationErrorKind};

const FIELD_NAMES: [&str; 4] = ["id", "burst", "arrival", "priority"];

/// Failure to load a process table.
#[derive(Debug)]
pub enum LoadError {
    /// The reader failed.
    Io(io::Error),
    /// A record could not be parsed.
    Malformed(ValidationError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading process table: {e}"),
            Self::Malformed(e) => write!(f, "parsing process table: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Malformed(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ValidationError> for LoadError {
    fn from(e: ValidationError) -> Self {
        Self::Malformed(e)
    }
}

/// Parses a process table from text.
///
/// # Errors
/// A [`ValidationErrorKind::MalformedRecord`] error naming the first bad
/// line.
///
/// # Example
/// ```
/// use cpu_sched::loader::parse_processes;
///
/// let processes = parse_processes("1,5,0\n2,3,1,4\n").unwrap();
/// assert_eq!(processes[1].priority, 4);
/// assert_eq!(processes[0].priority, 0);
/// ```
pub fn parse_processes(input: &str) -> Result<Vec<Process>, ValidationError> {
    let mut processes = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        processes.push(parse_record(line_no, line)?);
    }

    Ok(processes)
}

/// Reads and parses a process table.
pub fn read_processes<R: Read>(mut reader: R) -> Result<Vec<Process>, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_processes(&text)?)
}

fn parse_record(line_no: usize, line: &str) -> Result<Process, ValidationError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(malformed(
            line_no,
            format!("expected 3 or 4 fields, found {}", fields.len()),
        ));
    }

    let mut values = [0i64; 4];
    for (i, raw) in fields.iter().enumerate() {
        values[i] = raw.parse().map_err(|_| {
            malformed(line_no, format!("invalid {} '{raw}'", FIELD_NAMES[i]))
        })?;
    }

    let [id, burst, arrival, priority] = values;
    Ok(Process::new(id, arrival, burst).with_priority(priority))
}

fn malformed(line_no: usize, detail: String) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::MalformedRecord,
        format!("line {line_no}: {detail}"),
    )
}
