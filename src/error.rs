//! Scheduling errors.

use std::fmt;

use crate::validation::ValidationError;

/// Errors surfaced by policies, metrics and the simulation runner.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The process set failed validation; nothing was simulated.
    InvalidInput(Vec<ValidationError>),
    /// `dequeue` on an empty ready queue. Indicates an admission
    /// sequencing bug, never bad input.
    EmptyQueue,
    /// No processes: averages and throughput are undefined.
    DegenerateInput,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input ({} problem", errors.len())?;
                if errors.len() != 1 {
                    f.write_str("s")?;
                }
                f.write_str(")")?;
                for e in errors {
                    write!(f, "; {e}")?;
                }
                Ok(())
            }
            Self::EmptyQueue => f.write_str("dequeue on empty ready queue"),
            Self::DegenerateInput => f.write_str("no processes to schedule"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

impl From<ValidationError> for ScheduleError {
    fn from(error: ValidationError) -> Self {
        Self::InvalidInput(vec![error])
    }
}
