//! Input validation for process sets.
//!
//! Checks structural integrity of the process records before any policy
//! runs. Detects:
//! - Non-positive process IDs
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive bursts
//! - Process sets whose time horizon does not fit in `i64`
//!
//! All problems are collected; validation never stops at the first one.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A text record could not be parsed (wrong field count, non-integer).
    MalformedRecord,
    /// A process ID is zero or negative.
    InvalidId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or negative).
    NonPositiveBurst,
    /// Latest arrival plus total burst (or the sum of per-process times
    /// over that horizon) exceeds `i64`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. Every ID is positive
/// 2. No duplicate IDs
/// 3. No negative arrival
/// 4. Every burst is positive
/// 5. Every completion time, and every total over the set, fits in `i64`
///
/// An empty set is valid here; it is handled as degenerate input by the
/// metrics layer.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut latest_arrival = 0i64;
    let mut total_burst = Some(0i64);

    for p in processes {
        if p.id <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                format!("Process ID must be positive, got {}", p.id),
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.id, p.burst),
            ));
        }

        latest_arrival = latest_arrival.max(p.arrival);
        total_burst = total_burst.and_then(|t| t.checked_add(p.burst.max(0)));
    }

    // Completions never pass the horizon; summed waits and turnarounds
    // never pass count × horizon.
    let horizon = total_burst.and_then(|t| t.checked_add(latest_arrival));
    let count = i64::try_from(processes.len()).ok();
    let fits = horizon
        .zip(count)
        .and_then(|(h, n)| h.checked_mul(n.max(1)))
        .is_some();
    if !fits {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Time horizon of {} processes overflows (latest arrival {latest_arrival})",
                processes.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
