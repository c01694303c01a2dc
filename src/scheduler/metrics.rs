//! Schedule quality metrics.
//!
//! Computes the aggregate indicators of one policy run from its outcome.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | Sum of wait / process count |
//! | Average turnaround | Sum of turnaround / process count |
//! | Throughput | Process count / last completion time |
//! | Makespan | Last completion time |
//! | CPU utilization | Busy ticks / makespan |

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::ScheduleOutcome;

/// Aggregate indicators of one policy run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of finished processes.
    pub process_count: usize,
    /// Mean wait (ticks).
    pub average_wait: f64,
    /// Mean turnaround (ticks).
    pub average_turnaround: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Last completion tick.
    pub makespan: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a policy outcome.
    ///
    /// # Errors
    /// [`ScheduleError::DegenerateInput`] when the outcome has no rows (or
    /// no elapsed time), since every average would divide by zero.
    pub fn calculate(outcome: &ScheduleOutcome) -> Result<Self, ScheduleError> {
        let count = outcome.process_count();
        if count == 0 || outcome.last_completion <= 0 {
            return Err(ScheduleError::DegenerateInput);
        }

        let n = count as f64;
        let makespan = outcome.last_completion;

        Ok(Self {
            process_count: count,
            average_wait: outcome.total_wait as f64 / n,
            average_turnaround: outcome.total_turnaround as f64 / n,
            throughput: n / makespan as f64,
            makespan,
            cpu_utilization: outcome.total_service as f64 / makespan as f64,
        })
    }
}
