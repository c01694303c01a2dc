//! CPU scheduling policies.
//!
//! Four classical disciplines over a single processor:
//!
//! | Policy | Preemptive | Ready queue |
//! |--------|-----------|-------------|
//! | [`Fcfs`] | no | arrival order |
//! | [`SjfPriority`] | no | shortest burst, priority tie-break |
//! | [`Srtf`] | yes, every tick | shortest remaining, priority tie-break |
//! | [`RoundRobin`] | yes, every quantum | FIFO |
//!
//! Every policy copies its input; the caller's slice is never mutated and
//! policies can be run one after another on the same data.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::policy::{Fcfs, SchedulingPolicy};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let outcome = Fcfs.schedule(&processes).unwrap();
//! assert_eq!(outcome.row(2).unwrap().wait, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5

mod fcfs;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use round_robin::{ArrivalMode, RoundRobin};
pub use sjf::SjfPriority;
pub use srtf::Srtf;

use std::fmt::Debug;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Process, ScheduleOutcome};
use crate::validation::validate_processes;

/// A scheduling discipline.
pub trait SchedulingPolicy: Debug {
    /// Short policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Runs the simulation on already-validated input.
    ///
    /// Empty input yields an empty outcome.
    fn simulate(&self, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError>;

    /// Validates `processes`, then runs the simulation.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] with every validation problem; no
    /// partial outcome is produced.
    fn schedule(&self, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
        validate_processes(processes)?;
        self.simulate(processes)
    }
}

/// Policy selector used by configuration and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// First-come, first-served.
    Fcfs,
    /// Non-preemptive shortest-job-first with priority tie-break.
    SjfPriority,
    /// Preemptive shortest-remaining-time-first.
    Srtf,
    /// Round-Robin.
    RoundRobin,
}

impl PolicyKind {
    /// All policies, in report order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fcfs,
        PolicyKind::SjfPriority,
        PolicyKind::Srtf,
        PolicyKind::RoundRobin,
    ];

    /// Report title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-come, first-serve",
            Self::SjfPriority => "SJF priority",
            Self::Srtf => "Shortest-job-first",
            Self::RoundRobin => "Round-robin",
        }
    }

    /// Instantiates the policy. `quantum` and `arrival_mode` only affect
    /// Round-Robin.
    pub fn build(
        &self,
        quantum: NonZeroU32,
        arrival_mode: ArrivalMode,
    ) -> Box<dyn SchedulingPolicy> {
        match self {
            Self::Fcfs => Box::new(Fcfs),
            Self::SjfPriority => Box::new(SjfPriority),
            Self::Srtf => Box::new(Srtf),
            Self::RoundRobin => Box::new(RoundRobin::new(quantum).with_arrival_mode(arrival_mode)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    /// Processes from the textbook three-job example.
    fn three_jobs() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ]
    }

    fn all_policies() -> Vec<Box<dyn SchedulingPolicy>> {
        let q = NonZeroU32::new(2).unwrap();
        PolicyKind::ALL
            .iter()
            .map(|k| k.build(q, ArrivalMode::Strict))
            .collect()
    }

    #[test]
    fn test_row_identities_hold_for_every_policy() {
        let processes = vec![
            Process::new(1, 0, 7).with_priority(1),
            Process::new(2, 2, 4).with_priority(3),
            Process::new(3, 4, 1),
            Process::new(4, 5, 4).with_priority(3),
            Process::new(5, 20, 2),
        ];
        for policy in all_policies() {
            let outcome = policy.schedule(&processes).unwrap();
            assert_eq!(outcome.process_count(), processes.len(), "{}", policy.name());
            for row in &outcome.rows {
                assert!(row.is_consistent(), "{} row {:?}", policy.name(), row);
                assert!(row.wait >= 0, "{} row {:?}", policy.name(), row);
            }
        }
    }

    #[test]
    fn test_single_process_identical_across_policies() {
        let processes = vec![Process::new(1, 3, 6)];
        for policy in all_policies() {
            let outcome = policy.schedule(&processes).unwrap();
            let row = outcome.row(1).unwrap();
            assert_eq!(row.wait, 0, "{}", policy.name());
            assert_eq!(row.turnaround, 6, "{}", policy.name());
            assert_eq!(row.completion, 9, "{}", policy.name());
        }
    }

    #[test]
    fn test_trace_never_overlaps() {
        let processes = three_jobs();
        for policy in all_policies() {
            let outcome = policy.schedule(&processes).unwrap();
            for pair in outcome.trace.windows(2) {
                assert!(pair[0].stop <= pair[1].start, "{} {:?}", policy.name(), pair);
                assert!(pair[0].start < pair[0].stop);
            }
            let busy: i64 = outcome.trace.iter().map(|s| s.duration()).sum();
            assert_eq!(busy, 9, "{}", policy.name());
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let processes = three_jobs();
        let before = processes.clone();
        for policy in all_policies() {
            policy.schedule(&processes).unwrap();
        }
        assert_eq!(processes, before);
    }

    #[test]
    fn test_empty_input_gives_empty_outcome() {
        for policy in all_policies() {
            let outcome = policy.schedule(&[]).unwrap();
            assert!(outcome.is_empty(), "{}", policy.name());
            assert!(outcome.trace.is_empty(), "{}", policy.name());
        }
    }

    #[test]
    fn test_invalid_input_rejected_before_simulation() {
        let processes = vec![Process::new(1, 0, 0)];
        for policy in all_policies() {
            match policy.schedule(&processes) {
                Err(ScheduleError::InvalidInput(errors)) => assert_eq!(errors.len(), 1),
                other => panic!("{}: expected InvalidInput, got {other:?}", policy.name()),
            }
        }
    }

    #[test]
    fn test_overflowing_time_horizon_rejected() {
        let late = vec![Process::new(1, i64::MAX, 1)];
        let long = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, 1)];
        for processes in [late, long] {
            for policy in all_policies() {
                match policy.schedule(&processes) {
                    Err(ScheduleError::InvalidInput(errors)) => assert!(errors
                        .iter()
                        .any(|e| e.kind == ValidationErrorKind::TimeOverflow)),
                    other => panic!("{}: expected InvalidInput, got {other:?}", policy.name()),
                }
            }
        }
    }

    #[test]
    fn test_policy_kind_serde_names() {
        let json = serde_json::to_string(&PolicyKind::SjfPriority).unwrap();
        assert_eq!(json, "\"sjf_priority\"");
        let kind: PolicyKind = serde_json::from_str("\"round_robin\"").unwrap();
        assert_eq!(kind, PolicyKind::RoundRobin);
    }
}
