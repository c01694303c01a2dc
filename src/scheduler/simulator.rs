//! Simulation runner.
//!
//! # Algorithm
//!
//! 1. Validate the process set once.
//! 2. For each configured policy, run it on its own copy of the input.
//! 3. Derive metrics; empty input leaves them undefined instead of failing.

use std::num::NonZeroU32;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::ScheduleMetrics;
use crate::error::ScheduleError;
use crate::models::{Process, ScheduleOutcome};
use crate::policy::{ArrivalMode, PolicyKind};
use crate::validation::validate_processes;

/// Round-Robin quantum used when none is configured.
pub const DEFAULT_QUANTUM: NonZeroU32 = match NonZeroU32::new(2) {
    Some(q) => q,
    None => unreachable!(),
};

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-Robin time quantum (ticks).
    pub quantum: NonZeroU32,
    /// Round-Robin arrival handling.
    pub arrival_mode: ArrivalMode,
    /// Policies to run, in report order.
    pub policies: Vec<PolicyKind>,
}

impl SimulationConfig {
    /// Creates the default configuration: all four policies, quantum 2.
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            arrival_mode: ArrivalMode::default(),
            policies: PolicyKind::ALL.to_vec(),
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the Round-Robin arrival mode.
    pub fn with_arrival_mode(mut self, arrival_mode: ArrivalMode) -> Self {
        self.arrival_mode = arrival_mode;
        self
    }

    /// Replaces the policy list.
    pub fn with_policies(mut self, policies: Vec<PolicyKind>) -> Self {
        self.policies = policies;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one policy run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    /// Which policy produced this report.
    pub kind: PolicyKind,
    /// Report title.
    pub title: String,
    /// Rows, trace and totals.
    pub outcome: ScheduleOutcome,
    /// Aggregate metrics. `None` for empty input.
    pub metrics: Option<ScheduleMetrics>,
}

/// Runs configured policies over a process set.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{SimulationConfig, Simulator};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3), Process::new(3, 2, 1)];
/// let reports = Simulator::new(SimulationConfig::default()).run(&processes).unwrap();
/// assert_eq!(reports.len(), 4);
/// assert!(reports.iter().all(|r| r.metrics.is_some()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a runner with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates `processes` once, then runs every configured policy.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] before any policy runs.
    pub fn run(&self, processes: &[Process]) -> Result<Vec<PolicyReport>, ScheduleError> {
        validate_processes(processes)?;
        if processes.is_empty() {
            warn!("no processes to schedule; metrics will be omitted");
        }

        self.config
            .policies
            .iter()
            .map(|&kind| self.run_validated(kind, processes))
            .collect()
    }

    /// Validates `processes`, then runs a single policy.
    pub fn run_policy(
        &self,
        kind: PolicyKind,
        processes: &[Process],
    ) -> Result<PolicyReport, ScheduleError> {
        validate_processes(processes)?;
        self.run_validated(kind, processes)
    }

    fn run_validated(
        &self,
        kind: PolicyKind,
        processes: &[Process],
    ) -> Result<PolicyReport, ScheduleError> {
        let policy = kind.build(self.config.quantum, self.config.arrival_mode);
        info!("running {} on {} processes", policy.name(), processes.len());

        let outcome = policy.simulate(processes)?;
        let metrics = match ScheduleMetrics::calculate(&outcome) {
            Ok(metrics) => Some(metrics),
            Err(ScheduleError::DegenerateInput) => None,
            Err(e) => return Err(e),
        };
        info!(
            "{} finished: {} slices, makespan {}",
            policy.name(),
            outcome.trace.len(),
            outcome.last_completion
        );

        Ok(PolicyReport {
            kind,
            title: kind.title().to_string(),
            outcome,
            metrics,
        })
    }
}
