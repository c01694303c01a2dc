//! Process model.
//!
//! A process is the unit of work handed to a scheduling policy. Its timing
//! facts are static; policies that preempt track remaining burst in their
//! own working copy and never touch the record itself.

use serde::{Deserialize, Serialize};

/// A schedulable process.
///
/// # Time Representation
/// All times are integer ticks of a logical clock starting at t=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (positive).
    pub id: i64,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required (ticks).
    pub burst: i64,
    /// Tie-break weight: on equal burst, larger value is dispatched first.
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: i64, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

/// Working copy of a process inside a single policy run.
///
/// `remaining` starts at the full burst and is decremented as the process
/// executes. `seq` is the admission order into the ready queue and is
/// used as the last tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyProcess {
    /// The untouched input record.
    pub process: Process,
    /// Burst still to be executed (ticks).
    pub remaining: i64,
    /// Admission sequence number.
    pub seq: usize,
}

impl ReadyProcess {
    /// Wraps a process with its full burst remaining.
    pub fn new(process: Process, seq: usize) -> Self {
        Self {
            process,
            remaining: process.burst,
            seq,
        }
    }

    /// Process id.
    #[inline]
    pub fn id(&self) -> i64 {
        self.process.id
    }

    /// Arrival tick.
    #[inline]
    pub fn arrival(&self) -> i64 {
        self.process.arrival
    }

    /// Whether the whole burst has been executed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining <= 0
    }

    /// Executes up to `ticks` units and returns how many actually ran.
    pub fn run_for(&mut self, ticks: i64) -> i64 {
        let ran = ticks.min(self.remaining).max(0);
        self.remaining -= ran;
        ran
    }
}
