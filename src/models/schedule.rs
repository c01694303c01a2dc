//! Schedule (policy output) model.
//!
//! A schedule outcome is everything one policy run produces: a timing row
//! per finished process, the Gantt trace of processor occupancy, and the
//! running totals the metrics are derived from.

use serde::{Deserialize, Serialize};

use super::Process;

/// One contiguous interval of processor occupancy.
///
/// `stop` is exclusive, so a slice covers `stop - start` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that ran.
    pub pid: i64,
    /// First tick of the interval.
    pub start: i64,
    /// End of the interval (exclusive).
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a slice.
    pub fn new(pid: i64, start: i64, stop: i64) -> Self {
        Self { pid, start, stop }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Timing record of one finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process id.
    pub id: i64,
    /// Process priority.
    pub priority: i64,
    /// Original (full) burst.
    pub burst: i64,
    /// Arrival tick.
    pub arrival: i64,
    /// Ticks spent ready but not running.
    pub wait: i64,
    /// Completion minus arrival.
    pub turnaround: i64,
    /// Tick at which the last unit of burst finished.
    pub completion: i64,
}

impl ScheduleRow {
    /// Derives the row of a process that finished at `completion`.
    ///
    /// `turnaround = completion - arrival` and `wait = turnaround - burst`,
    /// so both row identities hold by construction.
    pub fn finished(process: &Process, completion: i64) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            id: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            wait: turnaround - process.burst,
            turnaround,
            completion,
        }
    }

    /// Whether `turnaround == wait + burst` and `completion == arrival + turnaround`.
    pub fn is_consistent(&self) -> bool {
        self.turnaround == self.wait + self.burst
            && self.completion == self.arrival + self.turnaround
    }
}

/// Complete output of one policy run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// One row per finished process, sorted by id once the run finishes.
    pub rows: Vec<ScheduleRow>,
    /// Gantt trace in chronological order.
    pub trace: Vec<TimeSlice>,
    /// Sum of wait over all rows.
    pub total_wait: i64,
    /// Sum of turnaround over all rows.
    pub total_turnaround: i64,
    /// Sum of processor time handed out (equals the sum of bursts).
    pub total_service: i64,
    /// Latest completion tick.
    pub last_completion: i64,
}

impl ScheduleOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty outcome sized for `n` processes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            rows: Vec::with_capacity(n),
            trace: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    /// Appends a slice as its own trace entry.
    pub fn push_slice(&mut self, slice: TimeSlice) {
        self.total_service += slice.duration();
        self.trace.push(slice);
    }

    /// Appends a slice, merging it into the previous entry when the same
    /// process simply kept running.
    pub fn extend_or_push_slice(&mut self, slice: TimeSlice) {
        if let Some(last) = self.trace.last_mut() {
            if last.pid == slice.pid && last.stop == slice.start {
                last.stop = slice.stop;
                self.total_service += slice.duration();
                return;
            }
        }
        self.push_slice(slice);
    }

    /// Records that `process` finished at `completion` and returns its row.
    pub fn record_completion(&mut self, process: &Process, completion: i64) -> ScheduleRow {
        let row = ScheduleRow::finished(process, completion);
        self.total_wait += row.wait;
        self.total_turnaround += row.turnaround;
        self.last_completion = self.last_completion.max(completion);
        self.rows.push(row);
        row
    }

    /// Seals the outcome: rows are ordered by process id.
    pub fn finish(mut self) -> Self {
        self.rows.sort_by_key(|r| r.id);
        self
    }

    /// Row of a given process.
    pub fn row(&self, id: i64) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Trace entries of a given process.
    pub fn slices_for(&self, pid: i64) -> Vec<&TimeSlice> {
        self.trace.iter().filter(|s| s.pid == pid).collect()
    }

    /// Number of finished processes.
    pub fn process_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Processor idle time between t=0 and the last completion.
    pub fn idle_time(&self) -> i64 {
        self.last_completion - self.total_service
    }
}
