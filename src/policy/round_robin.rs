//! Round-Robin.

use std::num::NonZeroU32;

use log::debug;
use serde::{Deserialize, Serialize};

use super::SchedulingPolicy;
use crate::error::ScheduleError;
use crate::models::{Process, ReadyProcess, ScheduleOutcome, TimeSlice};
use crate::queue::{ArrivalPool, FifoReadyQueue, ReadyQueue};

/// How Round-Robin brings processes into its FIFO queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalMode {
    /// Processes join the queue when they arrive, in arrival order.
    /// Arrivals during a slice join ahead of the preempted process.
    #[default]
    Strict,
    /// The whole input is queued at t=0 in input order; a process at the
    /// head that has not arrived yet makes the CPU wait for it. The clock
    /// jumps to that arrival, so slices never start before their process
    /// arrives.
    Upfront,
}

/// Round-Robin with a fixed quantum.
///
/// # Example
/// ```
/// use std::num::NonZeroU32;
/// use cpu_sched::models::{Process, TimeSlice};
/// use cpu_sched::policy::{RoundRobin, SchedulingPolicy};
///
/// let rr = RoundRobin::new(NonZeroU32::new(2).unwrap());
/// let outcome = rr.schedule(&[Process::new(1, 0, 4)]).unwrap();
/// assert_eq!(outcome.trace, vec![TimeSlice::new(1, 0, 2), TimeSlice::new(1, 2, 4)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: NonZeroU32,
    arrival_mode: ArrivalMode,
}

impl RoundRobin {
    /// Creates a Round-Robin policy with strict arrival handling.
    pub fn new(quantum: NonZeroU32) -> Self {
        Self {
            quantum,
            arrival_mode: ArrivalMode::Strict,
        }
    }

    /// Sets the arrival mode.
    pub fn with_arrival_mode(mut self, arrival_mode: ArrivalMode) -> Self {
        self.arrival_mode = arrival_mode;
        self
    }

    /// Time quantum (ticks).
    pub fn quantum(&self) -> NonZeroU32 {
        self.quantum
    }

    /// Arrival mode.
    pub fn arrival_mode(&self) -> ArrivalMode {
        self.arrival_mode
    }

    /// Runs the head of the queue for at most one quantum and returns the
    /// new clock.
    fn dispatch(
        &self,
        current: &mut ReadyProcess,
        clock: i64,
        outcome: &mut ScheduleOutcome,
    ) -> i64 {
        let start = clock.max(current.arrival());
        if start > clock {
            debug!("RR idle {clock}..{start}");
        }
        let ran = current.run_for(i64::from(self.quantum.get()));
        let stop = start + ran;
        debug!(
            "RR dispatch pid={} [{start}, {stop}) remaining={}",
            current.id(),
            current.remaining
        );
        outcome.push_slice(TimeSlice::new(current.id(), start, stop));
        stop
    }

    fn simulate_strict(&self, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
        let mut pool = ArrivalPool::new(processes);
        let mut ready = FifoReadyQueue::with_capacity(processes.len());
        let mut outcome = ScheduleOutcome::with_capacity(processes.len());
        let mut clock = 0;

        while !ready.is_empty() || !pool.is_empty() {
            if ready.is_empty() {
                if let Some(next) = pool.next_arrival() {
                    clock = clock.max(next);
                    pool.admit(clock, &mut ready);
                }
                continue;
            }

            let mut current = ready.dequeue()?;
            clock = self.dispatch(&mut current, clock, &mut outcome);

            // Newcomers first, then the preempted process rejoins the tail.
            pool.admit(clock, &mut ready);
            if current.is_finished() {
                outcome.record_completion(&current.process, clock);
            } else {
                ready.enqueue(current);
            }
        }

        Ok(outcome.finish())
    }

    fn simulate_upfront(&self, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
        let mut ready = FifoReadyQueue::with_capacity(processes.len());
        for (seq, process) in processes.iter().enumerate() {
            ready.enqueue(ReadyProcess::new(*process, seq));
        }
        let mut outcome = ScheduleOutcome::with_capacity(processes.len());
        let mut clock = 0;

        while !ready.is_empty() {
            let mut current = ready.dequeue()?;
            clock = self.dispatch(&mut current, clock, &mut outcome);

            if current.is_finished() {
                outcome.record_completion(&current.process, clock);
            } else {
                ready.enqueue(current);
            }
        }

        Ok(outcome.finish())
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn simulate(&self, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
        match self.arrival_mode {
            ArrivalMode::Strict => self.simulate_strict(processes),
            ArrivalMode::Upfront => self.simulate_upfront(processes),
        }
    }
}
