//! Preemptive shortest-remaining-time-first.

use log::{debug, trace};

use super::SchedulingPolicy;
use crate::error::ScheduleError;
use crate::models::{Process, ScheduleOutcome, TimeSlice};
use crate::queue::{ArrivalPool, PriorityReadyQueue, ReadyQueue};

/// Preemptive SJF, decided one tick at a time.
///
/// Each tick goes to the ready process with the least remaining burst
/// (priority, then admission order, break ties). Arrivals are admitted
/// after every tick, so a shorter newcomer takes the CPU at the next tick.
/// Consecutive ticks of the same process are merged into one trace slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn simulate(&self, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
        let mut pool = ArrivalPool::new(processes);
        let mut ready = PriorityReadyQueue::with_capacity(processes.len());
        let mut outcome = ScheduleOutcome::with_capacity(processes.len());
        let mut clock = 0;

        while !ready.is_empty() || !pool.is_empty() {
            if ready.is_empty() {
                if let Some(next) = pool.next_arrival() {
                    if next > clock {
                        debug!("SRTF idle {clock}..{next}");
                        clock = next;
                    }
                    pool.admit(clock, &mut ready);
                }
                continue;
            }

            let mut current = ready.dequeue()?;
            let start = clock;
            current.run_for(1);
            clock += 1;
            trace!(
                "SRTF t={start} pid={} remaining={}",
                current.id(),
                current.remaining
            );

            outcome.extend_or_push_slice(TimeSlice::new(current.id(), start, clock));
            pool.admit(clock, &mut ready);

            if current.is_finished() {
                debug!("SRTF pid={} finished at {clock}", current.id());
                outcome.record_completion(&current.process, clock);
            } else {
                ready.enqueue(current);
            }
        }

        Ok(outcome.finish())
    }
}
