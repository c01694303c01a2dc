//! Non-preemptive shortest-job-first with priority tie-break.

use log::debug;

use super::SchedulingPolicy;
use crate::error::ScheduleError;
use crate::models::{Process, ScheduleOutcome, TimeSlice};
use crate::queue::{ArrivalPool, PriorityReadyQueue, ReadyQueue};

/// Non-preemptive SJF.
///
/// Whenever the CPU frees up, the arrived process with the shortest burst
/// runs to completion; equal bursts go to the larger priority value. A
/// shorter job arriving mid-service waits for the current one to finish.
///
/// Input order does not matter: admission sorts by arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfPriority;

impl SchedulingPolicy for SjfPriority {
    fn name(&self) -> &'static str {
        "SJF-P"
    }

    fn simulate(&self, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
        let mut pool = ArrivalPool::new(processes);
        let mut ready = PriorityReadyQueue::with_capacity(processes.len());
        let mut outcome = ScheduleOutcome::with_capacity(processes.len());
        let mut clock = 0;

        while !ready.is_empty() || !pool.is_empty() {
            if ready.is_empty() {
                if let Some(next) = pool.next_arrival() {
                    pool.admit(next, &mut ready);
                }
                continue;
            }

            let current = ready.dequeue()?;
            let start = clock.max(current.arrival());
            if start > clock {
                debug!("SJF-P idle {clock}..{start}");
            }
            clock = start + current.process.burst;
            debug!("SJF-P dispatch pid={} [{start}, {clock})", current.id());

            outcome.push_slice(TimeSlice::new(current.id(), start, clock));
            outcome.record_completion(&current.process, clock);

            pool.admit(clock, &mut ready);
        }

        Ok(outcome.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_jobs_no_preemption() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let outcome = SjfPriority.schedule(&processes).unwrap();

        // P1 alone at t=0 runs to 5; then P3 (1) before P2 (3)
        assert_eq!(
            outcome.trace,
            vec![
                TimeSlice::new(1, 0, 5),
                TimeSlice::new(3, 5, 6),
                TimeSlice::new(2, 6, 9),
            ]
        );
        assert_eq!(outcome.row(3).unwrap().wait, 3);
        assert_eq!(outcome.row(2).unwrap().wait, 5);
        assert_eq!(outcome.total_wait, 8);
    }

    #[test]
    fn test_priority_breaks_burst_tie() {
        let processes = vec![
            Process::new(1, 0, 2),
            Process::new(2, 1, 4).with_priority(1),
            Process::new(3, 1, 4).with_priority(7),
        ];
        let outcome = SjfPriority.schedule(&processes).unwrap();
        assert_eq!(outcome.trace[1].pid, 3);
        assert_eq!(outcome.trace[2].pid, 2);
    }

    #[test]
    fn test_idle_until_next_arrival() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 6, 1)];
        let outcome = SjfPriority.schedule(&processes).unwrap();
        assert_eq!(outcome.trace[1], TimeSlice::new(2, 6, 7));
        assert_eq!(outcome.row(2).unwrap().wait, 0);
        assert_eq!(outcome.last_completion, 7);
    }

    #[test]
    fn test_first_arrival_after_zero() {
        let processes = vec![Process::new(1, 4, 3), Process::new(2, 4, 1)];
        let outcome = SjfPriority.schedule(&processes).unwrap();
        assert_eq!(outcome.trace[0], TimeSlice::new(2, 4, 5));
        assert_eq!(outcome.trace[1], TimeSlice::new(1, 5, 8));
    }

    #[test]
    fn test_unsorted_input() {
        let processes = vec![
            Process::new(3, 2, 1),
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
        ];
        let outcome = SjfPriority.schedule(&processes).unwrap();
        assert_eq!(outcome.trace[0].pid, 1);
        let ids: Vec<i64> = outcome.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
