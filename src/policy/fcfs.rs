//! First-come, first-served.

use log::debug;

use super::SchedulingPolicy;
use crate::error::ScheduleError;
use crate::models::{Process, ScheduleOutcome, TimeSlice};

/// Non-preemptive, arrival-ordered scheduling.
///
/// Processes are served in arrival order; equal arrivals keep input order,
/// so pre-sorted input is served exactly as given. A process that arrives
/// after the CPU went idle starts on arrival with zero wait.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
        let mut order = processes.to_vec();
        order.sort_by_key(|p| p.arrival);

        let mut outcome = ScheduleOutcome::with_capacity(order.len());
        let mut clock = 0;

        for process in &order {
            let start = clock.max(process.arrival);
            if start > clock {
                debug!("FCFS idle {clock}..{start}");
            }
            clock = start + process.burst;
            debug!("FCFS dispatch pid={} [{start}, {clock})", process.id);

            outcome.push_slice(TimeSlice::new(process.id, start, clock));
            outcome.record_completion(process, clock);
        }

        Ok(outcome.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_jobs() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let outcome = Fcfs.schedule(&processes).unwrap();

        let waits: Vec<i64> = outcome.rows.iter().map(|r| r.wait).collect();
        let turnarounds: Vec<i64> = outcome.rows.iter().map(|r| r.turnaround).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        assert_eq!(turnarounds, vec![5, 7, 7]);
        assert_eq!(
            outcome.trace,
            vec![
                TimeSlice::new(1, 0, 5),
                TimeSlice::new(2, 5, 8),
                TimeSlice::new(3, 8, 9),
            ]
        );
        assert_eq!(outcome.last_completion, 9);
    }

    #[test]
    fn test_idle_gap() {
        // P2 arrives long after P1 finishes → CPU idles 3..10
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 10, 2)];
        let outcome = Fcfs.schedule(&processes).unwrap();

        let p2 = outcome.row(2).unwrap();
        assert_eq!(p2.wait, 0);
        assert_eq!(p2.completion, 12);
        assert_eq!(outcome.trace[1], TimeSlice::new(2, 10, 12));
        assert_eq!(outcome.idle_time(), 7);
    }

    #[test]
    fn test_unsorted_input_served_by_arrival() {
        let processes = vec![Process::new(1, 4, 2), Process::new(2, 0, 3)];
        let outcome = Fcfs.schedule(&processes).unwrap();
        assert_eq!(outcome.trace[0].pid, 2);
        assert_eq!(outcome.row(1).unwrap().wait, 0);
        assert_eq!(outcome.row(1).unwrap().completion, 6);
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let processes = vec![Process::new(2, 0, 1), Process::new(1, 0, 1)];
        let outcome = Fcfs.schedule(&processes).unwrap();
        assert_eq!(outcome.trace[0].pid, 2);
        assert_eq!(outcome.trace[1].pid, 1);
    }
}
