//! Arrival admission.
//!
//! Holds processes that have not arrived yet and releases them into a
//! ready queue once the simulated clock reaches their arrival tick.

use std::collections::VecDeque;

use log::trace;

use super::ReadyQueue;
use crate::models::{Process, ReadyProcess};

/// Not-yet-arrived processes, ordered by arrival.
///
/// Equal arrivals keep their input order, so the first of them in the
/// input is admitted first.
#[derive(Debug, Clone, Default)]
pub struct ArrivalPool {
    pending: VecDeque<Process>,
    next_seq: usize,
}

impl ArrivalPool {
    /// Copies `processes` into a pool sorted (stably) by arrival.
    pub fn new(processes: &[Process]) -> Self {
        let mut sorted = processes.to_vec();
        sorted.sort_by_key(|p| p.arrival);
        Self {
            pending: sorted.into(),
            next_seq: 0,
        }
    }

    /// Moves every process with `arrival <= now` into `queue`.
    ///
    /// Returns the number admitted; zero when nothing is eligible.
    pub fn admit<Q: ReadyQueue + ?Sized>(&mut self, now: i64, queue: &mut Q) -> usize {
        let mut admitted = 0;
        while self.pending.front().is_some_and(|p| p.arrival <= now) {
            if let Some(process) = self.pending.pop_front() {
                trace!("t={now} admit pid={} (arrival {})", process.id, process.arrival);
                queue.enqueue(ReadyProcess::new(process, self.next_seq));
                self.next_seq += 1;
                admitted += 1;
            }
        }
        admitted
    }

    /// Arrival tick of the earliest pending process.
    pub fn next_arrival(&self) -> Option<i64> {
        self.pending.front().map(|p| p.arrival)
    }

    /// Number of pending processes.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether every process has been admitted.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::FifoReadyQueue;

    #[test]
    fn test_admits_only_arrived() {
        let mut pool = ArrivalPool::new(&[
            Process::new(1, 0, 3),
            Process::new(2, 4, 1),
            Process::new(3, 2, 2),
        ]);
        let mut q = FifoReadyQueue::new();

        assert_eq!(pool.admit(2, &mut q), 2);
        assert_eq!(q.ids(), vec![1, 3]);
        assert_eq!(pool.next_arrival(), Some(4));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_admit_is_noop_when_nothing_eligible() {
        let mut pool = ArrivalPool::new(&[Process::new(1, 5, 3)]);
        let mut q = FifoReadyQueue::new();
        assert_eq!(pool.admit(4, &mut q), 0);
        assert_eq!(pool.admit(4, &mut q), 0);
        assert!(q.is_empty());
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let mut pool = ArrivalPool::new(&[
            Process::new(9, 1, 1),
            Process::new(4, 0, 1),
            Process::new(7, 1, 1),
            Process::new(2, 1, 1),
        ]);
        let mut q = FifoReadyQueue::new();
        pool.admit(1, &mut q);
        assert_eq!(q.ids(), vec![4, 9, 7, 2]);
        assert!(pool.is_empty());
        assert_eq!(pool.next_arrival(), None);
    }

    #[test]
    fn test_admission_sequence_is_monotonic() {
        let mut pool = ArrivalPool::new(&[Process::new(1, 0, 1), Process::new(2, 3, 1)]);
        let mut q = FifoReadyQueue::new();
        pool.admit(0, &mut q);
        pool.admit(3, &mut q);
        let first = q.dequeue().unwrap();
        let second = q.dequeue().unwrap();
        assert!(first.seq < second.seq);
    }
}
