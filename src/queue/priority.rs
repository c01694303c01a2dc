//! Shortest-remaining-burst ready queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::ReadyQueue;
use crate::error::ScheduleError;
use crate::models::ReadyProcess;

/// Heap entry. `BinaryHeap` is a max-heap, so "greater" means "dispatch
/// sooner": smaller remaining, then larger priority, then smaller seq.
#[derive(Debug, Clone, Copy)]
struct Entry(ReadyProcess);

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .remaining
            .cmp(&self.0.remaining)
            .then_with(|| self.0.process.priority.cmp(&other.0.process.priority))
            .then_with(|| other.0.seq.cmp(&self.0.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ready queue ordered by `(remaining ascending, priority descending)`.
///
/// Backed by a binary heap: O(log n) insertion and removal.
///
/// # Example
/// ```
/// use cpu_sched::models::{Process, ReadyProcess};
/// use cpu_sched::queue::{PriorityReadyQueue, ReadyQueue};
///
/// let mut q = PriorityReadyQueue::new();
/// q.enqueue(ReadyProcess::new(Process::new(1, 0, 5), 0));
/// q.enqueue(ReadyProcess::new(Process::new(2, 0, 2), 1));
/// assert_eq!(q.dequeue().unwrap().id(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityReadyQueue {
    heap: BinaryHeap<Entry>,
}

impl PriorityReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` processes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl ReadyQueue for PriorityReadyQueue {
    fn enqueue(&mut self, process: ReadyProcess) {
        self.heap.push(Entry(process));
    }

    fn dequeue(&mut self) -> Result<ReadyProcess, ScheduleError> {
        self.heap
            .pop()
            .map(|e| e.0)
            .ok_or(ScheduleError::EmptyQueue)
    }

    fn peek(&self) -> Option<&ReadyProcess> {
        self.heap.peek().map(|e| &e.0)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
