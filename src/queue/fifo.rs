//! First-in, first-out ready queue.

use std::collections::VecDeque;

use super::ReadyQueue;
use crate::error::ScheduleError;
use crate::models::ReadyProcess;

/// Ready queue in strict insertion order (Round-Robin).
#[derive(Debug, Clone, Default)]
pub struct FifoReadyQueue {
    queue: VecDeque<ReadyProcess>,
}

impl FifoReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` processes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Process ids from head to tail.
    pub fn ids(&self) -> Vec<i64> {
        self.queue.iter().map(|p| p.id()).collect()
    }
}

impl ReadyQueue for FifoReadyQueue {
    fn enqueue(&mut self, process: ReadyProcess) {
        self.queue.push_back(process);
    }

    fn dequeue(&mut self) -> Result<ReadyProcess, ScheduleError> {
        self.queue.pop_front().ok_or(ScheduleError::EmptyQueue)
    }

    fn peek(&self) -> Option<&ReadyProcess> {
        self.queue.front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
