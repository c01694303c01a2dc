//! Ready queues and arrival admission.
//!
//! A policy keeps processes that have arrived but are not running in a
//! [`ReadyQueue`]. Two disciplines are provided:
//!
//! - [`PriorityReadyQueue`]: shortest remaining burst first, larger
//!   priority on ties, earlier admission after that.
//! - [`FifoReadyQueue`]: strict insertion order.
//!
//! Processes that have not arrived yet wait in an [`ArrivalPool`], which
//! admits them into a ready queue as the simulated clock advances.
//!
//! # Invariant
//! A process lives in exactly one place at a time: the pool, a ready
//! queue, or the policy's "currently executing" slot.

mod admission;
mod fifo;
mod priority;

pub use admission::ArrivalPool;
pub use fifo::FifoReadyQueue;
pub use priority::PriorityReadyQueue;

use crate::error::ScheduleError;
use crate::models::ReadyProcess;

/// Ordering discipline over processes waiting for the CPU.
pub trait ReadyQueue {
    /// Inserts a process, keeping the discipline's order.
    fn enqueue(&mut self, process: ReadyProcess);

    /// Removes and returns the head.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyQueue`] if the queue is empty. Callers are
    /// expected to check [`is_empty`](Self::is_empty) first.
    fn dequeue(&mut self) -> Result<ReadyProcess, ScheduleError>;

    /// The head, without removing it.
    fn peek(&self) -> Option<&ReadyProcess>;

    /// Number of queued processes.
    fn len(&self) -> usize;

    /// Whether no process is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
