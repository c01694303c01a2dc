//! CPU scheduling domain models.
//!
//! Provides the data types a policy consumes and produces: the static
//! process record, the per-run working copy with remaining burst, and the
//! schedule outcome (timing rows, Gantt trace, totals).
//!
//! # Terminology
//!
//! | Type | Meaning |
//! |------|---------|
//! | Process | Input record: id, arrival, burst, priority |
//! | ReadyProcess | Working copy inside one run (remaining burst) |
//! | TimeSlice | One interval of processor occupancy |
//! | ScheduleRow | Wait / turnaround / completion of one process |
//! | ScheduleOutcome | Rows + trace + totals of one policy run |

mod process;
mod schedule;

pub use process::{Process, ReadyProcess};
pub use schedule::{ScheduleOutcome, ScheduleRow, TimeSlice};
