//! Offline CPU scheduling simulator.
//!
//! Runs classical single-processor scheduling policies over a process set
//! known in advance and reports, per policy, a timing row for every process
//! (wait, turnaround, completion), a Gantt trace, and aggregate metrics
//! (average wait, average turnaround, throughput).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ReadyProcess`, `TimeSlice`,
//!   `ScheduleRow`, `ScheduleOutcome`
//! - **`queue`**: Ready queues (`PriorityReadyQueue`, `FifoReadyQueue`) and
//!   arrival admission (`ArrivalPool`)
//! - **`policy`**: `Fcfs`, `SjfPriority`, `Srtf`, `RoundRobin`
//! - **`scheduler`**: `Simulator`, `SimulationConfig`, `ScheduleMetrics`
//! - **`validation`**: Input integrity checks (ids, arrivals, bursts)
//! - **`loader`**: CSV-like process tables
//! - **`report`**: Title banner, Gantt bar and schedule table
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched::loader::parse_processes;
//! use cpu_sched::scheduler::{SimulationConfig, Simulator};
//!
//! let processes = parse_processes("1,5,0\n2,3,1\n3,1,2\n").unwrap();
//! for report in Simulator::new(SimulationConfig::default()).run(&processes).unwrap() {
//!     println!("{report}");
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod error;
pub mod loader;
pub mod models;
pub mod policy;
pub mod queue;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
