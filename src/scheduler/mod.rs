//! Simulation runner and schedule metrics.
//!
//! `Simulator` validates a process set once and runs each configured
//! policy on an independent copy, producing one `PolicyReport` per policy.
//!
//! # Metrics
//!
//! `ScheduleMetrics` computes average wait, average turnaround and
//! throughput, plus makespan and CPU utilization.

mod metrics;
mod simulator;

pub use metrics::ScheduleMetrics;
pub use simulator::{PolicyReport, SimulationConfig, Simulator, DEFAULT_QUANTUM};
