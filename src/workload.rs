//! Seeded random workloads.
//!
//! Generates process sets for experiments: ids `1..=n`, arrivals that never
//! decrease, and bursts and priorities drawn from inclusive ranges. The same
//! seed always yields the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Random process-set generator.
///
/// # Example
/// ```
/// use cpu_sched::workload::WorkloadGenerator;
///
/// let generator = WorkloadGenerator::new(42).with_burst_range(2, 6);
/// let processes = generator.generate(10);
/// assert_eq!(processes.len(), 10);
/// assert!(processes.iter().all(|p| (2..=6).contains(&p.burst)));
/// assert_eq!(processes, generator.generate(10));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    max_arrival_gap: i64,
    burst_range: (i64, i64),
    priority_range: (i64, i64),
}

impl WorkloadGenerator {
    /// Creates a generator: gaps `0..=3`, bursts `1..=10`, priorities `0..=5`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_arrival_gap: 3,
            burst_range: (1, 10),
            priority_range: (0, 5),
        }
    }

    /// Sets the largest gap between consecutive arrivals (clamped at 0).
    pub fn with_max_arrival_gap(mut self, gap: i64) -> Self {
        self.max_arrival_gap = gap.max(0);
        self
    }

    /// Sets the inclusive burst range. Bursts are at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst_range = (min, max.max(min));
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i64, max: i64) -> Self {
        self.priority_range = (min, max.max(min));
        self
    }

    /// Generates `count` processes; the first arrives at t=0.
    pub fn generate(&self, count: usize) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut arrival = 0;
        let mut processes = Vec::with_capacity(count);

        for id in 1..=count as i64 {
            if id > 1 {
                arrival += rng.random_range(0..=self.max_arrival_gap);
            }
            let burst = rng.random_range(self.burst_range.0..=self.burst_range.1);
            let priority = rng.random_range(self.priority_range.0..=self.priority_range.1);
            processes.push(Process::new(id, arrival, burst).with_priority(priority));
        }

        processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Fcfs, PolicyKind, RoundRobin, SchedulingPolicy, Srtf};
    use crate::scheduler::{SimulationConfig, Simulator};
    use crate::validation::validate_processes;
    use std::num::NonZeroU32;

    #[test]
    fn test_deterministic() {
        let generator = WorkloadGenerator::new(7);
        assert_eq!(generator.generate(25), generator.generate(25));
    }

    #[test]
    fn test_shape() {
        let processes = WorkloadGenerator::new(1)
            .with_max_arrival_gap(4)
            .with_burst_range(3, 5)
            .with_priority_range(-2, 2)
            .generate(50);

        assert_eq!(processes[0].arrival, 0);
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id, i as i64 + 1);
            assert!((3..=5).contains(&p.burst));
            assert!((-2..=2).contains(&p.priority));
        }
        for pair in processes.windows(2) {
            let gap = pair[1].arrival - pair[0].arrival;
            assert!((0..=4).contains(&gap));
        }
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_ranges_are_clamped() {
        let processes = WorkloadGenerator::new(3)
            .with_burst_range(-5, 0)
            .with_max_arrival_gap(-1)
            .generate(10);
        assert!(processes.iter().all(|p| p.burst == 1 && p.arrival == 0));
    }

    #[test]
    fn test_empty() {
        assert!(WorkloadGenerator::new(0).generate(0).is_empty());
    }

    #[test]
    fn test_invariants_on_random_workloads() {
        let config = SimulationConfig::default();
        for seed in 0..20 {
            let processes = WorkloadGenerator::new(seed).generate(15);
            let bursts: i64 = processes.iter().map(|p| p.burst).sum();
            for report in Simulator::new(config.clone()).run(&processes).unwrap() {
                assert_eq!(report.outcome.process_count(), 15);
                assert_eq!(report.outcome.total_service, bursts, "{:?}", report.kind);
                for row in &report.outcome.rows {
                    assert!(row.is_consistent(), "{:?} seed {seed}", report.kind);
                    assert!(row.wait >= 0);
                }
                for pair in report.outcome.trace.windows(2) {
                    assert!(pair[0].stop <= pair[1].start);
                }
                assert!(report.metrics.unwrap().throughput > 0.0);
            }
        }
    }

    #[test]
    fn test_large_quantum_round_robin_equals_fcfs() {
        for seed in 0..10 {
            let processes = WorkloadGenerator::new(seed).generate(12);
            let quantum = NonZeroU32::new(10).unwrap(); // default max burst
            let fcfs = Fcfs.schedule(&processes).unwrap();
            let rr = RoundRobin::new(quantum).schedule(&processes).unwrap();
            assert_eq!(fcfs.rows, rr.rows, "seed {seed}");
        }
    }

    #[test]
    fn test_srtf_minimises_total_wait() {
        // SRPT is optimal for total completion time, hence for total wait
        for seed in 0..10 {
            let processes = WorkloadGenerator::new(seed).generate(12);
            let srtf = Srtf.schedule(&processes).unwrap();
            for kind in PolicyKind::ALL {
                let other = kind
                    .build(NonZeroU32::new(2).unwrap(), Default::default())
                    .schedule(&processes)
                    .unwrap();
                assert!(srtf.total_wait <= other.total_wait, "{kind:?} seed {seed}");
            }
        }
    }
}
