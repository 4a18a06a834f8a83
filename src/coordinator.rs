//! Fan-out one task per group (spec §4.8). Group tasks share no mutable
//! state; rayon's own work-stealing pool provides the "true threads
//! preferred" parallelism spec §4.8 asks for, the same pattern the
//! teacher's `ParallelOptimizer` uses for per-algorithm fan-out in
//! `parallel.rs`, generalized here to per-group fan-out. A panic inside one
//! group's task is caught and isolated — the other groups still complete
//! (spec §4.8's failure-isolation guarantee).

use crate::group_optimizer::{GroupOptimizer, GroupOutcome};
use crate::models::{DesignPart, GroupKey, GroupSolution, OptimizationConstraints};
use crate::{log_error, log_info};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Start/stop/duration accounting across every group task, used to report
/// speedup and efficiency the way the teacher's watch-dog style progress
/// accounting reports task throughput (spec §4.8).
#[derive(Debug, Clone)]
pub struct Monitor {
    /// `(group_key, task_duration)`, one entry per group, insertion order.
    pub task_durations: Vec<(String, Duration)>,
    pub wall_time: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedupRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SpeedupRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedupRating::Excellent => "excellent",
            SpeedupRating::Good => "good",
            SpeedupRating::Fair => "fair",
            SpeedupRating::Poor => "poor",
        }
    }
}

impl Monitor {
    pub fn task_count(&self) -> usize {
        self.task_durations.len()
    }

    fn cpu_time(&self) -> Duration {
        self.task_durations.iter().map(|(_, d)| *d).sum()
    }

    /// `speedup = sum(task cpu time) / wall time` (spec §4.8).
    pub fn speedup(&self) -> f64 {
        let wall = self.wall_time.as_secs_f64();
        if wall <= 0.0 {
            return 0.0;
        }
        self.cpu_time().as_secs_f64() / wall
    }

    /// `efficiency = speedup / task count` (spec §4.8).
    pub fn efficiency(&self) -> f64 {
        let count = self.task_count();
        if count == 0 {
            return 0.0;
        }
        self.speedup() / count as f64
    }

    /// Rating thresholds 0.8/0.6/0.4, per spec §4.8.
    pub fn rating(&self) -> SpeedupRating {
        let efficiency = self.efficiency();
        if efficiency >= 0.8 {
            SpeedupRating::Excellent
        } else if efficiency >= 0.6 {
            SpeedupRating::Good
        } else if efficiency >= 0.4 {
            SpeedupRating::Fair
        } else {
            SpeedupRating::Poor
        }
    }
}

pub struct ParallelCoordinator;

impl ParallelCoordinator {
    /// Runs one task per group concurrently and gathers the results back
    /// into a `BTreeMap` keyed by `GroupKey`, preserving the sorted
    /// iteration order spec §5 requires of every downstream consumer.
    pub fn run(
        groups: &BTreeMap<GroupKey, Vec<DesignPart>>,
        catalog_lengths: &[i64],
        constraints: &OptimizationConstraints,
    ) -> (BTreeMap<GroupKey, GroupOutcome>, Monitor) {
        let wall_start = Instant::now();

        let ordered: Vec<(&GroupKey, &Vec<DesignPart>)> = groups.iter().collect();
        let results: Vec<(GroupKey, Duration, GroupOutcome)> = ordered
            .par_iter()
            .map(|&(key, parts)| {
                let task_start = Instant::now();
                let outcome = catch_unwind(AssertUnwindSafe(|| GroupOptimizer::run(key, parts, catalog_lengths, constraints)))
                    .unwrap_or_else(|panic| {
                        let message = panic_message(panic.as_ref());
                        log_error!("group {}: task panicked: {}", key, message);
                        GroupOutcome {
                            solution: GroupSolution::new(),
                            pool: crate::pools::RemainderPool::new(),
                            modules: crate::pools::ModuleStockPool::new(key.to_string(), key.specification.clone(), key.cross_section(), catalog_lengths.to_vec()),
                        }
                    });
                (key.clone(), task_start.elapsed(), outcome)
            })
            .collect();

        let wall_time = wall_start.elapsed();

        let mut outcomes = BTreeMap::new();
        let mut task_durations = Vec::with_capacity(results.len());
        for (key, duration, outcome) in results {
            task_durations.push((key.to_string(), duration));
            outcomes.insert(key, outcome);
        }

        log_info!("coordinator: {} group task(s) finished in {:?}", outcomes.len(), wall_time);
        (outcomes, Monitor { task_durations, wall_time })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_parts;

    #[test]
    fn runs_every_group_and_preserves_sorted_order() {
        let parts = vec![
            DesignPart::new("p1", 6000, 1, 100.0, "B"),
            DesignPart::new("p2", 4000, 1, 100.0, "A"),
        ];
        let groups = group_parts(&parts);
        let constraints = OptimizationConstraints::default();

        let (outcomes, monitor) = ParallelCoordinator::run(&groups, &[12000], &constraints);

        assert_eq!(outcomes.len(), 2);
        let keys: Vec<_> = outcomes.keys().map(|k| k.specification.clone()).collect();
        assert_eq!(keys, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(monitor.task_count(), 2);
    }

    #[test]
    fn monitor_rates_perfect_parallelism_as_excellent() {
        let monitor = Monitor {
            task_durations: vec![("a".into(), Duration::from_millis(100)), ("b".into(), Duration::from_millis(100))],
            wall_time: Duration::from_millis(100),
        };
        // cpu=200ms, wall=100ms -> speedup=2.0, efficiency=2.0/2=1.0
        assert_eq!(monitor.rating(), SpeedupRating::Excellent);
    }

    #[test]
    fn monitor_rates_fully_serialized_work_as_poor() {
        let monitor = Monitor {
            task_durations: vec![("a".into(), Duration::from_millis(100)), ("b".into(), Duration::from_millis(100))],
            wall_time: Duration::from_millis(200),
        };
        // cpu=200ms, wall=200ms -> speedup=1.0, efficiency=1.0/2=0.5 -> fair
        assert_eq!(monitor.rating(), SpeedupRating::Fair);
    }
}
