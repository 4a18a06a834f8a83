//! Orchestrates one group's packing loop, MWCD local search, and per-task
//! stats under a shared time budget (spec §4.7).

use crate::models::{DesignPart, GroupKey, GroupSolution, OptimizationConstraints, TaskStats};
use crate::mwcd::MwcdOptimizer;
use crate::packer::Packer;
use crate::pools::{ModuleStockPool, RemainderPool};
use crate::log_info;
use std::time::{Duration, Instant};

/// Everything one group's task hands back to the `ParallelCoordinator` for
/// merging: the solution itself, the group's surviving pool (still holding
/// `Pending` remainders awaiting the global finalizer), and the module
/// stock pool (for `StatisticsCalculator`'s material totals and module-usage
/// breakdown).
pub struct GroupOutcome {
    pub solution: GroupSolution,
    pub pool: RemainderPool,
    pub modules: ModuleStockPool,
}

pub struct GroupOptimizer;

impl GroupOptimizer {
    /// Runs the Packer loop, then the MWCD loop, against `parts` and the
    /// module catalog's distinct lengths (spec §6: the module bar catalog
    /// is global input, shared by every group).
    pub fn run(key: &GroupKey, parts: &[DesignPart], catalog_lengths: &[i64], constraints: &OptimizationConstraints) -> GroupOutcome {
        let group_label = format!("{}_{}", sanitize(&key.specification), format_cross_section(key.cross_section()));
        let deadline = Instant::now() + Duration::from_millis(constraints.time_limit_ms);

        let mut modules = ModuleStockPool::new(&group_label, &key.specification, key.cross_section(), catalog_lengths.to_vec());
        let mut pool = RemainderPool::new();
        let mut stats = TaskStats::new();

        let mut packer = Packer::new(&group_label, &key.specification, key.cross_section());
        let mut plans = packer.run(parts, &mut pool, &mut modules, constraints, &mut stats, deadline);

        let mwcd = MwcdOptimizer::new(&group_label);
        mwcd.optimize(&mut plans, &mut pool, constraints, deadline);

        log_info!(
            "group {}: {} plan(s), {} module(s) opened, {} weld(s), {} unfulfilled",
            group_label, plans.len(), stats.modules_opened, stats.welds_performed, stats.unfulfilled
        );

        GroupOutcome { solution: GroupSolution { cutting_plans: plans, task_stats: stats }, pool, modules }
    }
}

fn sanitize(specification: &str) -> String {
    specification.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect()
}

fn format_cross_section(cross_section: f64) -> String {
    format!("{:.2}", cross_section).replace('.', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_packer_and_mwcd_without_panicking() {
        let key = GroupKey::new("S355", 100.0);
        let parts = vec![DesignPart::new("p1", 6000, 2, 100.0, "S355")];
        let catalog = vec![12000];
        let constraints = OptimizationConstraints::default();

        let outcome = GroupOptimizer::run(&key, &parts, &catalog, &constraints);
        assert_eq!(outcome.solution.cutting_plans.len(), 1);
    }
}
