//! First-fit-decreasing packer with lookahead bin selection (spec §4.5).
//! Owns nothing across calls except a small id counter; all state it reads
//! or mutates (`RemainderPool`, `ModuleStockPool`, `TaskStats`) belongs to
//! the calling `GroupOptimizer`.

use crate::models::{Cut, CuttingPlan, DesignPart, OptimizationConstraints, Remainder, TaskStats};
use crate::pools::{ModuleStockPool, RemainderPool};
use crate::{log_debug, log_warn};
use std::time::Instant;

/// One quantity-expanded unit of demand: a single physical piece still
/// waiting to be cut.
#[derive(Debug, Clone)]
struct DemandUnit {
    uid: u64,
    design_id: String,
    length: i64,
}

pub struct Packer<'a> {
    group_label: &'a str,
    specification: &'a str,
    cross_section: f64,
    next_remainder_seq: u64,
}

impl<'a> Packer<'a> {
    pub fn new(group_label: &'a str, specification: &'a str, cross_section: f64) -> Self {
        Self { group_label, specification, cross_section, next_remainder_seq: 1 }
    }

    /// Runs the packing loop to completion or until `deadline` passes.
    /// Returns the plans produced, in production order (spec §5's ordering
    /// guarantee).
    pub fn run(
        &mut self,
        parts: &[DesignPart],
        pool: &mut RemainderPool,
        modules: &mut ModuleStockPool,
        constraints: &OptimizationConstraints,
        stats: &mut TaskStats,
        deadline: Instant,
    ) -> Vec<CuttingPlan> {
        let mut demand = Self::expand_demand(parts);
        let mut plans = Vec::new();

        while !demand.is_empty() {
            if Instant::now() >= deadline {
                log_warn!("group {}: time budget exhausted with {} demand unit(s) unfulfilled", self.group_label, demand.len());
                stats.unfulfilled += demand.len() as i64;
                break;
            }

            let longest = demand[0].clone();
            let plan = match self.open_bin(&longest, pool, modules, constraints, stats, &demand) {
                Some(plan) => plan,
                None => {
                    // No material — fresh or reused — can ever carry this
                    // demand. Drop it rather than spin forever reopening an
                    // undersized bin that can never hold it.
                    log_warn!(
                        "group {}: demand unit {} (length {}) exceeds every available source; marking unfulfilled",
                        self.group_label, longest.uid, longest.length
                    );
                    stats.unfulfilled += 1;
                    demand.retain(|d| d.uid != longest.uid);
                    continue;
                }
            };

            let (plan, packed_uids) = self.first_fit_pack(plan, &demand);
            demand.retain(|d| !packed_uids.contains(&d.uid));

            let plan = self.materialize_leftover(plan, pool, constraints.waste_threshold);
            plans.push(plan);
        }

        plans
    }

    fn expand_demand(parts: &[DesignPart]) -> Vec<DemandUnit> {
        let mut uid = 0u64;
        let mut units: Vec<DemandUnit> = Vec::new();
        for part in parts {
            for _ in 0..part.quantity {
                units.push(DemandUnit { uid, design_id: part.id.clone(), length: part.length });
                uid += 1;
            }
        }
        // Descending by length; uid breaks ties so the order is fully
        // determined regardless of the catalog's own input order.
        units.sort_by(|a, b| b.length.cmp(&a.length).then(a.uid.cmp(&b.uid)));
        units
    }

    /// Source selection, spec §4.5 step 2: single remainder, then weld
    /// combination, then a fresh module via lookahead. Returns `None` when
    /// no source — pooled or fresh — can carry `longest`, so `run` marks it
    /// unfulfilled instead of opening a bin that can never hold it.
    fn open_bin(
        &mut self,
        longest: &DemandUnit,
        pool: &mut RemainderPool,
        modules: &mut ModuleStockPool,
        constraints: &OptimizationConstraints,
        stats: &mut TaskStats,
        demand_snapshot: &[DemandUnit],
    ) -> Option<CuttingPlan> {
        if let Some(idx) = pool.find_best_single(longest.length) {
            let remainder = pool.use_single(idx);
            log_debug!("group {}: reusing remainder {} for demand {}", self.group_label, remainder.id, longest.uid);
            stats.remainders_reused += 1;
            let length = remainder.length;
            let id = remainder.id.clone();
            return Some(CuttingPlan::from_remainders(id, length, vec![remainder]));
        }

        if constraints.welding_enabled() {
            if let Some(combo) = pool.find_best_combination(longest.length, constraints.max_welding_segments) {
                let used = pool.remove_indices(&combo.indices);
                let source_id = used.iter().map(|r| r.id.as_str()).collect::<Vec<_>>().join("+");
                log_debug!(
                    "group {}: welding {} remainder(s) into {} (length {}) for demand {}",
                    self.group_label, used.len(), source_id, combo.total_length, longest.uid
                );
                stats.welds_performed += 1;
                stats.remainders_reused += used.len() as i64;
                return Some(CuttingPlan::from_remainders(source_id, combo.total_length, used));
            }
        }

        let length = self.lookahead_select(longest.length, modules, demand_snapshot)?;
        let bar = modules.create_bar(length);
        stats.modules_opened += 1;
        stats.module_length_used += bar.length;
        Some(CuttingPlan::from_module(bar.id, bar.specification.clone(), bar.length))
    }

    /// Spec §4.5's lookahead bin selection: simulate a pure first-fit pass
    /// (no mutation) over the current demand list for every candidate
    /// length, then keep the one with the highest utilization, ties broken
    /// by smaller candidate length.
    fn lookahead_select(&self, required: i64, modules: &ModuleStockPool, demand_snapshot: &[DemandUnit]) -> Option<i64> {
        let candidates = modules.candidates_at_least(required);
        if candidates.is_empty() {
            // No catalog length — not even the longest — can hold `required`.
            // Force-selecting an undersized bin here would never pack it,
            // producing a same-size leftover and reopening the same
            // undersized bin forever; returning `None` lets `run` drop the
            // unit as unfulfilled instead (reachable for any W whenever the
            // welding combination search also comes up short).
            return None;
        }
        if candidates.len() == 1 {
            return Some(candidates[0]);
        }

        let mut best: Option<(i64, f64)> = None;
        for &candidate in candidates {
            let mut remaining = candidate;
            let mut packed = 0i64;
            for unit in demand_snapshot {
                if unit.length <= remaining {
                    packed += unit.length;
                    remaining -= unit.length;
                }
            }
            let utilization = packed as f64 / candidate as f64;
            let better = match best {
                None => true,
                Some((best_len, best_util)) => utilization > best_util || (utilization == best_util && candidate < best_len),
            };
            if better {
                best = Some((candidate, utilization));
            }
        }
        best.map(|(len, _)| len)
    }

    /// Spec §4.5 step 3: iterate the demand list in its current order,
    /// assigning every unit whose length still fits. Cuts of the same
    /// design id are aggregated into one `Cut` record with summed
    /// quantity, in first-seen order.
    fn first_fit_pack(&self, mut plan: CuttingPlan, demand: &[DemandUnit]) -> (CuttingPlan, Vec<u64>) {
        let mut remaining = plan.source_length;
        let mut packed_uids = Vec::new();

        for unit in demand {
            if unit.length <= remaining {
                remaining -= unit.length;
                packed_uids.push(unit.uid);
                match plan.cuts.iter_mut().find(|c: &&mut Cut| c.design_id == unit.design_id && c.length == unit.length) {
                    Some(cut) => cut.quantity += 1,
                    None => plan.push_cut(unit.design_id.clone(), unit.length, 1),
                }
            }
        }

        plan.waste = 0;
        (plan, packed_uids)
    }

    /// Spec §4.5 step 4: `evaluateAndProcess`. A non-empty leftover either
    /// becomes immediate waste (below `waste_threshold`, never touches the
    /// pool) or a fresh `Pending` remainder recorded both in the pool and
    /// in the plan's `new_remainders`.
    fn materialize_leftover(&mut self, mut plan: CuttingPlan, pool: &mut RemainderPool, waste_threshold: i64) -> CuttingPlan {
        let leftover = plan.source_length - plan.total_cut_length();
        if leftover <= 0 {
            return plan;
        }

        if leftover < waste_threshold {
            plan.waste = leftover;
            return plan;
        }

        let id = format!("{}_r{}", self.group_label, self.next_remainder_seq);
        self.next_remainder_seq += 1;
        let source_chain = if plan.used_remainders.is_empty() { vec![plan.source_id.clone()] } else { plan.used_remainders.iter().map(|r| r.id.clone()).collect() };
        let parent_id = if source_chain.len() == 1 { source_chain.first().cloned() } else { None };
        let remainder = Remainder::new_pending(
            id,
            leftover,
            self.specification.to_string(),
            self.cross_section,
            source_chain,
            plan.source_length,
            parent_id,
        );
        pool.add(remainder.clone());
        plan.new_remainders.push(remainder);
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(waste_threshold: i64, w: u32) -> OptimizationConstraints {
        OptimizationConstraints { waste_threshold, target_loss_rate: 5.0, time_limit_ms: 5_000, max_welding_segments: w }
    }

    fn far_deadline() -> Instant {
        Instant::now() + std::time::Duration::from_secs(60)
    }

    #[test]
    fn scenario_a_no_welding_perfect_fit() {
        let parts = vec![DesignPart::new("p1", 6000, 2, 100.0, "S")];
        let mut pool = RemainderPool::new();
        let mut modules = ModuleStockPool::new("S_100", "S", 100.0, vec![12000]);
        let mut stats = TaskStats::new();
        let mut packer = Packer::new("S_100", "S", 100.0);

        let plans = packer.run(&parts, &mut pool, &mut modules, &constraints(100, 1), &mut stats, far_deadline());

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].waste, 0);
        assert!(plans[0].new_remainders.is_empty());
        assert_eq!(stats.modules_opened, 1);
        assert_eq!(stats.module_length_used, 12000);
    }

    #[test]
    fn scenario_b_reuses_single_remainder() {
        let parts = vec![
            DesignPart::new("p1", 7000, 1, 100.0, "S"),
            DesignPart::new("p2", 4000, 1, 100.0, "S"),
        ];
        let mut pool = RemainderPool::new();
        let mut modules = ModuleStockPool::new("S_100", "S", 100.0, vec![12000]);
        let mut stats = TaskStats::new();
        let mut packer = Packer::new("S_100", "S", 100.0);

        let plans = packer.run(&parts, &mut pool, &mut modules, &constraints(100, 1), &mut stats, far_deadline());

        assert_eq!(plans.len(), 2);
        assert_eq!(stats.remainders_reused, 1);
        let finalized = pool.finalize(100);
        let real: Vec<_> = finalized.iter().filter(|r| r.kind == crate::models::RemainderType::Real).collect();
        assert_eq!(real.len(), 1);
        assert_eq!(real[0].length, 1000);
    }

    #[test]
    fn scenario_c_welds_two_offcuts() {
        let parts = vec![DesignPart::new("p", 8000, 1, 100.0, "S")];
        let mut pool = RemainderPool::new();
        pool.add(Remainder::new_pending("r1", 4500, "S", 100.0, vec!["m1".into()], 12000, Some("m1".into())));
        pool.add(Remainder::new_pending("r2", 4500, "S", 100.0, vec!["m2".into()], 12000, Some("m2".into())));
        let mut modules = ModuleStockPool::new("S_100", "S", 100.0, vec![5000, 6000]);
        let mut stats = TaskStats::new();
        let mut packer = Packer::new("S_100", "S", 100.0);

        let plans = packer.run(&parts, &mut pool, &mut modules, &constraints(100, 2), &mut stats, far_deadline());

        assert_eq!(plans.len(), 1);
        assert!(plans[0].is_weld());
        assert_eq!(plans[0].source_length, 9000);
        assert_eq!(stats.welds_performed, 1);
        let finalized = pool.finalize(100);
        assert_eq!(finalized.len(), 1);
        assert_eq!(finalized[0].length, 1000);
    }

    #[test]
    fn lookahead_prefers_highest_utilization() {
        let modules = ModuleStockPool::new("S_100", "S", 100.0, vec![4000, 9000]);
        let demand = vec![DemandUnit { uid: 0, design_id: "p1".into(), length: 4000 }];
        let packer = Packer::new("S_100", "S", 100.0);
        let picked = packer.lookahead_select(4000, &modules, &demand).unwrap();
        assert_eq!(picked, 4000);
    }

    #[test]
    fn unfulfillable_demand_does_not_loop_forever() {
        let parts = vec![DesignPart::new("p1", 50_000, 1, 100.0, "S")];
        let mut pool = RemainderPool::new();
        let mut modules = ModuleStockPool::new("S_100", "S", 100.0, vec![12000]);
        let mut stats = TaskStats::new();
        let mut packer = Packer::new("S_100", "S", 100.0);

        let plans = packer.run(&parts, &mut pool, &mut modules, &constraints(100, 1), &mut stats, far_deadline());

        assert!(plans.is_empty());
        assert_eq!(stats.unfulfilled, 1);
    }
}
