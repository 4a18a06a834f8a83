//! Global pass after every group joins (spec §4.9). Runs `RemainderPool::
//! finalize` exactly once per group, then reconciles each
//! `CuttingPlan.new_remainders` entry against the finalized pool.
//!
//! A `Remainder` is represented independently in the pool and in the
//! `CuttingPlan` that produced it (spec §9's arena-by-id, not a shared
//! mutable object), so a remainder consumed by a *later* plan never has its
//! producing plan's copy updated in place. This pass is what reconciles the
//! two: if the remainder's id still exists in the group's finalized pool, it
//! was never consumed — copy the pool's definitive `Real`/`Waste` type back
//! onto the plan's copy. If the id is gone, it was consumed by some later
//! plan (whose own `used_remainders` entry already carries `Pseudo`) —
//! stamp the producing plan's stale copy `Pseudo` too, so every remainder in
//! the result agrees on its own state (spec §8 invariant 3: no `Pending`
//! remainder survives).

use crate::group_optimizer::GroupOutcome;
use crate::models::{GroupKey, RemainderType};
use std::collections::{BTreeMap, HashMap};

pub struct RemainderFinalizer;

impl RemainderFinalizer {
    pub fn finalize(outcomes: &mut BTreeMap<GroupKey, GroupOutcome>, waste_threshold: i64) {
        for outcome in outcomes.values_mut() {
            let finalized = outcome.pool.finalize(waste_threshold);
            let kind_by_id: HashMap<&str, RemainderType> =
                finalized.iter().map(|r| (r.id.as_str(), r.kind)).collect();

            for plan in &mut outcome.solution.cutting_plans {
                for remainder in &mut plan.new_remainders {
                    if !remainder.is_pending() {
                        continue;
                    }
                    match kind_by_id.get(remainder.id.as_str()) {
                        Some(&kind) => remainder.kind = kind,
                        None => remainder.mark_pseudo(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group_optimizer::GroupOptimizer;
    use crate::models::{DesignPart, OptimizationConstraints, RemainderType};

    #[test]
    fn pending_remainders_become_real_or_waste() {
        let key = GroupKey::new("S", 100.0);
        let parts = vec![
            DesignPart::new("p1", 7000, 1, 100.0, "S"),
            DesignPart::new("p2", 4000, 1, 100.0, "S"),
        ];
        let mut outcomes = BTreeMap::new();
        let constraints = OptimizationConstraints { max_welding_segments: 1, ..Default::default() };
        outcomes.insert(key.clone(), GroupOptimizer::run(&key, &parts, &[12000], &constraints));

        RemainderFinalizer::finalize(&mut outcomes, 100);

        let outcome = &outcomes[&key];
        let all_remainders: Vec<_> = outcome
            .solution
            .cutting_plans
            .iter()
            .flat_map(|p| p.new_remainders.iter())
            .collect();
        assert!(all_remainders.iter().all(|r| r.kind != RemainderType::Pending));
        assert_eq!(outcome.pool.len(), 0, "finalize drains the pool");
    }
}
