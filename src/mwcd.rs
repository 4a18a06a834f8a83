//! Intra-group local search: swap a surviving real-remainder plan (MW) for
//! a welded-combination plan (CD) whenever the swap's net benefit clears
//! the configured floor (spec §4.6).

use crate::constants::MwcdConstants;
use crate::models::{CuttingPlan, OptimizationConstraints};
use crate::pools::RemainderPool;
use crate::{log_debug, log_info, log_warn};
use std::time::Instant;

/// A single feasible swap found during a scan round.
struct Candidate {
    /// Index into the plan list of the MW plan supplying `m`.
    mw_index: usize,
    /// Index into the plan list of the CD plan being replaced.
    cd_index: usize,
    benefit: i64,
}

pub struct MwcdOptimizer<'a> {
    group_label: &'a str,
}

impl<'a> MwcdOptimizer<'a> {
    pub fn new(group_label: &'a str) -> Self {
        Self { group_label }
    }

    /// Runs up to `MwcdConstants::MAX_ROUNDS` rounds, executing the single
    /// highest-benefit swap per round and re-scanning afterward (spec
    /// §4.6). Stops early once no candidate clears the benefit floor, or
    /// once `deadline` passes — each round head is a suspension point, the
    /// same as the Packer loop (spec §4.7/§5).
    pub fn optimize(&self, plans: &mut Vec<CuttingPlan>, pool: &mut RemainderPool, constraints: &OptimizationConstraints, deadline: Instant) {
        if !constraints.welding_enabled() {
            return;
        }

        for round in 0..MwcdConstants::MAX_ROUNDS {
            if Instant::now() >= deadline {
                log_warn!("group {}: time budget exhausted before MWCD round {} could run", self.group_label, round);
                break;
            }
            let candidates = self.scan(plans, constraints.waste_threshold);
            let Some(best) = candidates.into_iter().max_by_key(|c| c.benefit) else { break };
            if best.benefit <= MwcdConstants::BENEFIT_FLOOR_MM {
                break;
            }
            log_info!(
                "group {}: MWCD round {} swapping plan {} for plan {} (benefit {}mm)",
                self.group_label, round, plans[best.cd_index].source_id, plans[best.mw_index].source_id, best.benefit
            );
            self.execute(plans, pool, best);
        }
    }

    /// Collects every feasible `(MW, CD)` pair this round, per the
    /// predicate in spec §4.6.
    fn scan(&self, plans: &[CuttingPlan], waste_threshold: i64) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for (mw_index, mw) in plans.iter().enumerate() {
            let Some(m) = mw.new_remainders.first() else { continue };
            if !m.is_pending() {
                continue;
            }

            for (cd_index, cd) in plans.iter().enumerate() {
                if mw_index == cd_index || !cd.is_weld() {
                    continue;
                }
                let cd_cuts_total = cd.total_cut_length();
                if m.length < cd_cuts_total {
                    continue;
                }
                let segments = cd.segments();
                if segments < 2 {
                    continue;
                }
                let benefit = (segments as i64 - 1) * MwcdConstants::WELD_UNIT_MM - (m.length - cd_cuts_total).abs();
                if benefit <= 0 {
                    continue;
                }
                let post_swap_waste = m.length - cd_cuts_total;
                if post_swap_waste >= waste_threshold {
                    continue;
                }
                candidates.push(Candidate { mw_index, cd_index, benefit });
            }
        }

        candidates
    }

    /// Applies a single swap: the CD plan is replaced by a new
    /// remainder-sourced plan that reuses `m`'s cuts; `m` becomes PSEUDO;
    /// CD's former remainders are revived to PENDING and re-enter the pool.
    fn execute(&self, plans: &mut Vec<CuttingPlan>, pool: &mut RemainderPool, candidate: Candidate) {
        let cd = plans.remove(candidate.cd_index);
        // Removing `cd` may have shifted `mw_index` down by one.
        let mw_index = if candidate.mw_index > candidate.cd_index { candidate.mw_index - 1 } else { candidate.mw_index };

        let mw = &mut plans[mw_index];
        let mut m = mw.new_remainders.remove(0);
        m.mark_pseudo();
        let m_length = m.length;
        let m_id = m.id.clone();

        let mut new_plan = CuttingPlan::from_remainders(m_id, m_length, vec![m]);
        new_plan.cuts = cd.cuts.clone();
        new_plan.waste = m_length - cd.total_cut_length();

        let revived_count = cd.used_remainders.len();
        for consumed in cd.used_remainders {
            pool.revive(consumed);
        }

        log_debug!("group {}: revived {} remainder(s) consumed by the replaced weld", self.group_label, revived_count);
        plans.push(new_plan);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Remainder;

    fn constraints(w: u32) -> OptimizationConstraints {
        OptimizationConstraints { waste_threshold: 100, target_loss_rate: 5.0, time_limit_ms: 5_000, max_welding_segments: w }
    }

    fn far_deadline() -> Instant {
        Instant::now() + std::time::Duration::from_secs(60)
    }

    #[test]
    fn scenario_d_no_swap_when_benefit_is_negative() {
        let mw_remainder = Remainder::new_pending("m1", 4800, "S", 100.0, vec!["mod1".into()], 12000, Some("mod1".into()));
        let mut mw_plan = CuttingPlan::from_module("mod1", "S", 12000);
        mw_plan.new_remainders.push(mw_remainder);

        let r_a = Remainder::new_pending("ra", 2500, "S", 100.0, vec![], 12000, None);
        let r_b = Remainder::new_pending("rb", 2400, "S", 100.0, vec![], 12000, None);
        let mut cd_plan = CuttingPlan::from_remainders("ra+rb", 4900, vec![r_a, r_b]);
        cd_plan.push_cut("p1", 4700, 1);

        let mut plans = vec![mw_plan, cd_plan];
        let mut pool = RemainderPool::new();
        let optimizer = MwcdOptimizer::new("S_100");
        optimizer.optimize(&mut plans, &mut pool, &constraints(2), far_deadline());

        assert_eq!(plans.len(), 2, "benefit is negative; no swap should fire");
    }

    #[test]
    fn swap_fires_when_benefit_clears_the_floor() {
        // segments=3 -> weld cost credit = (3-1)*50 = 100; |m - cuts| = 0 -> benefit 100 > floor 50.
        let mw_remainder = Remainder::new_pending("m1", 9000, "S", 100.0, vec!["mod1".into()], 12000, Some("mod1".into()));
        let mut mw_plan = CuttingPlan::from_module("mod1", "S", 12000);
        mw_plan.new_remainders.push(mw_remainder);

        let r_a = Remainder::new_pending("ra", 3000, "S", 100.0, vec![], 12000, None);
        let r_b = Remainder::new_pending("rb", 3000, "S", 100.0, vec![], 12000, None);
        let r_c = Remainder::new_pending("rc", 3000, "S", 100.0, vec![], 12000, None);
        let mut cd_plan = CuttingPlan::from_remainders("ra+rb+rc", 9000, vec![r_a, r_b, r_c]);
        cd_plan.push_cut("p1", 9000, 1);

        let mut plans = vec![mw_plan, cd_plan];
        let mut pool = RemainderPool::new();
        let optimizer = MwcdOptimizer::new("S_100");
        optimizer.optimize(&mut plans, &mut pool, &constraints(3), far_deadline());

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[1].cuts[0].length, 9000);
        assert_eq!(pool.len(), 3, "CD's three consumed remainders should be revived to the pool");
    }
}
