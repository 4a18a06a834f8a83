//! Derives per-group and global totals, the consistency check, and the
//! host-facing reporting views (chart data, module-usage breakdown,
//! requirement verification) from the finalized group outcomes (spec
//! §4.10). Runs once, after `RemainderFinalizer`; never recomputed
//! downstream by `ResultBuilder`.

use super::structs::{
    ChartDataRow, CompleteStats, ConsistencyCheck, ConsistencyIssue, GlobalStats, GroupStats,
    ModuleUsageEntry, ModuleUsageStats, RemainderStats, RequirementEntry, RequirementValidation,
};
use crate::group_optimizer::GroupOutcome;
use crate::models::{DesignPart, GroupKey, RemainderType};
use std::collections::BTreeMap;

pub struct StatisticsCalculator;

impl StatisticsCalculator {
    pub fn calculate(
        outcomes: &BTreeMap<GroupKey, GroupOutcome>,
        design_parts: &[DesignPart],
    ) -> CompleteStats {
        let mut specification_details = Vec::with_capacity(outcomes.len());
        let mut chart_data = Vec::with_capacity(outcomes.len());
        let mut global = GlobalStats::default();
        let mut remainder_stats = RemainderStats::default();
        let mut consistency_issues = Vec::new();
        let mut module_usage_by_length: BTreeMap<i64, Vec<(String, u64)>> = BTreeMap::new();
        let mut produced_by_design: BTreeMap<String, i64> = BTreeMap::new();

        // `outcomes` is a `BTreeMap<GroupKey, _>`, so this iteration — and
        // therefore every downstream sum and chart row — always visits
        // groups in the same sorted order (spec §5 determinism).
        for (key, outcome) in outcomes {
            let group_key = key.to_string();
            let total_material = outcome.modules.total_material();
            let mut design_length_total = 0i64;
            let mut waste_total = 0i64;
            let mut real_remainder_total = 0i64;
            let mut pseudo_remainder_total = 0i64;

            for plan in &outcome.solution.cutting_plans {
                design_length_total += plan.total_cut_length();
                waste_total += plan.waste;
                for remainder in &plan.new_remainders {
                    match remainder.kind {
                        RemainderType::Real => {
                            real_remainder_total += remainder.length;
                            remainder_stats.real_count += 1;
                            remainder_stats.real_length_total += remainder.length;
                        }
                        RemainderType::Waste => {
                            waste_total += remainder.length;
                            remainder_stats.waste_count += 1;
                            remainder_stats.waste_length_total += remainder.length;
                        }
                        RemainderType::Pseudo => {
                            pseudo_remainder_total += remainder.length;
                            remainder_stats.pseudo_count += 1;
                            remainder_stats.pseudo_length_total += remainder.length;
                        }
                        RemainderType::Pending => {
                            // The finalizer guarantees no `Pending` remainder
                            // survives (spec §8 invariant 3); treat it as
                            // waste defensively rather than drop it silently.
                            waste_total += remainder.length;
                        }
                    }
                }
                for cut in &plan.cuts {
                    *produced_by_design.entry(cut.design_id.clone()).or_insert(0) += cut.quantity;
                }
            }

            let loss_rate = percent(waste_total + real_remainder_total, total_material);
            let utilization = 100.0 - loss_rate;

            if total_material != design_length_total + real_remainder_total + waste_total {
                consistency_issues.push(ConsistencyIssue {
                    group_key: group_key.clone(),
                    message: format!(
                        "material {total_material} != design {design_length_total} + real {real_remainder_total} + waste {waste_total}"
                    ),
                });
            }

            for (length, count) in outcome.modules.usage_breakdown() {
                module_usage_by_length.entry(length).or_default().push((group_key.clone(), count));
            }

            global.total_module_used += outcome.modules.total_opened() as i64;
            global.total_material += total_material;
            global.total_design_length += design_length_total;
            global.total_waste += waste_total;
            global.total_real_remainder += real_remainder_total;
            global.total_pseudo_remainder += pseudo_remainder_total;
            global.unfulfilled += outcome.solution.task_stats.unfulfilled;

            chart_data.push(ChartDataRow {
                specification: key.specification.clone(),
                loss_rate,
                modules_used: outcome.modules.total_opened() as i64,
                waste: waste_total,
                real_remainder: real_remainder_total,
                pseudo_remainder: pseudo_remainder_total,
            });

            specification_details.push(GroupStats {
                group_key,
                specification: key.specification.clone(),
                cross_section: key.cross_section(),
                total_material,
                design_length_total,
                waste_total,
                real_remainder_total,
                pseudo_remainder_total,
                loss_rate,
                utilization,
                modules_opened: outcome.modules.total_opened() as i64,
                welds_performed: outcome.solution.task_stats.welds_performed,
                unfulfilled: outcome.solution.task_stats.unfulfilled,
            });
        }

        global.overall_loss_rate = percent(global.total_waste + global.total_real_remainder, global.total_material);

        let module_usage_stats = Self::build_module_usage(module_usage_by_length);
        let requirement_validation = Self::build_requirement_validation(design_parts, &produced_by_design, global.unfulfilled);
        let consistency_check = ConsistencyCheck { is_consistent: consistency_issues.is_empty(), issues: consistency_issues };

        CompleteStats {
            global,
            chart_data,
            requirement_validation,
            module_usage_stats,
            specification_details,
            remainder_stats,
            consistency_check,
        }
    }

    fn build_module_usage(by_length: BTreeMap<i64, Vec<(String, u64)>>) -> ModuleUsageStats {
        let mut grand_total = 0u64;
        let by_length = by_length
            .into_iter()
            .map(|(length, by_group)| {
                let total_count: u64 = by_group.iter().map(|(_, c)| c).sum();
                grand_total += total_count;
                ModuleUsageEntry { length, by_group, total_count }
            })
            .collect();
        ModuleUsageStats { by_length, grand_total }
    }

    /// Produced vs. requested per design id (spec §4.10, §7
    /// `TIMEOUT_WARNING` path: `all_satisfied = false` whenever any part's
    /// produced quantity falls short, which only happens when the group's
    /// time budget expired).
    fn build_requirement_validation(
        design_parts: &[DesignPart],
        produced_by_design: &BTreeMap<String, i64>,
        unfulfilled_total: i64,
    ) -> RequirementValidation {
        let mut entries = Vec::with_capacity(design_parts.len());
        let mut all_satisfied = true;

        for part in design_parts {
            let produced = produced_by_design.get(&part.id).copied().unwrap_or(0);
            let satisfied = produced >= part.quantity;
            all_satisfied &= satisfied;
            entries.push(RequirementEntry { design_id: part.id.clone(), requested: part.quantity, produced, satisfied });
        }

        RequirementValidation { entries, all_satisfied, unfulfilled_total }
    }
}

fn percent(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let raw = numerator as f64 / denominator as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group_optimizer::GroupOptimizer;
    use crate::models::OptimizationConstraints;

    #[test]
    fn scenario_a_zero_loss_rate() {
        let key = GroupKey::new("S", 100.0);
        let parts = vec![DesignPart::new("p1", 6000, 2, 100.0, "S")];
        let outcome = GroupOptimizer::run(&key, &parts, &[12000], &OptimizationConstraints { max_welding_segments: 1, ..Default::default() });

        let mut outcomes = BTreeMap::new();
        outcomes.insert(key, outcome);
        let stats = StatisticsCalculator::calculate(&outcomes, &parts);

        assert_eq!(stats.global.total_module_used, 1);
        assert_eq!(stats.global.total_material, 12000);
        assert_eq!(stats.global.total_waste, 0);
        assert_eq!(stats.global.overall_loss_rate, 0.0);
        assert!(stats.consistency_check.is_consistent);
        assert!(stats.requirement_validation.all_satisfied);
    }

    #[test]
    fn percent_rounds_to_two_decimals() {
        assert_eq!(percent(1000, 12000), 8.33);
    }

    #[test]
    fn percent_of_zero_denominator_is_zero_not_nan() {
        assert_eq!(percent(0, 0), 0.0);
    }
}
