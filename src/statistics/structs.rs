use serde::{Deserialize, Serialize};

/// Per-group derived figures (spec §4.10). Read-only downstream: nothing
/// recomputes these once `StatisticsCalculator` has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub group_key: String,
    pub specification: String,
    pub cross_section: f64,
    pub total_material: i64,
    pub design_length_total: i64,
    pub waste_total: i64,
    pub real_remainder_total: i64,
    pub pseudo_remainder_total: i64,
    pub loss_rate: f64,
    pub utilization: f64,
    pub modules_opened: i64,
    pub welds_performed: i64,
    pub unfulfilled: i64,
}

/// Totals across every group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_module_used: i64,
    pub total_material: i64,
    pub total_design_length: i64,
    pub total_waste: i64,
    pub total_real_remainder: i64,
    pub total_pseudo_remainder: i64,
    pub overall_loss_rate: f64,
    pub unfulfilled: i64,
}

/// One row per group, for host-side chart rendering (spec §4.10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataRow {
    pub specification: String,
    pub loss_rate: f64,
    pub modules_used: i64,
    pub waste: i64,
    pub real_remainder: i64,
    pub pseudo_remainder: i64,
}

/// Per-length module-usage breakdown with per-group subtotals and a grand
/// total (spec §4.10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleUsageEntry {
    pub length: i64,
    /// `(group_key, count)`, ascending by group key.
    pub by_group: Vec<(String, u64)>,
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleUsageStats {
    /// Ascending by length.
    pub by_length: Vec<ModuleUsageEntry>,
    pub grand_total: u64,
}

/// Produced vs. requested, per design id (spec §4.10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementEntry {
    pub design_id: String,
    pub requested: i64,
    pub produced: i64,
    pub satisfied: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementValidation {
    pub entries: Vec<RequirementEntry>,
    pub all_satisfied: bool,
    pub unfulfilled_total: i64,
}

/// Global counts/lengths of surviving remainders by lifecycle type
/// (informational; audits weld/reuse activity per spec §6's
/// `totalPseudoRemainder` note).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemainderStats {
    pub real_count: i64,
    pub real_length_total: i64,
    pub pseudo_count: i64,
    pub pseudo_length_total: i64,
    pub waste_count: i64,
    pub waste_length_total: i64,
}

/// One violation of the conservation identity in spec §4.10/§8.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyIssue {
    pub group_key: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyCheck {
    pub is_consistent: bool,
    pub issues: Vec<ConsistencyIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteStats {
    pub global: GlobalStats,
    pub chart_data: Vec<ChartDataRow>,
    pub requirement_validation: RequirementValidation,
    pub module_usage_stats: ModuleUsageStats,
    pub specification_details: Vec<GroupStats>,
    pub remainder_stats: RemainderStats,
    pub consistency_check: ConsistencyCheck,
}
