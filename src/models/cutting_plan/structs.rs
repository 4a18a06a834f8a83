use crate::models::remainder::Remainder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Module,
    Remainder,
}

/// One cut made out of a source bar: a design id, the length cut, and how
/// many instances of it were taken from this one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    pub design_id: String,
    pub length: i64,
    pub quantity: i64,
}

/// How one source bar (fresh module, single remainder, or a welded
/// combination of 2..W remainders) was sliced (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingPlan {
    pub source_type: SourceType,
    /// The module/remainder id, or a compound `a+b+c` id for welds.
    pub source_id: String,
    pub source_length: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_length: Option<i64>,
    pub cuts: Vec<Cut>,
    /// At most one non-waste remainder per plan (spec §6).
    pub new_remainders: Vec<Remainder>,
    /// Empty for `Module` sources; the consumed remainder(s) for `Remainder`
    /// sources (1 for a single pick, 2..W for a weld).
    pub used_remainders: Vec<Remainder>,
    pub waste: i64,
}
