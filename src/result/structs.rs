use crate::errors::ErrorEnvelope;
use crate::models::GroupSolution;
use crate::statistics::CompleteStats;
use crate::validation::ValidationReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sanity check on the computed overall loss rate (spec §6
/// `lossRateValidation`). `targetLossRate` is advisory only (spec §9 open
/// question) and never gates validity here — this only guards against a
/// degenerate run (e.g. zero material processed) producing a meaningless
/// rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossRateValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LossRateValidation {
    pub fn ok() -> Self {
        Self { is_valid: true, error_message: None }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self { is_valid: false, error_message: Some(message.into()) }
    }
}

/// Spec §4.11's `processingStatus` flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStatus {
    pub is_completed: bool,
    pub remainders_finalized: bool,
    pub ready_for_rendering: bool,
    pub data_consistency_checked: bool,
}

/// The externally consumed result object (spec §6 `OptimizeResult`). Its
/// `error` field, when present, is the `{success:false, error, errorType,
/// suggestions, severity}` envelope of spec §6/§7 (`ErrorEnvelope`, shared
/// with the `errors` module so every rejection path — row-level validation
/// here, or a wrapped `AppError` elsewhere — produces the same shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEnvelope>,
    /// Keyed by `GroupKey::to_string()`, since JSON object keys must be
    /// strings (spec §6: `groupKey -> GroupSolution`).
    pub solutions: BTreeMap<String, GroupSolution>,
    pub total_module_used: i64,
    pub total_material: i64,
    pub total_waste: i64,
    pub total_real_remainder: i64,
    pub total_pseudo_remainder: i64,
    pub total_loss_rate: f64,
    pub execution_time_ms: u64,
    pub loss_rate_validation: LossRateValidation,
    pub constraint_validation: ValidationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_stats: Option<CompleteStats>,
    pub processing_status: ProcessingStatus,
}
