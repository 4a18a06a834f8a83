//! Assembles `OptimizeResult` by copying statistics verbatim — it never
//! recomputes them (spec §4.11). A consuming builder with `set_*` /
//! `build()`, matching the teacher's `CalculationResponseBuilder` shape.

use super::structs::{LossRateValidation, OptimizeResult, ProcessingStatus};
use crate::errors::{AppError, CoreError, ErrorEnvelope, Result};
use crate::models::GroupSolution;
use crate::statistics::CompleteStats;
use crate::validation::ValidationReport;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct ResultBuilder {
    solutions: Option<BTreeMap<String, GroupSolution>>,
    complete_stats: Option<CompleteStats>,
    constraint_validation: Option<ValidationReport>,
    execution_time_ms: Option<u64>,
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_solutions(mut self, solutions: BTreeMap<String, GroupSolution>) -> Self {
        self.solutions = Some(solutions);
        self
    }

    pub fn set_complete_stats(mut self, stats: CompleteStats) -> Self {
        self.complete_stats = Some(stats);
        self
    }

    pub fn set_constraint_validation(mut self, report: ValidationReport) -> Self {
        self.constraint_validation = Some(report);
        self
    }

    pub fn set_execution_time_ms(mut self, ms: u64) -> Self {
        self.execution_time_ms = Some(ms);
        self
    }

    /// A request that `ConstraintValidator` rejected outright never reaches
    /// the optimizer (spec §7): this builds the short-circuit result
    /// carrying the `ErrorEnvelope` in place of any solutions.
    pub fn build_rejected(report: ValidationReport, execution_time_ms: u64) -> OptimizeResult {
        let envelope = ErrorEnvelope::from_validation_report(&report);
        OptimizeResult {
            success: false,
            error: Some(envelope),
            solutions: BTreeMap::new(),
            total_module_used: 0,
            total_material: 0,
            total_waste: 0,
            total_real_remainder: 0,
            total_pseudo_remainder: 0,
            total_loss_rate: 0.0,
            execution_time_ms,
            loss_rate_validation: LossRateValidation::ok(),
            constraint_validation: report,
            complete_stats: None,
            processing_status: ProcessingStatus {
                is_completed: false,
                remainders_finalized: false,
                ready_for_rendering: false,
                data_consistency_checked: false,
            },
        }
    }

    /// Builds the success path. Fails only when a required field was never
    /// set — a programmer error in the caller, per spec §6; `optimize()`
    /// always supplies every field, so this is never reachable in practice.
    pub fn build(self) -> Result<OptimizeResult> {
        let solutions = self.solutions.ok_or_else(|| {
            AppError::Core(CoreError::Internal { message: "ResultBuilder missing solutions".to_string() })
        })?;
        let stats = self.complete_stats.ok_or_else(|| {
            AppError::Core(CoreError::Internal { message: "ResultBuilder missing complete_stats".to_string() })
        })?;
        let constraint_validation = self.constraint_validation.ok_or_else(|| {
            AppError::Core(CoreError::Internal { message: "ResultBuilder missing constraint_validation".to_string() })
        })?;
        let execution_time_ms = self.execution_time_ms.unwrap_or(0);

        let loss_rate_validation = if stats.global.total_material > 0 {
            LossRateValidation::ok()
        } else {
            LossRateValidation::invalid("no module material was consumed; loss rate is not meaningful")
        };

        Ok(OptimizeResult {
            success: true,
            error: None,
            total_module_used: stats.global.total_module_used,
            total_material: stats.global.total_material,
            total_waste: stats.global.total_waste,
            total_real_remainder: stats.global.total_real_remainder,
            total_pseudo_remainder: stats.global.total_pseudo_remainder,
            total_loss_rate: stats.global.overall_loss_rate,
            execution_time_ms,
            loss_rate_validation,
            constraint_validation,
            processing_status: ProcessingStatus {
                is_completed: true,
                remainders_finalized: true,
                ready_for_rendering: true,
                data_consistency_checked: stats.consistency_check.is_consistent,
            },
            complete_stats: Some(stats),
            solutions,
        })
    }
}
