//! Pre-flight feasibility checking (spec §4.1). Runs before any group is
//! touched: a fatal violation here means the optimizer is never invoked.

use crate::constants::DataLimits;
use crate::errors::Violation;
use crate::models::{DesignPart, ModuleBarCatalogEntry, OptimizationConstraints};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
    pub suggestions: Vec<String>,
    pub warnings: Vec<String>,
    /// `true` when the violations came from the welding-feasibility check
    /// (spec §7 `CONSTRAINT_ERROR`) rather than row/schema checks (spec §7
    /// `VALIDATION_ERROR`). The two checks are mutually exclusive per call
    /// (spec §4.1 runs feasibility only when row checks found nothing), so
    /// a single flag is enough to classify the whole report.
    pub is_constraint_violation: bool,
}

pub struct ConstraintValidator;

impl ConstraintValidator {
    /// Runs the checks of spec §4.1 in order. A non-empty `violations` list
    /// means `is_valid == false` and the caller must not invoke the
    /// optimizer (spec §7: "row-level validation failures abort before work
    /// starts").
    pub fn validate(
        parts: &[DesignPart],
        modules: &[ModuleBarCatalogEntry],
        constraints: &OptimizationConstraints,
    ) -> ValidationReport {
        let mut report = ValidationReport { is_valid: true, ..Default::default() };

        Self::check_catalogs_and_rows(parts, modules, &mut report);
        // A catalog-level failure (empty inputs, non-positive rows) makes the
        // welding-feasibility check meaningless — there is nothing to check.
        if report.violations.is_empty() {
            Self::check_welding_feasibility(parts, modules, constraints, &mut report);
        }

        report.is_valid = report.violations.is_empty();
        report
    }

    fn check_catalogs_and_rows(parts: &[DesignPart], modules: &[ModuleBarCatalogEntry], report: &mut ValidationReport) {
        if parts.is_empty() {
            report.violations.push(Violation::new("designParts", "design part catalog is empty"));
        }
        if modules.is_empty() {
            report.violations.push(Violation::new("moduleBars", "module bar catalog is empty"));
        }
        if parts.len() > DataLimits::MAX_DESIGN_PARTS {
            report.violations.push(Violation::new(
                "designParts",
                format!("exceeds the configured limit of {} rows", DataLimits::MAX_DESIGN_PARTS),
            ));
        }
        if modules.len() > DataLimits::MAX_MODULE_BARS {
            report.violations.push(Violation::new(
                "moduleBars",
                format!("exceeds the configured limit of {} rows", DataLimits::MAX_MODULE_BARS),
            ));
        }

        for (i, part) in parts.iter().enumerate() {
            if part.length <= 0 {
                report.violations.push(Violation::new(format!("designParts[{i}].length"), "must be positive"));
            }
            if part.length > DataLimits::MAX_LENGTH_MM {
                report.violations.push(Violation::new(format!("designParts[{i}].length"), "exceeds the configured maximum length"));
            }
            if part.quantity <= 0 {
                report.violations.push(Violation::new(format!("designParts[{i}].quantity"), "must be positive"));
            }
            if part.quantity > DataLimits::MAX_QUANTITY_PER_PART {
                report.violations.push(Violation::new(format!("designParts[{i}].quantity"), "exceeds the configured maximum quantity"));
            }
            if part.cross_section <= 0.0 {
                report.violations.push(Violation::new(format!("designParts[{i}].crossSection"), "must be positive"));
            }
            if part.specification.trim().is_empty() {
                report.violations.push(Violation::new(format!("designParts[{i}].specification"), "must not be empty"));
            }
        }

        for (i, module) in modules.iter().enumerate() {
            if module.length <= 0 {
                report.violations.push(Violation::new(format!("moduleBars[{i}].length"), "must be positive"));
            }
            if module.length > DataLimits::MAX_LENGTH_MM {
                report.violations.push(Violation::new(format!("moduleBars[{i}].length"), "exceeds the configured maximum length"));
            }
        }
    }

    /// Spec §4.1 check 2: if `W=1` and any part is longer than every
    /// available module, the optimizer cannot possibly produce it.
    fn check_welding_feasibility(
        parts: &[DesignPart],
        modules: &[ModuleBarCatalogEntry],
        constraints: &OptimizationConstraints,
        report: &mut ValidationReport,
    ) {
        if constraints.welding_enabled() {
            return;
        }
        let Some(max_module_length) = modules.iter().map(|m| m.length).max() else { return };

        let offending: Vec<&DesignPart> = parts.iter().filter(|p| p.length > max_module_length).collect();
        if offending.is_empty() {
            return;
        }

        let longest_offending = offending.iter().map(|p| p.length).max().unwrap_or(0);
        let ids = offending.iter().map(|p| p.id.clone()).collect::<Vec<_>>().join(", ");
        report.is_constraint_violation = true;
        report.violations.push(Violation::new(
            "designParts",
            format!(
                "{} part(s) exceed the longest available module ({max_module_length}mm) and welding is disabled: {ids}",
                offending.len()
            ),
        ));

        report.suggestions.push(format!(
            "add a module bar of length >= {longest_offending}mm"
        ));
        let min_w = (longest_offending as f64 / max_module_length as f64).ceil() as u32;
        report.suggestions.push(format!("raise maxWeldingSegments to at least {}", min_w.max(2)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(length: i64) -> ModuleBarCatalogEntry {
        ModuleBarCatalogEntry::new("m1", "bar", length)
    }

    #[test]
    fn scenario_f_infeasible_welding_constraint() {
        // spec §8 scenario F
        let parts = vec![DesignPart::new("p1", 20000, 1, 100.0, "S355")];
        let modules = vec![module(12000)];
        let constraints = OptimizationConstraints { max_welding_segments: 1, ..Default::default() };

        let report = ConstraintValidator::validate(&parts, &modules, &constraints);
        assert!(!report.is_valid);
        assert_eq!(report.suggestions.len(), 2);
    }

    #[test]
    fn welding_enabled_skips_the_feasibility_check() {
        let parts = vec![DesignPart::new("p1", 20000, 1, 100.0, "S355")];
        let modules = vec![module(12000)];
        let constraints = OptimizationConstraints { max_welding_segments: 2, ..Default::default() };

        let report = ConstraintValidator::validate(&parts, &modules, &constraints);
        assert!(report.is_valid);
    }

    #[test]
    fn empty_catalogs_are_fatal() {
        let constraints = OptimizationConstraints::default();
        let report = ConstraintValidator::validate(&[], &[], &constraints);
        assert!(!report.is_valid);
        assert_eq!(report.violations.len(), 2);
    }
}
