use super::structs::{Cut, CuttingPlan, SourceType};
use crate::models::remainder::Remainder;

impl CuttingPlan {
    pub fn from_module(
        module_id: impl Into<String>,
        module_type: impl Into<String>,
        module_length: i64,
    ) -> Self {
        Self {
            source_type: SourceType::Module,
            source_id: module_id.into(),
            source_length: module_length,
            module_type: Some(module_type.into()),
            module_length: Some(module_length),
            cuts: Vec::new(),
            new_remainders: Vec::new(),
            used_remainders: Vec::new(),
            waste: 0,
        }
    }

    pub fn from_remainders(source_id: impl Into<String>, source_length: i64, used: Vec<Remainder>) -> Self {
        Self {
            source_type: SourceType::Remainder,
            source_id: source_id.into(),
            source_length,
            module_type: None,
            module_length: None,
            cuts: Vec::new(),
            new_remainders: Vec::new(),
            used_remainders: used,
            waste: 0,
        }
    }

    pub fn push_cut(&mut self, design_id: impl Into<String>, length: i64, quantity: i64) {
        self.cuts.push(Cut { design_id: design_id.into(), length, quantity });
    }

    /// Number of module/remainder segments welded to form this plan's
    /// source bar (spec §4.6's CD.segments; 1 for a fresh module or a single
    /// remainder, 2..W for a welded combination).
    pub fn segments(&self) -> usize {
        match self.source_type {
            SourceType::Module => 1,
            SourceType::Remainder => self.used_remainders.len().max(1),
        }
    }

    pub fn is_weld(&self) -> bool {
        self.source_type == SourceType::Remainder && self.used_remainders.len() >= 2
    }

    pub fn total_cut_length(&self) -> i64 {
        self.cuts.iter().map(|c| c.length * c.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_plan_has_one_segment() {
        let plan = CuttingPlan::from_module("spec_xs_M1", "spec_xs", 12000);
        assert_eq!(plan.segments(), 1);
        assert!(!plan.is_weld());
    }

    #[test]
    fn weld_plan_counts_segments() {
        let r1 = crate::models::remainder::Remainder::new_pending("r1", 4500, "S", 100.0, vec![], 12000, None);
        let r2 = crate::models::remainder::Remainder::new_pending("r2", 4500, "S", 100.0, vec![], 12000, None);
        let plan = CuttingPlan::from_remainders("r1+r2", 9000, vec![r1, r2]);
        assert_eq!(plan.segments(), 2);
        assert!(plan.is_weld());
    }

    #[test]
    fn total_cut_length_multiplies_by_quantity() {
        let mut plan = CuttingPlan::from_module("m1", "spec", 12000);
        plan.push_cut("p1", 6000, 2);
        assert_eq!(plan.total_cut_length(), 12000);
    }
}
