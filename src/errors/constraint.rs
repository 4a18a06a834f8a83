use thiserror::Error;

/// Welding-budget vs. catalog-length feasibility conflicts (spec §7
/// `CONSTRAINT_ERROR`). Carries the offending design-part ids so the host
/// can render spec §4.1's two suggestions (raise `W`, or add a longer module).
#[derive(Error, Debug)]
pub enum ConstraintError {
    #[error("{} design part(s) exceed the longest module bar and welding is disabled (maxWeldingSegments=1)", .offending_part_ids.len())]
    WeldingInfeasible {
        offending_part_ids: Vec<String>,
        longest_module_length: i64,
        longest_offending_length: i64,
    },
}
