use thiserror::Error;

/// Mid-run invariant violations (spec §7 `ALGORITHM_ERROR`). These never
/// abort the run — `StatisticsCalculator` surfaces them in
/// `completeStats.consistencyCheck` and processing continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    #[error(
        "group {group_key}: conservation violated — material {total_material} != design {design_length} + real {real_remainder} + waste {waste}"
    )]
    ConsistencyCheckFailed {
        group_key: String,
        total_material: i64,
        design_length: i64,
        real_remainder: i64,
        waste: i64,
    },
}
