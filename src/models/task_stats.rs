use serde::{Deserialize, Serialize};

/// Per-group accumulators produced by `GroupOptimizer` (spec §3
/// `GroupSolution.taskStats`). Read by `StatisticsCalculator`; never
/// recomputed downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStats {
    pub cuts_made: i64,
    pub modules_opened: i64,
    pub module_length_used: i64,
    pub welds_performed: i64,
    pub remainders_reused: i64,
    /// Count of individual demand units left unpacked when the group's time
    /// budget expired (spec §7 `TIMEOUT_WARNING`).
    pub unfulfilled: i64,
}

impl TaskStats {
    pub fn new() -> Self {
        Self::default()
    }
}
