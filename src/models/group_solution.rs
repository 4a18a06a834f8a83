use super::cutting_plan::CuttingPlan;
use super::task_stats::TaskStats;
use serde::{Deserialize, Serialize};

/// Everything one group produced: its ordered cutting plans plus the task
/// stats accumulated while producing them (spec §3). Carries no global
/// totals — those live in `StatisticsCalculator`'s output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSolution {
    pub cutting_plans: Vec<CuttingPlan>,
    pub task_stats: TaskStats,
}

impl GroupSolution {
    pub fn new() -> Self {
        Self::default()
    }
}
