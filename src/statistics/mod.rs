mod calculator;
mod structs;

pub use calculator::StatisticsCalculator;
pub use structs::{
    ChartDataRow, CompleteStats, ConsistencyCheck, ConsistencyIssue, GlobalStats, GroupStats,
    ModuleUsageEntry, ModuleUsageStats, RemainderStats, RequirementEntry, RequirementValidation,
};
