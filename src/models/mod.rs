pub mod configuration;
pub mod cutting_plan;
pub mod design_part;
pub mod group_key;
pub mod group_solution;
pub mod module_bar;
pub mod module_catalog;
pub mod remainder;
pub mod task_stats;

pub use configuration::OptimizationConstraints;
pub use cutting_plan::{Cut, CuttingPlan, SourceType};
pub use design_part::DesignPart;
pub use group_key::GroupKey;
pub use group_solution::GroupSolution;
pub use module_bar::ModuleBar;
pub use module_catalog::{distinct_lengths, ModuleBarCatalogEntry};
pub use remainder::{Remainder, RemainderType};
pub use task_stats::TaskStats;
