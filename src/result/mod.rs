mod builder;
mod structs;

pub use builder::ResultBuilder;
pub use structs::{LossRateValidation, OptimizeResult, ProcessingStatus};
