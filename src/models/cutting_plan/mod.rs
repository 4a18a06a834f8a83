mod impls;
mod structs;

pub use structs::{Cut, CuttingPlan, SourceType};
