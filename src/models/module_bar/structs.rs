use serde::{Deserialize, Serialize};

/// A raw stock bar minted by `ModuleStockPool` whenever the packer opens a
/// fresh bar (spec §3). Never destroyed; its use is only recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleBar {
    pub id: String,
    pub length: i64,
    pub specification: String,
    pub cross_section: f64,
}
