//! The external input contract (spec §6 `OptimizeRequest`). Host systems
//! (spreadsheet upload, HTTP transport, job queues — all out of scope here,
//! spec §1) construct one of these and hand it to [`crate::optimize`].

use crate::models::{DesignPart, ModuleBarCatalogEntry, OptimizationConstraints};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub design_parts: Vec<DesignPart>,
    pub module_bars: Vec<ModuleBarCatalogEntry>,
    pub constraints: OptimizationConstraints,
}

impl OptimizeRequest {
    pub fn new(
        design_parts: Vec<DesignPart>,
        module_bars: Vec<ModuleBarCatalogEntry>,
        constraints: OptimizationConstraints,
    ) -> Self {
        Self { design_parts, module_bars, constraints }
    }
}
