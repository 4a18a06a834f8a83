use crate::constants::{TimeConstants, WasteConstants, WeldingConstants};
use serde::{Deserialize, Serialize};

/// Validated run parameters (spec §3 `OptimizationConstraints`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConstraints {
    pub waste_threshold: i64,
    /// Advisory only — echoed in the result but never steers the search
    /// (spec §9 open question).
    pub target_loss_rate: f64,
    pub time_limit_ms: u64,
    /// `W`; `1` disables welding.
    pub max_welding_segments: u32,
}

impl Default for OptimizationConstraints {
    fn default() -> Self {
        Self {
            waste_threshold: WasteConstants::DEFAULT_WASTE_THRESHOLD_MM,
            target_loss_rate: 5.0,
            time_limit_ms: TimeConstants::DEFAULT_TIME_LIMIT_MS,
            max_welding_segments: WeldingConstants::MIN_SEGMENTS,
        }
    }
}

impl OptimizationConstraints {
    pub fn welding_enabled(&self) -> bool {
        self.max_welding_segments > WeldingConstants::MIN_SEGMENTS
    }
}
