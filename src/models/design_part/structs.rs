use serde::{Deserialize, Serialize};

/// A finished piece the production run must yield (spec §3). Immutable
/// through optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPart {
    pub id: String,
    pub length: i64,
    pub quantity: i64,
    pub cross_section: f64,
    pub specification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_id: Option<String>,
}
