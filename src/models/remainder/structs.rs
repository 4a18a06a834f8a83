use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The offcut lifecycle tag (spec §3, §9). Transitions:
/// `Pending -> Pseudo` (consumed by a later plan), `Pending -> Real | Waste`
/// (finalizer, run exactly once), `Real`/`Waste`/`Pseudo` terminal outside of
/// an MWCD swap, which is the only path that ever reverses `Pseudo -> Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemainderType {
    Pending,
    Pseudo,
    Real,
    Waste,
}

/// An offcut produced by slicing a source bar (spec §3).
///
/// `PartialEq` is implemented by hand below, excluding `created_at` and
/// `consumed_at`: both are wall-clock timestamps, so two otherwise-identical
/// runs would never compare equal if they were included, breaking spec §8
/// invariant 8 (byte-equal determinism) for every `OptimizeResult.solutions`
/// comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Remainder {
    pub id: String,
    pub length: i64,
    pub specification: String,
    pub cross_section: f64,
    /// Ids of the ancestor bar(s)/remainder(s) this offcut descends from.
    pub source_chain: Vec<String>,
    /// The source bar's length at the moment this remainder was created.
    pub original_length: i64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: RemainderType,
    pub is_consumed: bool,
    /// Direct parent id, when the remainder descends from exactly one
    /// source (welded combinations have >1 ancestor and leave this `None`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl PartialEq for Remainder {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.length == other.length
            && self.specification == other.specification
            && self.cross_section == other.cross_section
            && self.source_chain == other.source_chain
            && self.original_length == other.original_length
            && self.kind == other.kind
            && self.is_consumed == other.is_consumed
            && self.parent_id == other.parent_id
    }
}
