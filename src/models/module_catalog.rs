use serde::{Deserialize, Serialize};

/// One row of the globally shared module-bar catalog supplied in
/// `OptimizeRequest` (spec §6): `{id, name, length}`. Unlike the per-group
/// `ModuleBar` minted by `ModuleStockPool` (which additionally carries the
/// group's specification/cross-section), a catalog entry is not
/// group-scoped — every group draws fresh bars from the same set of
/// lengths (spec §4.4, §6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleBarCatalogEntry {
    pub id: String,
    pub name: String,
    pub length: i64,
}

impl ModuleBarCatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, length: i64) -> Self {
        Self { id: id.into(), name: name.into(), length }
    }
}

/// Distinct lengths, ascending, drawn from the catalog — what
/// `ModuleStockPool` is actually built from (spec §4.4).
pub fn distinct_lengths(entries: &[ModuleBarCatalogEntry]) -> Vec<i64> {
    let mut lengths: Vec<i64> = entries.iter().map(|m| m.length).collect();
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_lengths_sorts_and_dedups() {
        let entries = vec![
            ModuleBarCatalogEntry::new("a", "12m", 12000),
            ModuleBarCatalogEntry::new("b", "6m", 6000),
            ModuleBarCatalogEntry::new("c", "12m-dup", 12000),
        ];
        assert_eq!(distinct_lengths(&entries), vec![6000, 12000]);
    }
}
