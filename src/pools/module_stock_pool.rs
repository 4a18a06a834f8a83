//! Per-group fabricator of fresh module bars (spec §4.4). Unlike
//! `RemainderPool`, this pool never removes anything: a module bar is
//! opened and recorded, never consumed back out.

use crate::models::ModuleBar;
use std::collections::BTreeMap;

pub struct ModuleStockPool {
    /// Catalog of allowed module lengths for this group, ascending.
    catalog: Vec<i64>,
    group_label: String,
    specification: String,
    cross_section: f64,
    next_id: u64,
    /// Opened bar count per catalog length, for the module-usage
    /// breakdown in `StatisticsCalculator`.
    usage: BTreeMap<i64, u64>,
}

impl ModuleStockPool {
    pub fn new(group_label: impl Into<String>, specification: impl Into<String>, cross_section: f64, mut catalog: Vec<i64>) -> Self {
        catalog.sort_unstable();
        catalog.dedup();
        Self {
            catalog,
            group_label: group_label.into(),
            specification: specification.into(),
            cross_section,
            next_id: 1,
            usage: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &[i64] {
        &self.catalog
    }

    /// Candidate lengths `>= required`, ascending, for the Packer's
    /// lookahead bin selection (spec §4.5).
    pub fn candidates_at_least(&self, required: i64) -> &[i64] {
        let pos = self.catalog.partition_point(|&len| len < required);
        &self.catalog[pos..]
    }

    /// Mints a fresh `ModuleBar` of `length`, with a group-scoped
    /// sequential id `spec_xs_M{n}` (spec §4.4). The pool never rejects a
    /// request, even for a length absent from `catalog` (the force-select
    /// fallback of spec §4.5).
    pub fn create_bar(&mut self, length: i64) -> ModuleBar {
        let id = format!("{}_M{}", self.group_label, self.next_id);
        self.next_id += 1;
        *self.usage.entry(length).or_insert(0) += 1;
        ModuleBar::new(id, length, self.specification.clone(), self.cross_section)
    }

    /// Per-length `(length, count)` opened so far, ascending by length.
    pub fn usage_breakdown(&self) -> Vec<(i64, u64)> {
        self.usage.iter().map(|(&l, &c)| (l, c)).collect()
    }

    pub fn total_opened(&self) -> u64 {
        self.usage.values().sum()
    }

    pub fn total_material(&self) -> i64 {
        self.usage.iter().map(|(&len, &count)| len * count as i64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mints_sequential_ids_and_records_usage() {
        let mut pool = ModuleStockPool::new("S355_100.00", "S355", 100.0, vec![6000, 9000, 12000]);
        let a = pool.create_bar(12000);
        let b = pool.create_bar(12000);
        let c = pool.create_bar(9000);
        assert_eq!(a.id, "S355_100.00_M1");
        assert_eq!(b.id, "S355_100.00_M2");
        assert_eq!(c.id, "S355_100.00_M3");
        assert_eq!(pool.total_opened(), 3);
        assert_eq!(pool.total_material(), 12000 * 2 + 9000);
    }

    #[test]
    fn candidates_at_least_filters_ascending() {
        let pool = ModuleStockPool::new("g", "S355", 100.0, vec![6000, 9000, 12000]);
        assert_eq!(pool.candidates_at_least(7000), &[9000, 12000]);
        assert_eq!(pool.candidates_at_least(12001), &[] as &[i64]);
    }

    #[test]
    fn never_rejects_an_out_of_catalog_length() {
        let mut pool = ModuleStockPool::new("g", "S355", 100.0, vec![6000]);
        let bar = pool.create_bar(20000);
        assert_eq!(bar.length, 20000);
    }
}
