//! Partitions design parts by `(specification, round(crossSection))` (spec
//! §4.2). Groups are independent: no remainder or module bar ever crosses a
//! group boundary. A `BTreeMap` is used, not a `HashMap`, so every caller
//! that iterates the result does so in the same sorted-key order on every
//! run — the determinism property of spec §5/§9.

use crate::models::{DesignPart, GroupKey};
use std::collections::BTreeMap;

pub fn group_parts(parts: &[DesignPart]) -> BTreeMap<GroupKey, Vec<DesignPart>> {
    let mut groups: BTreeMap<GroupKey, Vec<DesignPart>> = BTreeMap::new();
    for part in parts {
        groups.entry(part.group_key()).or_default().push(part.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_specification_and_cross_section() {
        let parts = vec![
            DesignPart::new("p1", 6000, 1, 100.0, "S355"),
            DesignPart::new("p2", 4000, 1, 100.0, "S355"),
            DesignPart::new("p3", 3000, 1, 80.0, "S355"),
            DesignPart::new("p4", 2000, 1, 100.0, "S235"),
        ];
        let groups = group_parts(&parts);
        assert_eq!(groups.len(), 3);
        let s355_100 = GroupKey::new("S355", 100.0);
        assert_eq!(groups[&s355_100].len(), 2);
    }

    #[test]
    fn iteration_order_is_stable_across_runs() {
        let parts = vec![
            DesignPart::new("p1", 1, 1, 300.0, "Z"),
            DesignPart::new("p2", 1, 1, 100.0, "A"),
            DesignPart::new("p3", 1, 1, 200.0, "M"),
        ];
        let groups = group_parts(&parts);
        let keys: Vec<_> = groups.keys().map(|k| k.specification.clone()).collect();
        assert_eq!(keys, vec!["A".to_string(), "M".to_string(), "Z".to_string()]);
    }
}
