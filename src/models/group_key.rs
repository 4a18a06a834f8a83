use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite grouping key: `(specification, round(crossSection))` (spec
/// §4.2). The cross-section is rounded to an integer number of milli-mm²
/// before it becomes part of the key so that two cross-sections within
/// 0.0005 mm² of each other always land in the same group on every run —
/// required for the determinism property of spec §5/§8.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub specification: String,
    cross_section_milli: i64,
}

impl GroupKey {
    pub fn new(specification: impl Into<String>, cross_section: f64) -> Self {
        Self {
            specification: specification.into(),
            cross_section_milli: (cross_section * 1000.0).round() as i64,
        }
    }

    pub fn cross_section(&self) -> f64 {
        self.cross_section_milli as f64 / 1000.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{:.3}", self.specification, self.cross_section())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_close_cross_sections_into_the_same_key() {
        let a = GroupKey::new("S355", 100.00049);
        let b = GroupKey::new("S355", 100.00051);
        assert_eq!(a, b);
    }

    #[test]
    fn distinguishes_specification() {
        let a = GroupKey::new("S355", 100.0);
        let b = GroupKey::new("S235", 100.0);
        assert_ne!(a, b);
    }

    #[test]
    fn orders_deterministically() {
        let mut keys = vec![
            GroupKey::new("S355", 200.0),
            GroupKey::new("S235", 100.0),
            GroupKey::new("S235", 50.0),
        ];
        keys.sort();
        assert_eq!(keys[0].specification, "S235");
        assert_eq!(keys[0].cross_section(), 50.0);
    }
}
