use super::structs::{Remainder, RemainderType};
use chrono::Utc;

impl Remainder {
    /// Creates a fresh `Pending` remainder. Per spec §3 invariants this is
    /// the only constructor — every other state is reached by transition.
    pub fn new_pending(
        id: impl Into<String>,
        length: i64,
        specification: impl Into<String>,
        cross_section: f64,
        source_chain: Vec<String>,
        original_length: i64,
        parent_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            length,
            specification: specification.into(),
            cross_section,
            source_chain,
            original_length,
            created_at: Utc::now(),
            consumed_at: None,
            kind: RemainderType::Pending,
            is_consumed: false,
            parent_id,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.kind == RemainderType::Pending
    }

    /// `Pending -> Pseudo`: this offcut was consumed by a later cutting plan
    /// (single pick or weld combination member).
    pub fn mark_pseudo(&mut self) {
        self.kind = RemainderType::Pseudo;
        self.is_consumed = true;
        self.consumed_at = Some(Utc::now());
    }

    /// `Pending -> Real` or `Pending -> Waste`, per the waste threshold
    /// (strict less-than, spec §3/§9). Called by `RemainderPool::finalize`.
    pub fn finalize(&mut self, waste_threshold: i64) {
        debug_assert!(self.is_pending(), "finalize called on a non-pending remainder");
        self.kind = if self.length < waste_threshold { RemainderType::Waste } else { RemainderType::Real };
    }

    /// `Pseudo -> Pending`: reverses consumption during an MWCD swap so the
    /// offcut can re-enter the pool (spec §4.6).
    pub fn revive_to_pending(&mut self) {
        self.kind = RemainderType::Pending;
        self.is_consumed = false;
        self.consumed_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(length: i64) -> Remainder {
        Remainder::new_pending("r1", length, "S355", 100.0, vec!["m1".into()], 12000, Some("m1".into()))
    }

    #[test]
    fn equality_ignores_timestamps() {
        // Two remainders built moments apart differ only in created_at, yet
        // must compare equal (spec §8 invariant 8: determinism across runs).
        let a = sample(1000);
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = sample(1000);
        assert_ne!(a.created_at, b.created_at);
        assert_eq!(a, b);
    }

    #[test]
    fn finalize_below_threshold_is_waste() {
        let mut r = sample(99);
        r.finalize(100);
        assert_eq!(r.kind, RemainderType::Waste);
    }

    #[test]
    fn finalize_at_threshold_is_real_not_waste() {
        // spec §8 boundary case: a demand exactly wasteThreshold is REAL.
        let mut r = sample(100);
        r.finalize(100);
        assert_eq!(r.kind, RemainderType::Real);
    }

    #[test]
    fn pseudo_marks_consumed_with_timestamp() {
        let mut r = sample(500);
        r.mark_pseudo();
        assert_eq!(r.kind, RemainderType::Pseudo);
        assert!(r.is_consumed);
        assert!(r.consumed_at.is_some());
    }

    #[test]
    fn revive_clears_consumption() {
        let mut r = sample(500);
        r.mark_pseudo();
        r.revive_to_pending();
        assert_eq!(r.kind, RemainderType::Pending);
        assert!(!r.is_consumed);
        assert!(r.consumed_at.is_none());
    }
}
