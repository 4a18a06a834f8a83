//! The per-group pool of not-yet-finalized offcuts (spec §4.3). Kept sorted
//! ascending by length, mirroring the teacher's `StockSolution` wrapper
//! around a plain `Vec` — a thin struct around a sorted vector rather than a
//! tree, since group pools stay small enough that linear scans are cheap and
//! the ordering itself does the heavy lifting for `find_best_single`.

use crate::models::{Remainder, RemainderType};

/// A combination of `2..=W` pooled remainders whose welded length covers a
/// demand, returned by `find_best_combination`.
#[derive(Debug, Clone)]
pub struct CombinationMatch {
    /// Indices into the pool's internal vector, ascending.
    pub indices: Vec<usize>,
    pub total_length: i64,
    pub remainders: Vec<Remainder>,
}

impl CombinationMatch {
    pub fn slack(&self, required: i64) -> i64 {
        self.total_length - required
    }
}

#[derive(Debug, Default)]
pub struct RemainderPool {
    /// Always sorted ascending by `length`; `Remainder::kind` is `Pending`
    /// for every element until `finalize` runs.
    items: Vec<Remainder>,
}

impl RemainderPool {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts a freshly produced `Pending` remainder, keeping the vector
    /// sorted ascending by length.
    pub fn add(&mut self, remainder: Remainder) {
        debug_assert!(remainder.kind == RemainderType::Pending);
        let pos = self.items.partition_point(|r| r.length < remainder.length);
        self.items.insert(pos, remainder);
    }

    /// Spec §4.5 source-selection precedence (a): the shortest pending
    /// remainder whose length covers `required`, or `None`.
    pub fn find_best_single(&self, required: i64) -> Option<usize> {
        let pos = self.items.partition_point(|r| r.length < required);
        self.items.get(pos).map(|_| pos)
    }

    /// Spec §4.5 precedence (b): the best welded combination of `2..=w`
    /// pooled remainders whose summed length covers `required`. "Best" means
    /// least slack, ties broken by fewer segments (spec §4.6's CD
    /// preference also applies here at selection time).
    ///
    /// Exhaustive over subsets, which is acceptable given group pools stay
    /// small in practice (spec §9); branches are pruned as soon as a
    /// partial sum can no longer beat the current best slack.
    pub fn find_best_combination(&self, required: i64, w: u32) -> Option<CombinationMatch> {
        if w < 2 || self.items.len() < 2 {
            return None;
        }
        let max_segments = (w as usize).min(self.items.len());
        let mut best: Option<(Vec<usize>, i64, usize)> = None;
        let mut chosen = Vec::with_capacity(max_segments);
        self.search_combinations(0, required, max_segments, 0, &mut chosen, &mut best);

        best.map(|(indices, total_length, _)| {
            let remainders = indices.iter().map(|&i| self.items[i].clone()).collect();
            CombinationMatch { indices, total_length, remainders }
        })
    }

    fn search_combinations(
        &self,
        start: usize,
        required: i64,
        max_segments: usize,
        sum: i64,
        chosen: &mut Vec<usize>,
        best: &mut Option<(Vec<usize>, i64, usize)>,
    ) {
        if chosen.len() >= 2 && sum >= required {
            let slack = sum - required;
            let better = match best {
                None => true,
                Some((_, best_slack, best_segments)) => {
                    slack < *best_slack || (slack == *best_slack && chosen.len() < *best_segments)
                }
            };
            if better {
                *best = Some((chosen.clone(), sum, chosen.len()));
            }
            // A superset of a covering combination only carries equal or
            // worse slack (remainder lengths are strictly positive), so
            // there is nothing to gain from extending this branch further.
            return;
        }
        if chosen.len() == max_segments || start >= self.items.len() {
            return;
        }
        for i in start..self.items.len() {
            chosen.push(i);
            self.search_combinations(i + 1, required, max_segments, sum + self.items[i].length, chosen, best);
            chosen.pop();
        }
    }

    /// Removes a single pooled remainder by index (spec §4.5 precedence a),
    /// transitioning it `Pending -> Pseudo` and handing it back for
    /// inclusion in the consuming `CuttingPlan`.
    pub fn use_single(&mut self, index: usize) -> Remainder {
        let mut r = self.items.remove(index);
        r.mark_pseudo();
        r
    }

    /// Removes a set of pooled remainders by index (spec §4.5 precedence b,
    /// or an MWCD swap's CD consumption), transitioning each `Pending ->
    /// Pseudo`. `indices` need not be sorted.
    pub fn remove_indices(&mut self, indices: &[usize]) -> Vec<Remainder> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let mut removed = Vec::with_capacity(sorted.len());
        for idx in sorted {
            removed.push(self.items.remove(idx));
        }
        // Restore the caller's index order so `indices[i]` still lines up
        // with `removed[i]`.
        removed.reverse();
        for r in &mut removed {
            r.mark_pseudo();
        }
        removed
    }

    /// Re-inserts a remainder revived by an MWCD swap (`Pseudo -> Pending`),
    /// keeping the pool sorted.
    pub fn revive(&mut self, mut remainder: Remainder) {
        remainder.revive_to_pending();
        self.add(remainder);
    }

    /// Read-only view for the MWCD local search, which scans the pool for
    /// swap candidates without mutating it.
    pub fn iter(&self) -> impl Iterator<Item = &Remainder> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Remainder> {
        self.items.get(index)
    }

    /// Spec §4.7: the one and only pass over still-`Pending` remainders at
    /// the end of a group's optimization, deciding each as `Real` or
    /// `Waste` against `waste_threshold` (strict less-than).
    pub fn finalize(&mut self, waste_threshold: i64) -> Vec<Remainder> {
        for r in &mut self.items {
            if r.is_pending() {
                r.finalize(waste_threshold);
            }
        }
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(length: i64) -> Remainder {
        Remainder::new_pending(format!("r{length}"), length, "S355", 100.0, vec!["m1".into()], 12000, Some("m1".into()))
    }

    #[test]
    fn find_best_single_picks_the_tightest_fit() {
        let mut pool = RemainderPool::new();
        pool.add(pending(5000));
        pool.add(pending(3000));
        pool.add(pending(4000));
        let idx = pool.find_best_single(3500).expect("a covering remainder exists");
        assert_eq!(pool.get(idx).unwrap().length, 4000);
    }

    #[test]
    fn find_best_single_returns_none_when_nothing_covers() {
        let mut pool = RemainderPool::new();
        pool.add(pending(1000));
        assert!(pool.find_best_single(2000).is_none());
    }

    #[test]
    fn use_single_marks_pseudo_and_removes_from_pool() {
        let mut pool = RemainderPool::new();
        pool.add(pending(4000));
        let idx = pool.find_best_single(3500).unwrap();
        let r = pool.use_single(idx);
        assert_eq!(r.kind, RemainderType::Pseudo);
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn find_best_combination_minimizes_slack() {
        let mut pool = RemainderPool::new();
        pool.add(pending(2000));
        pool.add(pending(2500));
        pool.add(pending(3000));
        // 2000 + 3000 = 5000 (slack 500) vs 2000 + 2500 = 4500 (slack 0)
        let combo = pool.find_best_combination(4500, 3).expect("a covering combination exists");
        assert_eq!(combo.total_length, 4500);
        assert_eq!(combo.slack(4500), 0);
    }

    #[test]
    fn find_best_combination_respects_segment_cap() {
        let mut pool = RemainderPool::new();
        pool.add(pending(1000));
        pool.add(pending(1000));
        pool.add(pending(1000));
        // Only a 3-way combination covers 2900, but w=2 forbids it.
        assert!(pool.find_best_combination(2900, 2).is_none());
        assert!(pool.find_best_combination(2900, 3).is_some());
    }

    #[test]
    fn remove_indices_preserves_caller_order() {
        let mut pool = RemainderPool::new();
        pool.add(pending(1000));
        pool.add(pending(2000));
        pool.add(pending(3000));
        let removed = pool.remove_indices(&[2, 0]);
        assert_eq!(removed[0].length, 3000);
        assert_eq!(removed[1].length, 1000);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn revive_reinserts_sorted() {
        let mut pool = RemainderPool::new();
        pool.add(pending(1000));
        pool.add(pending(3000));
        let mut consumed = pending(2000);
        consumed.mark_pseudo();
        pool.revive(consumed);
        let lengths: Vec<i64> = pool.iter().map(|r| r.length).collect();
        assert_eq!(lengths, vec![1000, 2000, 3000]);
    }

    #[test]
    fn finalize_splits_real_and_waste() {
        let mut pool = RemainderPool::new();
        pool.add(pending(50));
        pool.add(pending(150));
        let finalized = pool.finalize(100);
        assert_eq!(finalized.iter().find(|r| r.length == 50).unwrap().kind, RemainderType::Waste);
        assert_eq!(finalized.iter().find(|r| r.length == 150).unwrap().kind, RemainderType::Real);
    }
}
