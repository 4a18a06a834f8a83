//! Central, immutable source of defaults, legal ranges, and data limits
//! (spec §2 `ConstraintConfig`). Grouped into small const-structs the way
//! the teacher groups `ConfigurationDefaults` / `PerformanceConstants` /
//! `MathConstants` in `constants.rs` — one struct per concern rather than
//! one flat namespace.

/// Welding-budget defaults and legal range.
pub struct WeldingConstants;

impl WeldingConstants {
    /// `W = 1` disables welding entirely.
    pub const MIN_SEGMENTS: u32 = 1;
    /// Defensive upper bound; a real weld plan rarely exceeds a handful of
    /// segments and an unbounded `W` would blow up the combination search.
    pub const MAX_SEGMENTS: u32 = 12;
}

/// Waste-threshold defaults (spec §3: "< threshold" is waste, strict).
pub struct WasteConstants;

impl WasteConstants {
    pub const DEFAULT_WASTE_THRESHOLD_MM: i64 = 100;
}

/// MWCDOptimizer operational knobs (spec §4.6, §9). Exposed as constants so
/// regression tests can pin them, but implementations may override them via
/// `OptimizationConstraints` extensions if a host ever needs to.
pub struct MwcdConstants;

impl MwcdConstants {
    /// Equivalent cost of one weld join, in millimeters of material.
    pub const WELD_UNIT_MM: i64 = 50;
    /// A swap whose benefit does not clear this floor is not worth the churn.
    pub const BENEFIT_FLOOR_MM: i64 = 50;
    /// Local-search round cap; the algorithm has no convergence proof, so a
    /// hard cap keeps GroupOptimizer's runtime bounded (spec §9).
    pub const MAX_ROUNDS: u32 = 10;
}

/// Default time budget and polling cadence for the per-group optimizer.
pub struct TimeConstants;

impl TimeConstants {
    pub const DEFAULT_TIME_LIMIT_MS: u64 = 5_000;
}

/// Row/catalog size guardrails enforced by `ConstraintValidator`. These are
/// ambient safety limits, not part of spec.md's functional description, the
/// same way the teacher's `EngineConstants::MAX_PANELS_LIMIT` bounds a
/// single optimization task.
pub struct DataLimits;

impl DataLimits {
    pub const MAX_DESIGN_PARTS: usize = 5_000;
    pub const MAX_MODULE_BARS: usize = 5_000;
    pub const MAX_QUANTITY_PER_PART: i64 = 100_000;
    pub const MAX_LENGTH_MM: i64 = 50_000_000;
}
