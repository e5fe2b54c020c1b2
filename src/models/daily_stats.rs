/// Derived summary for one day. Never stored or cached: always recomputed
/// from the record so it cannot go stale relative to edits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DailyStats {
    /// Gross service revenue (item price x count).
    pub income: i64,
    /// Alias of `income`; downstream consumers historically expect both
    /// names, there is no separate deduction term.
    pub net: i64,
    /// Physical production units (non-operational items only).
    pub total_pairs: i64,
    /// Premium-tier units, drives the quantity-stall warning only.
    pub premium_count: i64,
    pub meal_allowance: i64,
    /// Cash advance drawn that day; cuts take-home, never the target math.
    pub kasbon: i64,
}
