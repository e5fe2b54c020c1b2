use crate::models::daily_stats::DailyStats;

/// Everything the dashboard needs for one day, derived in one pass.
#[derive(Debug, Default, Clone)]
pub struct DaySummary {
    pub stats: DailyStats,
    /// Strict target redrawn for this day from the full record set.
    pub target: i64,
    /// Service income minus the strict target (meal money never counts).
    pub surplus: i64,
    /// What actually lands in the pocket: income - kasbon + meal allowance.
    pub take_home: i64,
}
