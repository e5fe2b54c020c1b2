/// Month-end outlook computed by walking every day of the active month.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MonthProjection {
    /// Actual income accumulated over elapsed days (reference date included).
    pub total_net_income: i64,
    /// Elapsed calendar days, working or not; off-days stay in the
    /// denominator so the average drops on months with many holidays.
    pub days_passed: i64,
    /// Future days still expected to be worked.
    pub work_days_remaining: i64,
    /// Remaining gap to the monthly target, floored at zero.
    pub deficit: i64,
    /// Same gap unfloored; negative once the month is over target.
    pub raw_deficit: i64,
    /// Linear extrapolation from the elapsed per-day average; floored only
    /// at display time.
    pub projected_total: f64,
}
