use crate::core::calculator::stats::calculate_daily_stats;
use crate::models::month::MonthState;
use crate::models::projection::MonthProjection;
use crate::utils::date;
use chrono::NaiveDate;

/// Month-end outlook: walk every day of the active month, split elapsed from
/// future against the reference date, and extrapolate linearly from the
/// elapsed per-day average.
///
/// Elapsed off-days stay in the denominator: a month with many recorded
/// holidays projects lower. With no elapsed days the average is treated as
/// zero via the max(1, days) guard.
pub fn calculate_projection(state: &MonthState, reference: NaiveDate) -> MonthProjection {
    let mut p = MonthProjection::default();

    for d in date::all_days_of_month(state.current_year, state.month1()) {
        if d <= reference {
            let key = date::date_key(d);
            let stats = calculate_daily_stats(state.record(&key), state.meal_cost);
            p.total_net_income += stats.net;
            p.days_passed += 1;
        } else if state.is_work_day(d) {
            p.work_days_remaining += 1;
        }
    }

    p.raw_deficit = state.monthly_target - p.total_net_income;
    p.deficit = p.raw_deficit.max(0);

    let average = p.total_net_income as f64 / p.days_passed.max(1) as f64;
    p.projected_total = if p.work_days_remaining > 0 {
        p.total_net_income as f64 + average * p.work_days_remaining as f64
    } else {
        p.total_net_income as f64
    };

    p
}
