use crate::core::calculator::stats::calculate_daily_stats;
use crate::models::month::MonthState;
use crate::utils::date;
use chrono::NaiveDate;

/// Strict target for one day: the remaining monthly deficit spread evenly
/// over the remaining scheduled workdays, target day included.
///
/// Redrawn from scratch on every call; there is no stored schedule. Money
/// earned strictly before the target date is locked in and removed from the
/// quota whether or not those days hit their own targets, so editing an
/// earlier day changes every later day's answer.
pub fn strict_daily_target(state: &MonthState, target_date: NaiveDate) -> i64 {
    let mut income_prior = 0i64;
    let mut workdays_remaining_inclusive = 0i64;

    for d in date::all_days_of_month(state.current_year, state.month1()) {
        if d < target_date {
            let key = date::date_key(d);
            income_prior += calculate_daily_stats(state.record(&key), state.meal_cost).net;
        } else if state.is_work_day(d) {
            workdays_remaining_inclusive += 1;
        }
    }

    let remaining_needed = state.monthly_target - income_prior;

    if workdays_remaining_inclusive <= 0 {
        // No workdays left to spread the deficit over: surface the raw
        // remainder, negative (surplus) or hopeless-positive as it may be.
        return remaining_needed;
    }

    if remaining_needed <= 0 {
        return 0; // month already covered; a day's target never goes negative
    }

    // Ceiling division: never under-commit the worker.
    (remaining_needed + workdays_remaining_inclusive - 1) / workdays_remaining_inclusive
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // July 2024: 31 days, Sundays on 7/14/21/28 → 27 default workdays.
    fn july_2024(target: i64) -> MonthState {
        MonthState::new(2024, 6, target, 15_000)
    }

    fn earn(state: &mut MonthState, d: NaiveDate, basic_pairs: i64) {
        state
            .record_mut(d)
            .items
            .insert("basic_cleaning".to_string(), basic_pairs);
    }

    #[test]
    fn deficit_spreads_over_inclusive_workdays() {
        let mut state = july_2024(3_100_000);
        earn(&mut state, ymd(2024, 7, 1), 10); // 100_000 locked in

        // From Jul 2 onward: 30 days minus 4 Sundays = 26 inclusive workdays
        let target = strict_daily_target(&state, ymd(2024, 7, 2));
        assert_eq!(target, (3_000_000 + 26 - 1) / 26); // ceil(3_000_000 / 26)
        assert_eq!(target, 115_385);
    }

    #[test]
    fn earlier_surplus_never_raises_later_pressure() {
        let lazy = july_2024(5_000_000);
        let mut diligent = july_2024(5_000_000);
        // day 1 beats its own target comfortably
        earn(&mut diligent, ymd(2024, 7, 1), 30); // 300_000

        let with_surplus = strict_daily_target(&diligent, ymd(2024, 7, 2));
        let without = strict_daily_target(&lazy, ymd(2024, 7, 2));
        assert!(with_surplus <= without);
    }

    #[test]
    fn floors_at_zero_once_month_is_covered() {
        let mut state = july_2024(3_100_000);
        earn(&mut state, ymd(2024, 7, 1), 320); // 3_200_000, over target
        assert_eq!(strict_daily_target(&state, ymd(2024, 7, 2)), 0);
        assert_eq!(strict_daily_target(&state, ymd(2024, 7, 20)), 0);
    }

    #[test]
    fn no_workdays_left_returns_the_raw_remainder() {
        let mut state = july_2024(3_100_000);
        // declare the whole tail of the month off
        for day in 25..=31 {
            state.record_mut(ymd(2024, 7, day)).is_work_day = false;
        }
        earn(&mut state, ymd(2024, 7, 1), 10);

        let raw = strict_daily_target(&state, ymd(2024, 7, 25));
        assert_eq!(raw, 3_000_000); // hopeless positive, unmodified

        // and negative when the month is already over target
        earn(&mut state, ymd(2024, 7, 2), 350); // +3_500_000
        let surplus = strict_daily_target(&state, ymd(2024, 7, 25));
        assert_eq!(surplus, 3_100_000 - 100_000 - 3_500_000);
    }

    #[test]
    fn redrawn_from_scratch_after_earlier_edits() {
        let mut state = july_2024(3_100_000);
        let before = strict_daily_target(&state, ymd(2024, 7, 10));
        earn(&mut state, ymd(2024, 7, 3), 50); // backfill an earlier day
        let after = strict_daily_target(&state, ymd(2024, 7, 10));
        assert!(after < before);
    }

    #[test]
    fn target_day_itself_counts_when_scheduled() {
        let mut state = july_2024(2_600_000);
        // Only the last day of the month remains, and it is a workday.
        let target = strict_daily_target(&state, ymd(2024, 7, 31));
        // income prior = 0, one inclusive workday → the whole quota today
        assert_eq!(target, 2_600_000);
        // ...unless that day is declared off
        state.record_mut(ymd(2024, 7, 31)).is_work_day = false;
        assert_eq!(strict_daily_target(&state, ymd(2024, 7, 31)), 2_600_000);
    }

    #[test]
    fn end_to_end_july_scenario() {
        // full walkthrough: 3.1M target, 100k earned on day one
        let mut state = july_2024(3_100_000);
        earn(&mut state, ymd(2024, 7, 1), 10);

        let stats = crate::core::calculator::stats::calculate_daily_stats(
            state.record("2024-07-01"),
            state.meal_cost,
        );
        assert_eq!(stats.income, 100_000);
        assert_eq!(stats.meal_allowance, 15_000);
        assert_eq!(stats.total_pairs, 10);
        assert_eq!(stats.premium_count, 0);
        assert_eq!(stats.kasbon, 0);

        let day2 = strict_daily_target(&state, ymd(2024, 7, 2));
        assert_eq!(day2, 115_385); // ceil((3_100_000 - 100_000) / 26)
    }
}
