use crate::core::calculator::{stats, target};
use crate::models::day_summary::DaySummary;
use crate::models::month::MonthState;
use crate::utils::date;
use crate::utils::formatting::rupiah;
use chrono::NaiveDate;

/// A worked day earning less than this is flagged as failed outright.
pub const DAY_FAIL_FLOOR: i64 = 150_000;
/// Premium units at/above this with pairs below the floor means the worker
/// stopped early on quantity.
pub const PREMIUM_STALL_MIN: i64 = 4;
pub const PAIRS_STALL_FLOOR: i64 = 14;

const BASIC_PAIR_PRICE: i64 = 10_000;
const WEARPACK_PRICE: i64 = 25_000;

pub struct Core;

impl Core {
    /// Everything the dashboard shows for one day, derived in one pass from
    /// the record set.
    pub fn build_day_summary(state: &MonthState, d: NaiveDate) -> DaySummary {
        let key = date::date_key(d);
        let stats = stats::calculate_daily_stats(state.record(&key), state.meal_cost);
        let target = target::strict_daily_target(state, d);
        DaySummary {
            surplus: stats.net - target,
            take_home: stats.income - stats.kasbon + stats.meal_allowance,
            stats,
            target,
        }
    }

    /// Warning lines for a day, in display order. Empty on off days.
    pub fn warnings(state: &MonthState, d: NaiveDate) -> Vec<String> {
        let key = date::date_key(d);
        if !state.record(&key).map(|r| r.is_work_day).unwrap_or(true) {
            return Vec::new();
        }

        let summary = Self::build_day_summary(state, d);
        let mut messages = Vec::new();

        if summary.stats.net < DAY_FAIL_FLOOR {
            messages.push("FAILED DAY. The monthly target just got heavier.".to_string());
        }

        if summary.stats.premium_count >= PREMIUM_STALL_MIN
            && summary.stats.total_pairs < PAIRS_STALL_FLOOR
        {
            messages.push("You stopped too early. PUSH THE QUANTITY.".to_string());
        }

        if Self::consecutive_loss(state, d) {
            messages.push("This work pattern WILL fail.".to_string());
        }

        let gap = summary.target - summary.stats.net;
        if gap > 0 {
            messages.push(format!("{} SHORT of surviving today.", rupiah(gap)));
        }

        messages
    }

    /// Calendar cell status for a date. Only recorded days have one: OFF for
    /// a declared rest day, OK when net covers the day's strict target, MIN
    /// when it falls short.
    pub fn day_status(state: &MonthState, d: NaiveDate) -> &'static str {
        let key = date::date_key(d);
        match state.record(&key) {
            None => "-",
            Some(r) if !r.is_work_day => "OFF",
            Some(_) => {
                let s = Self::build_day_summary(state, d);
                if s.stats.net >= s.target { "OK" } else { "MIN" }
            }
        }
    }

    /// Yesterday and today both under their (recomputed) targets.
    pub fn consecutive_loss(state: &MonthState, d: NaiveDate) -> bool {
        let Some(yesterday) = d.pred_opt() else {
            return false;
        };
        let today = Self::build_day_summary(state, d);
        let prior = Self::build_day_summary(state, yesterday);
        prior.stats.net < prior.target && today.stats.net < today.target
    }

    /// Catch-up advice for a deficit: how many basic pairs, or how many
    /// wearpack/stroller units, would close the gap.
    pub fn catch_up_pairs(deficit: i64) -> (i64, i64) {
        let basics = (deficit + BASIC_PAIR_PRICE - 1) / BASIC_PAIR_PRICE;
        let heavies = (deficit + WEARPACK_PRICE - 1) / WEARPACK_PRICE;
        (basics, heavies)
    }

    /// Verdict line by projected percentage of the monthly target.
    pub fn verdict(projected_percent: f64) -> &'static str {
        if projected_percent < 80.0 {
            "PATHETIC PACE. THE PAYCHECK TARGET IS FAR OUT OF REACH."
        } else if projected_percent < 100.0 {
            "WORK HARDER. THE END-OF-MONTH BONUS IS AT RISK."
        } else {
            "HOLD THIS SPEED. FOCUS ON QUALITY."
        }
    }
}
