use crate::models::record::DailyRecord;
use crate::utils::date;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of truth for the tracker: monthly goal, allowance rate, the active
/// month, and the sparse per-day record map.
///
/// Serde names are the backup document shape (`monthlyTarget`, `mealCost`,
/// `currentYear`, `currentMonth` 0-based, `records`) and must not change:
/// existing backups have to remain importable bit-exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthState {
    #[serde(rename = "monthlyTarget")]
    pub monthly_target: i64,

    #[serde(rename = "mealCost")]
    pub meal_cost: i64,

    #[serde(rename = "currentYear")]
    pub current_year: i32,

    /// 0–11, kept 0-based on the wire for backup compatibility.
    #[serde(rename = "currentMonth")]
    pub current_month: u32,

    /// Sparse map keyed `YYYY-MM-DD`; missing dates mean "no record yet".
    /// May retain dates outside the active month (history survives month
    /// switches in the same store).
    #[serde(default)]
    pub records: BTreeMap<String, DailyRecord>,
}

impl MonthState {
    pub fn new(year: i32, month0: u32, monthly_target: i64, meal_cost: i64) -> Self {
        Self {
            monthly_target,
            meal_cost,
            current_year: year,
            current_month: month0,
            records: BTreeMap::new(),
        }
    }

    /// Active month as 1–12 (chrono convention).
    pub fn month1(&self) -> u32 {
        self.current_month + 1
    }

    pub fn record(&self, key: &str) -> Option<&DailyRecord> {
        self.records.get(key)
    }

    /// The record-or-default pattern: an explicit default value instead of
    /// optional-chaining scattered across call sites.
    pub fn record_or_default(&self, d: NaiveDate) -> DailyRecord {
        let key = date::date_key(d);
        self.records
            .get(&key)
            .cloned()
            .unwrap_or_else(|| DailyRecord::new(key))
    }

    /// Fetch-or-create for mutation; first touch of a date creates the
    /// default record (working, empty, zero kasbon).
    pub fn record_mut(&mut self, d: NaiveDate) -> &mut DailyRecord {
        let key = date::date_key(d);
        self.records
            .entry(key.clone())
            .or_insert_with(|| DailyRecord::new(key))
    }

    /// Work-day determination: an explicit record wins in either direction,
    /// otherwise every day defaults to working except Sunday.
    pub fn is_work_day(&self, d: NaiveDate) -> bool {
        match self.records.get(&date::date_key(d)) {
            Some(r) => r.is_work_day,
            None => d.weekday() != Weekday::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_defaults_off_and_record_overrides() {
        let mut state = MonthState::new(2024, 6, 3_100_000, 15_000);
        // 2024-07-07 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2024, 7, 7).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 7, 8).unwrap();
        assert!(!state.is_work_day(sunday));
        assert!(state.is_work_day(monday));

        state.record_mut(sunday).is_work_day = true;
        state.record_mut(monday).is_work_day = false;
        assert!(state.is_work_day(sunday));
        assert!(!state.is_work_day(monday));
    }

    #[test]
    fn wire_format_round_trips() {
        let mut state = MonthState::new(2026, 0, 5_000_000, 15_000);
        state
            .record_mut(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
            .bump_item("topi", 2);

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"monthlyTarget\":5000000"));
        assert!(json.contains("\"mealCost\":15000"));
        assert!(json.contains("\"currentMonth\":0"));
        assert!(json.contains("\"2026-01-05\""));

        let back: MonthState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
