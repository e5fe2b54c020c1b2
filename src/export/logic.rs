// src/export/logic.rs

use crate::core::calculator::stats::calculate_daily_stats;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportRow;
use crate::models::month::MonthState;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export per-day report rows.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute output file path
    /// - `month`: `None` exports every stored record; `Some("YYYY-MM")`
    ///   exports every day of that month, recorded or not.
    pub fn export(
        state: &MonthState,
        format: &ExportFormat,
        file: &str,
        month: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows = match month {
            None => collect_recorded_rows(state),
            Some(m) => {
                let (year, month1) = date::parse_month(m)
                    .ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
                collect_month_rows(state, year, month1)
            }
        };

        if rows.is_empty() {
            warning("⚠️  No records found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

/// One row per stored record, in key order (the map is already sorted).
fn collect_recorded_rows(state: &MonthState) -> Vec<ReportRow> {
    state
        .records
        .keys()
        .filter_map(|key| date::parse_date(key).map(|d| build_row(state, d)))
        .collect()
}

/// One row per calendar day of the given month, recorded or not.
fn collect_month_rows(state: &MonthState, year: i32, month1: u32) -> Vec<ReportRow> {
    date::all_days_of_month(year, month1)
        .into_iter()
        .map(|d| build_row(state, d))
        .collect()
}

fn build_row(state: &MonthState, d: NaiveDate) -> ReportRow {
    let key = date::date_key(d);
    let stats = calculate_daily_stats(state.record(&key), state.meal_cost);
    ReportRow {
        date: key,
        weekday: date::weekday_str(d),
        status: Core::day_status(state, d).to_string(),
        pairs: stats.total_pairs,
        premium: stats.premium_count,
        income: stats.income,
        meal_allowance: stats.meal_allowance,
        kasbon: stats.kasbon,
    }
}
