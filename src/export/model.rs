// src/export/model.rs

use serde::Serialize;

/// Flat per-day row for CSV/JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRow {
    pub date: String,
    pub weekday: String,
    pub status: String,
    pub pairs: i64,
    pub premium: i64,
    pub income: i64,
    pub meal_allowance: i64,
    pub kasbon: i64,
}
