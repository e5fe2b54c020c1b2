use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Canonical record key, "YYYY-MM-DD". Must match the persisted format
/// exactly for backup compatibility.
pub fn date_key(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse "YYYY-MM" into (year, month 1-12).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        let Some(next) = d.succ_opt() else {
            break;
        };
        d = next;
    }

    out
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    all_days_of_month(year, month).len() as u32
}

pub fn is_sunday(d: NaiveDate) -> bool {
    d.weekday() == Weekday::Sun
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Short weekday tag for report rows ("Mon", "Tue", ...).
pub fn weekday_str(d: NaiveDate) -> String {
    d.format("%a").to_string()
}
