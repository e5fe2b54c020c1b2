pub mod daily_stats;
pub mod day_summary;
pub mod month;
pub mod projection;
pub mod record;
