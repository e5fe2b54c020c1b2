/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Surplus color:
/// \>= 0 → green
/// \< 0 → red
pub fn color_for_surplus(value: i64) -> &'static str {
    if value >= 0 { GREEN } else { RED }
}

/// Calendar/report day status color.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "OK" => GREEN,
        "MIN" => RED,
        "OFF" => GREY,
        _ => RESET,
    }
}
