use crate::cli::commands::load_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::stats::calculate_daily_stats;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::month::MonthState;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::compact_money;
use ansi_term::Colour;
use chrono::Datelike;

const CELL_WIDTH: usize = 10;

/// Month heat view: one cell per day with net income and status.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let (_store, state) = load_state(cfg)?;

        let (year, month1) = match month {
            Some(m) => date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?,
            None => (state.current_year, state.month1()),
        };

        header(format!("{} {}", date::month_name(month1), year));

        for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
            print!("{:<width$}", name, width = CELL_WIDTH);
        }
        println!();

        let days = date::all_days_of_month(year, month1);

        // Sunday-first grid: pad the first week so day 1 lands on its column.
        let mut column = if let Some(first) = days.first() {
            let lead = first.weekday().num_days_from_sunday() as usize;
            print!("{}", " ".repeat(lead * CELL_WIDTH));
            lead
        } else {
            0
        };

        for d in days {
            print!("{}", render_cell(&state, d));
            column += 1;
            if column == 7 {
                println!();
                column = 0;
            }
        }
        if column != 0 {
            println!();
        }

        println!();
        println!(
            "{} net >= daily target   {} below target   {} rest day / Sunday",
            Colour::Green.bold().paint("OK"),
            Colour::Red.bold().paint("MIN"),
            Colour::Fixed(8).paint("OFF")
        );
    }

    Ok(())
}

/// One fixed-width cell: day number, compact net, status tag.
fn render_cell(state: &MonthState, d: chrono::NaiveDate) -> String {
    let key = date::date_key(d);
    let status = Core::day_status(state, d);

    let body = match state.record(&key) {
        Some(_) => {
            let stats = calculate_daily_stats(state.record(&key), state.meal_cost);
            format!("{:>2} {} {}", d.day(), compact_money(stats.net), status)
        }
        None => format!("{:>2} -", d.day()),
    };

    let padded = format!("{:<width$}", body, width = CELL_WIDTH);
    match status {
        "OK" => Colour::Green.paint(padded).to_string(),
        "MIN" => Colour::Red.paint(padded).to_string(),
        "OFF" => Colour::Fixed(8).paint(padded).to_string(),
        _ if date::is_sunday(d) => Colour::Fixed(8).paint(padded).to_string(),
        _ => padded,
    }
}
