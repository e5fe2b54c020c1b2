use crate::cli::commands::load_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::projection::calculate_projection;
use crate::core::calculator::stats::calculate_daily_stats;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::month::MonthState;
use crate::ui::messages::{header, shout, success};
use crate::utils::colors::{RESET, color_for_status, color_for_surplus};
use crate::utils::date;
use crate::utils::formatting::rupiah;
use crate::utils::table::{Align, Column, Table};

/// Month evaluation: projection, percentages, ledger totals and verdict.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { month, reference } = cmd {
        let (_store, loaded) = load_state(cfg)?;

        // Evaluating another month is a view concern: same records, shifted
        // active month.
        let state = match month {
            None => loaded,
            Some(m) => {
                let (year, month1) =
                    date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
                let mut s = loaded;
                s.current_year = year;
                s.current_month = month1 - 1;
                s
            }
        };

        let reference_date = match reference {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let p = calculate_projection(&state, reference_date);
        let percent = 100.0 * p.total_net_income as f64 / state.monthly_target.max(1) as f64;
        let projected_percent = 100.0 * p.projected_total / state.monthly_target.max(1) as f64;

        header(format!(
            "REPORT {} {} (as of {})",
            date::month_name(state.month1()),
            state.current_year,
            date::date_key(reference_date)
        ));

        println!("Monthly target    : {}", rupiah(state.monthly_target));
        println!(
            "Net income        : {} ({:.1}%)",
            rupiah(p.total_net_income),
            percent
        );
        println!(
            "Deficit           : {}{}{}",
            color_for_surplus(-p.raw_deficit),
            rupiah(p.deficit),
            RESET
        );
        println!(
            "Days passed       : {}  |  workdays remaining: {}",
            p.days_passed, p.work_days_remaining
        );
        println!(
            "Projected total   : {} ({:.1}%)",
            rupiah(p.projected_total as i64),
            projected_percent
        );
        println!();

        // Ledger totals run over every stored record, not just the shown
        // month: meal and kasbon are payroll facts, not month views.
        let mut total_income = 0i64;
        let mut total_meal = 0i64;
        let mut total_kasbon = 0i64;
        for key in state.records.keys() {
            let stats = calculate_daily_stats(state.record(key), state.meal_cost);
            total_income += stats.income;
            total_meal += stats.meal_allowance;
            total_kasbon += stats.kasbon;
        }

        println!("Ledger income     : {}", rupiah(total_income));
        println!("Ledger meal       : {}", rupiah(total_meal));
        println!("Ledger kasbon     : {}", rupiah(total_kasbon));
        println!(
            "Est. take-home    : {}",
            rupiah(total_income - total_kasbon + total_meal)
        );
        println!();

        print!("{}", month_table(&state));
        println!();

        let verdict = Core::verdict(projected_percent);
        if projected_percent >= 100.0 {
            success(verdict);
        } else {
            shout(verdict);
        }
    }

    Ok(())
}

/// Per-day table for the active month, recorded days only.
fn month_table(state: &MonthState) -> String {
    let mut t = Table::new(vec![
        Column { header: "Date", align: Align::Left },
        Column { header: "Day", align: Align::Left },
        Column { header: "Status", align: Align::Left },
        Column { header: "Pairs", align: Align::Right },
        Column { header: "Premium", align: Align::Right },
        Column { header: "Income", align: Align::Right },
        Column { header: "Kasbon", align: Align::Right },
    ]);

    for d in date::all_days_of_month(state.current_year, state.month1()) {
        let key = date::date_key(d);
        if state.record(&key).is_none() {
            continue;
        }
        let stats = calculate_daily_stats(state.record(&key), state.meal_cost);
        let status = Core::day_status(state, d);
        t.add_row(vec![
            key,
            date::weekday_str(d),
            format!("{}{}{}", color_for_status(status), status, RESET),
            stats.total_pairs.to_string(),
            stats.premium_count.to_string(),
            rupiah(stats.income),
            rupiah(stats.kasbon),
        ]);
    }

    t.render()
}
