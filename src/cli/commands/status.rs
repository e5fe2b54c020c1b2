use crate::cli::commands::load_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::target::strict_daily_target;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, shout};
use crate::utils::colors::{RESET, color_for_surplus};
use crate::utils::date;
use crate::utils::formatting::{rupiah, signed_rupiah};

/// Daily dashboard: strict target, income, surplus, take-home, warnings.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date: date_arg } = cmd {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let (_store, state) = load_state(cfg)?;
        let summary = Core::build_day_summary(&state, d);
        let key = date::date_key(d);

        header(format!("STATUS {} ({})", key, date::weekday_str(d)));

        if !state.is_work_day(d) {
            println!("Day is OFF. Items and meal forfeited; kasbon stays on the ledger.");
        }

        println!("Daily target     : {}", rupiah(summary.target));
        println!("Service income   : {}", rupiah(summary.stats.income));
        println!(
            "Surplus          : {}{}{}",
            color_for_surplus(summary.surplus),
            signed_rupiah(summary.surplus),
            RESET
        );
        println!(
            "Pairs            : {} ({} premium)",
            summary.stats.total_pairs, summary.stats.premium_count
        );
        println!("Meal allowance   : {}", rupiah(summary.stats.meal_allowance));
        println!("Kasbon           : {}", rupiah(summary.stats.kasbon));
        println!("Take-home        : {}", rupiah(summary.take_home));
        println!();

        for line in Core::warnings(&state, d) {
            shout(line);
        }

        let gap = summary.target - summary.stats.net;
        if gap > 0 && state.is_work_day(d) {
            let (basics, heavies) = Core::catch_up_pairs(gap);
            println!(
                "To close the gap today: {} basic pairs or {} wearpack/stroller.",
                basics, heavies
            );
        }

        if let Some(tomorrow) = d.succ_opt() {
            println!(
                "Tomorrow's target: {}",
                rupiah(strict_daily_target(&state, tomorrow))
            );
        }
    }

    Ok(())
}
