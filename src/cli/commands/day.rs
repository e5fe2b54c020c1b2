use crate::cli::commands::load_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::rupiah;

/// Set a day's work flag or kasbon advance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        date: date_str,
        work,
        off,
        kasbon,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        if let Some(amount) = kasbon {
            if *amount < 0 {
                return Err(AppError::InvalidAmount(format!(
                    "kasbon cannot be negative, got {}",
                    amount
                )));
            }
        }

        let (store, mut state) = load_state(cfg)?;

        {
            let rec = state.record_mut(d);
            if *work {
                rec.is_work_day = true;
            }
            if *off {
                rec.is_work_day = false;
            }
            if let Some(amount) = kasbon {
                rec.kasbon = *amount;
            }
        }

        store.save(&state)?;

        if *work {
            success(format!("{} marked as a WORKING day", date_str));
        }
        if *off {
            success(format!(
                "{} marked OFF: items and meal forfeited, kasbon stays on the ledger",
                date_str
            ));
        }
        if let Some(amount) = kasbon {
            success(format!("Kasbon on {} set to {}", date_str, rupiah(*amount)));
        }

        if !*work && !*off && kasbon.is_none() {
            let rec = state.record_or_default(d);
            info(format!(
                "{}: {} day, kasbon {}",
                date_str,
                if rec.is_work_day { "working" } else { "off" },
                rupiah(rec.kasbon)
            ));
        }
    }

    Ok(())
}
