use crate::cli::commands::load_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::rupiah;

/// Show or update the monthly goal, meal allowance and active month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Target { set, meal, month } = cmd {
        let (store, mut state) = load_state(cfg)?;
        let mut changed = false;

        if let Some(amount) = set {
            if *amount <= 0 {
                return Err(AppError::InvalidAmount(format!(
                    "monthly target must be positive, got {}",
                    amount
                )));
            }
            state.monthly_target = *amount;
            success(format!("Monthly target set to {}", rupiah(*amount)));
            changed = true;
        }

        if let Some(amount) = meal {
            if *amount < 0 {
                return Err(AppError::InvalidAmount(format!(
                    "meal allowance cannot be negative, got {}",
                    amount
                )));
            }
            state.meal_cost = *amount;
            success(format!("Meal allowance set to {}/day", rupiah(*amount)));
            changed = true;
        }

        if let Some(m) = month {
            let (year, month1) =
                date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
            state.current_year = year;
            state.current_month = month1 - 1;
            success(format!(
                "Active month switched to {} {} (records kept)",
                date::month_name(month1),
                year
            ));
            changed = true;
        }

        if changed {
            store.save(&state)?;
        } else {
            info(format!(
                "Active month {} {}  |  target {}  |  meal {}/day",
                date::month_name(state.month1()),
                state.current_year,
                rupiah(state.monthly_target),
                rupiah(state.meal_cost)
            ));
        }
    }

    Ok(())
}
