use crate::catalog;
use crate::cli::commands::load_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::stats::calculate_daily_stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::rupiah;

/// Record work items on a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        item,
        qty,
        minus,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        //
        // 2. Resolve the catalog item at the boundary; the calculators are
        //    tolerant but the CLI should not let typos into the ledger.
        //
        let entry = catalog::find_item(item).ok_or_else(|| {
            AppError::UnknownItem(format!(
                "'{}'. Run `targetlock items` to list valid ids.",
                item
            ))
        })?;

        //
        // 3. Quantity (default 1), sign by --minus
        //
        let qty = qty.unwrap_or(1);
        if qty <= 0 {
            return Err(AppError::InvalidAmount(format!(
                "quantity must be positive, got {}",
                qty
            )));
        }
        let delta = if *minus { -qty } else { qty };

        //
        // 4. Apply and persist
        //
        let (store, mut state) = load_state(cfg)?;
        let count = state.record_mut(d).bump_item(item, delta);
        store.save(&state)?;

        success(format!(
            "{} {} x{} on {} (count now {})",
            if *minus { "Removed" } else { "Added" },
            entry.label,
            qty,
            date_str,
            count
        ));

        let day = calculate_daily_stats(state.record(&date::date_key(d)), state.meal_cost);
        println!(
            "   Day income: {}  |  pairs: {}  |  premium: {}",
            rupiah(day.income),
            day.total_pairs,
            day.premium_count
        );

        if !state.is_work_day(d) {
            warning("This day is marked OFF: its items earn nothing until you run `day --work`.");
        }
    }

    Ok(())
}
