use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{Store, parse_document};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::rupiah;
use std::fs;
use std::io::{self, Write};

/// Replace the store with a backup document.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, force } = cmd {
        let content = fs::read_to_string(file)?;
        // Validate before touching the store: a bad file must never wipe
        // the current ledger.
        let incoming = parse_document(&content)?;

        let store = Store::open(&cfg.store);

        if store.exists() && !force {
            warning(format!(
                "This will replace the current store ({}).",
                store.path().display()
            ));
            print!("Continue? [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer).map_err(AppError::from)?;
            let ans = answer.trim().to_ascii_lowercase();
            if ans != "y" && ans != "yes" {
                return Err(AppError::Import(
                    "cancelled: current store not replaced".to_string(),
                ));
            }
        }

        store.save(&incoming)?;

        success(format!(
            "Imported {} records, active month {} {}, target {}",
            incoming.records.len(),
            date::month_name(incoming.month1()),
            incoming.current_year,
            rupiah(incoming.monthly_target)
        ));
    }
    Ok(())
}
