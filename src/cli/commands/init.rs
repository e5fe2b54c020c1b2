use crate::config::Config;
use crate::errors::AppResult;
use crate::models::month::MonthState;
use crate::store::Store;
use crate::utils::date;
use chrono::Datelike;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty store for the current month (unless one already exists)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let store_path = if let Some(custom) = &cli.store {
        Config::init_all(Some(custom.clone()), cli.test)?
    } else {
        Config::init_all(None, cli.test)?
    };

    println!("⚙️  Initializing targetlock…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Store      : {}", store_path.display());

    let store = Store::open(&store_path);
    if store.exists() {
        println!("ℹ️  Store already exists, keeping current records.");
    } else {
        let cfg = if cli.test { Config::default() } else { Config::load() };
        let today = date::today();
        let state = MonthState::new(
            today.year(),
            today.month0(),
            cfg.default_monthly_target,
            cfg.default_meal_cost,
        );
        store.save(&state)?;
        println!(
            "✅ Empty store created for {} {}",
            date::month_name(today.month()),
            today.year()
        );
    }

    println!("🎉 targetlock initialization completed!");
    Ok(())
}
