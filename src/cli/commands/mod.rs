pub mod add;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod day;
pub mod export;
pub mod import;
pub mod init;
pub mod items;
pub mod report;
pub mod status;
pub mod target;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::month::MonthState;
use crate::store::Store;

/// Open the configured store and load the state. Shared by every handler
/// except `init`, which is the one allowed to create the file.
pub(crate) fn load_state(cfg: &Config) -> AppResult<(Store, MonthState)> {
    let store = Store::open(&cfg.store);
    let state = store.load()?;
    Ok((store, state))
}
