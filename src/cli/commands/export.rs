use crate::cli::commands::load_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let (_store, state) = load_state(cfg)?;
        ExportLogic::export(&state, format, file, month, *force)?;
    }
    Ok(())
}
