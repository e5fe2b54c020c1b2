use crate::cli::commands::load_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Write a backup copy of the store document.
///
/// The backup IS the store format: re-serialized pretty JSON, importable
/// as-is by `import` or by hand-editing the configured store path.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, force } = cmd {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Backup file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, *force)?;

        let (_store, state) = load_state(cfg)?;
        let json = serde_json::to_string_pretty(&state)?;
        fs::write(path, json)?;

        success(format!("Backup written: {}", path.display()));
    }
    Ok(())
}
