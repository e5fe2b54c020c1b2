//! JSON document store.
//! The whole tracker state is one pretty-printed JSON file whose shape is the
//! backup format itself, so `backup` and the store file are interchangeable.

use crate::errors::{AppError, AppResult};
use crate::models::month::MonthState;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the tracker state. A missing file is a usage error, not a crash:
    /// `init` is the only command allowed to create the store.
    pub fn load(&self) -> AppResult<MonthState> {
        if !self.path.exists() {
            return Err(AppError::Config(format!(
                "store file not found: {} (run `targetlock init` first)",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path)?;
        parse_document(&content)
    }

    /// Persist the state pretty-printed, creating parent directories on the
    /// first write.
    pub fn save(&self, state: &MonthState) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Parse a backup document. The two structural keys are checked before
/// deserializing so a wrong file fails with a clear message instead of a
/// field-by-field serde error; everything else falls back to defaults.
pub fn parse_document(content: &str) -> AppResult<MonthState> {
    let value: Value = serde_json::from_str(content)?;

    let obj = value
        .as_object()
        .ok_or_else(|| AppError::Import("not a JSON object".to_string()))?;

    if !obj.contains_key("monthlyTarget") {
        return Err(AppError::Import("missing field `monthlyTarget`".to_string()));
    }
    if !obj.contains_key("records") {
        return Err(AppError::Import("missing field `records`".to_string()));
    }

    Ok(serde_json::from_value(value)?)
}
