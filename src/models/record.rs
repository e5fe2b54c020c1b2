use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar day's recorded activity.
///
/// Field names follow the backup document shape (`isWorkDay`, `items`,
/// `kasbon`) so existing backups stay importable. Records are created on
/// first interaction with a date and only ever overwritten, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    pub date: String, // canonical key "YYYY-MM-DD"

    #[serde(rename = "isWorkDay")]
    pub is_work_day: bool,

    /// Catalog item id → quantity produced that day. Counts never go
    /// negative (decrement clamps at zero).
    #[serde(default)]
    pub items: BTreeMap<String, i64>,

    /// Cash advance drawn that day. Cuts take-home pay, never the revenue
    /// figure compared against the target.
    #[serde(default)]
    pub kasbon: i64,
}

impl DailyRecord {
    /// Fresh record for a date the user touches for the first time:
    /// assumed working, nothing produced, no advance.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            is_work_day: true,
            items: BTreeMap::new(),
            kasbon: 0,
        }
    }

    /// Apply a quantity delta for an item, clamping the count at zero.
    pub fn bump_item(&mut self, item_id: &str, delta: i64) -> i64 {
        let count = self.items.entry(item_id.to_string()).or_insert(0);
        *count = (*count + delta).max(0);
        *count
    }
}
