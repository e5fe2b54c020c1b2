//! Static priced-item catalog.
//! Loaded once, read-only for the life of the process; records reference
//! items by id and tolerate ids that no longer exist here.

use serde::{Deserialize, Serialize};

/// Price floor above which a premium-tier item counts as "premium"
/// even without the naming convention.
pub const PREMIUM_PRICE_FLOOR: i64 = 15_000;

pub const DEFAULT_MONTHLY_TARGET: i64 = 5_000_000;
pub const DEFAULT_MEAL_COST: i64 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Yellow,
    Orange,
    Red,
    White,
    Blue,
    Purple,
    Operational,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Yellow => "YELLOW",
            Category::Orange => "ORANGE",
            Category::Red => "RED",
            Category::White => "WHITE",
            Category::Blue => "BLUE",
            Category::Purple => "PURPLE",
            Category::Operational => "OPERATIONAL",
        }
    }

    /// Operational entries (overtime, shuttle, ...) add income but are not
    /// physical production units.
    pub fn counts_as_pair(&self) -> bool {
        !matches!(self, Category::Operational)
    }
}

#[derive(Debug, Clone)]
pub struct CatalogItem {
    pub id: &'static str,
    pub label: &'static str,
    pub unit_price: i64,
    pub category: Category,
}

impl CatalogItem {
    /// Premium classification: category gate first (BLUE/PURPLE/WHITE),
    /// then naming convention OR price threshold.
    pub fn is_premium(&self) -> bool {
        matches!(
            self.category,
            Category::Blue | Category::Purple | Category::White
        ) && (self.id.contains("premium") || self.unit_price >= PREMIUM_PRICE_FLOOR)
    }
}

pub const CATALOG: &[CatalogItem] = &[
    // Rp10.000
    CatalogItem { id: "basic_cleaning", label: "Basic Cleaning", unit_price: 10_000, category: Category::Yellow },
    CatalogItem { id: "special_white_basic", label: "Sp. White Basic", unit_price: 10_000, category: Category::Yellow },
    CatalogItem { id: "topi", label: "Topi", unit_price: 10_000, category: Category::Yellow },
    CatalogItem { id: "unyellowing", label: "Unyellowing", unit_price: 10_000, category: Category::Yellow },
    // Rp13.000
    CatalogItem { id: "leather_care", label: "Leather Care", unit_price: 13_000, category: Category::Orange },
    CatalogItem { id: "tas", label: "Tas", unit_price: 13_000, category: Category::Orange },
    CatalogItem { id: "extra_hard", label: "Ekstra Hard", unit_price: 13_000, category: Category::Orange },
    CatalogItem { id: "jaket", label: "Jaket", unit_price: 13_000, category: Category::Orange },
    // Rp12.000
    CatalogItem { id: "reguler_cleaning", label: "Reguler Cleaning", unit_price: 12_000, category: Category::Red },
    CatalogItem { id: "sw_reguler", label: "SW Reguler", unit_price: 12_000, category: Category::Red },
    // Rp25.000
    CatalogItem { id: "wearpack", label: "Wearpack", unit_price: 25_000, category: Category::White },
    CatalogItem { id: "stroller", label: "Stroller", unit_price: 25_000, category: Category::White },
    // Rp15.000
    CatalogItem { id: "premium_cleaning", label: "Premium Cleaning", unit_price: 15_000, category: Category::Blue },
    CatalogItem { id: "sw_premium", label: "SW Premium", unit_price: 15_000, category: Category::Blue },
    CatalogItem { id: "koper", label: "Koper XXL", unit_price: 15_000, category: Category::Blue },
    // Rp20.000
    CatalogItem { id: "boots_hard", label: "Boots Hard", unit_price: 20_000, category: Category::Purple },
    CatalogItem { id: "boots_trail", label: "Boots Trail/Balap", unit_price: 20_000, category: Category::Purple },
    // Operational (income add-ons)
    CatalogItem { id: "lembur", label: "Lembur", unit_price: 15_000, category: Category::Operational },
    CatalogItem { id: "shift_2", label: "Jaga 2 Shift", unit_price: 15_000, category: Category::Operational },
    CatalogItem { id: "antar_jemput", label: "Antar Jemput", unit_price: 12_000, category: Category::Operational },
];

/// Tolerant lookup: unknown ids simply return None, they are never an error
/// in the calculators (supports catalog evolution without breaking records).
pub fn find_item(id: &str) -> Option<&'static CatalogItem> {
    CATALOG.iter().find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown_ids() {
        assert_eq!(find_item("basic_cleaning").unwrap().unit_price, 10_000);
        assert!(find_item("no_such_item").is_none());
    }

    #[test]
    fn premium_requires_category_gate() {
        // BLUE at the price floor, no "premium" in the id
        assert!(find_item("koper").unwrap().is_premium());
        // naming convention alone is enough inside the gate
        assert!(find_item("sw_premium").unwrap().is_premium());
        // YELLOW never qualifies, whatever the price
        assert!(!find_item("basic_cleaning").unwrap().is_premium());
        // OPERATIONAL at 15_000 is outside the gate too
        assert!(!find_item("lembur").unwrap().is_premium());
    }

    #[test]
    fn pair_counting_excludes_operational() {
        assert!(find_item("wearpack").unwrap().category.counts_as_pair());
        assert!(!find_item("antar_jemput").unwrap().category.counts_as_pair());
    }
}
