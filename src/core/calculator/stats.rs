use crate::catalog;
use crate::models::daily_stats::DailyStats;
use crate::models::record::DailyRecord;

/// Reduce one day's record into its statistics summary.
///
/// Pure function over (record-or-absent, meal rate): absent means all zero,
/// and a day flagged off forfeits income and the meal allowance even when
/// stale item counts are still present on the record. Unknown catalog ids
/// and non-positive counts contribute nothing.
pub fn calculate_daily_stats(record: Option<&DailyRecord>, meal_cost: i64) -> DailyStats {
    let Some(record) = record else {
        return DailyStats::default();
    };

    if !record.is_work_day {
        // Off day: no income, no meal money, but the advance stays on the
        // ledger.
        return DailyStats {
            kasbon: record.kasbon,
            ..DailyStats::default()
        };
    }

    let mut stats = DailyStats {
        meal_allowance: meal_cost,
        kasbon: record.kasbon,
        ..DailyStats::default()
    };

    for (item_id, &count) in &record.items {
        if count <= 0 {
            continue;
        }
        let Some(item) = catalog::find_item(item_id) else {
            continue; // removed/unknown id, silently skipped
        };

        stats.income += item.unit_price * count;

        if item.category.counts_as_pair() {
            stats.total_pairs += count;
        }
        if item.is_premium() {
            stats.premium_count += count;
        }
    }

    // Performance is judged on gross service revenue; there is no separate
    // deduction term in this model.
    stats.net = stats.income;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(items: &[(&str, i64)]) -> DailyRecord {
        let mut r = DailyRecord::new("2024-07-01");
        for (id, n) in items {
            r.items.insert(id.to_string(), *n);
        }
        r
    }

    #[test]
    fn absent_record_is_all_zero() {
        let stats = calculate_daily_stats(None, 15_000);
        assert_eq!(stats, DailyStats::default());
    }

    #[test]
    fn off_day_forfeits_items_and_meal() {
        let mut r = record_with(&[("basic_cleaning", 5)]);
        r.is_work_day = false;
        let stats = calculate_daily_stats(Some(&r), 15_000);
        assert_eq!(stats.income, 0);
        assert_eq!(stats.meal_allowance, 0);
        assert_eq!(stats.total_pairs, 0);
    }

    #[test]
    fn off_day_keeps_the_advance_on_the_ledger() {
        let mut r = DailyRecord::new("2024-07-01");
        r.is_work_day = false;
        r.kasbon = 50_000;
        let stats = calculate_daily_stats(Some(&r), 15_000);
        assert_eq!(stats.kasbon, 50_000);
        assert_eq!(stats.income, 0);
    }

    #[test]
    fn income_pairs_and_meal_accumulate() {
        let r = record_with(&[("basic_cleaning", 10), ("lembur", 1)]);
        let stats = calculate_daily_stats(Some(&r), 15_000);
        assert_eq!(stats.income, 10 * 10_000 + 15_000);
        assert_eq!(stats.net, stats.income);
        // operational overtime is income but not a pair
        assert_eq!(stats.total_pairs, 10);
        assert_eq!(stats.meal_allowance, 15_000);
    }

    #[test]
    fn premium_dual_rule() {
        // BLUE at the 15k floor without "premium" in the id still counts;
        // cheap-category items never do, whatever their price.
        let r = record_with(&[("koper", 3), ("boots_hard", 2), ("basic_cleaning", 4)]);
        let stats = calculate_daily_stats(Some(&r), 0);
        assert_eq!(stats.premium_count, 5);
        assert_eq!(stats.total_pairs, 9);
    }

    #[test]
    fn unknown_ids_and_bad_counts_are_skipped() {
        let r = record_with(&[("ghost_item", 7), ("topi", -3), ("topi_typo", 0)]);
        let stats = calculate_daily_stats(Some(&r), 15_000);
        assert_eq!(stats.income, 0);
        assert_eq!(stats.total_pairs, 0);
        assert_eq!(stats.meal_allowance, 15_000);
    }
}
