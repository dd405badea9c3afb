//! Aggregations over categorized purchases: category totals, trend
//! series, statistical anomalies, and recurring-expense detection.

use std::collections::{BTreeMap, HashMap};

use thrive_core::{
    CategorizedPurchase, Purchase, SpendingByCategory, SpendingTrend, TransactionCategory,
    TrendPeriod, bucket_key,
};

/// Standard deviations from the category mean before a purchase is
/// flagged as an anomaly.
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 1.5;

/// Window for recurring-expense detection.
pub const DEFAULT_RECURRING_TIMEFRAME_DAYS: i64 = 90;

/// Occurrences of a (merchant, amount) pair before it counts as
/// recurring.
pub const DEFAULT_MIN_OCCURRENCES: usize = 2;

/// Total and share of spend for every category, zero-filled so all
/// twelve always appear. Sorted by amount, largest first; ties keep
/// declaration order.
pub fn calculate_spending_by_category(
    purchases: &[CategorizedPurchase],
) -> Vec<SpendingByCategory> {
    let mut totals: HashMap<TransactionCategory, f64> = HashMap::new();
    for p in purchases {
        *totals.entry(p.category).or_insert(0.0) += p.amount();
    }

    let grand_total: f64 = totals.values().sum();

    let mut rows: Vec<SpendingByCategory> = TransactionCategory::ALL
        .iter()
        .map(|&category| {
            let amount = totals.get(&category).copied().unwrap_or(0.0);
            let percentage = if grand_total > 0.0 {
                amount / grand_total * 100.0
            } else {
                0.0
            };
            SpendingByCategory {
                category,
                amount,
                percentage,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    rows
}

/// Sum spending into date buckets at the given granularity.
/// Output is ascending by bucket key.
pub fn calculate_spending_trends(
    purchases: &[Purchase],
    period: TrendPeriod,
) -> Vec<SpendingTrend> {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for p in purchases {
        *buckets
            .entry(bucket_key(p.purchase_date, period))
            .or_insert(0.0) += p.amount;
    }

    buckets
        .into_iter()
        .map(|(date, amount)| SpendingTrend { date, amount })
        .collect()
}

/// Flag purchases whose amount sits more than `threshold` population
/// standard deviations from their category mean. Categories with
/// fewer than 3 purchases are skipped: not enough sample. Output
/// visits categories in declaration order and keeps input order
/// within a category.
pub fn detect_spending_anomalies(
    purchases: &[CategorizedPurchase],
    threshold: f64,
) -> Vec<CategorizedPurchase> {
    let mut anomalies = Vec::new();

    for category in TransactionCategory::ALL {
        let group: Vec<&CategorizedPurchase> =
            purchases.iter().filter(|p| p.category == category).collect();
        if group.len() < 3 {
            continue;
        }

        let n = group.len() as f64;
        let mean = group.iter().map(|p| p.amount()).sum::<f64>() / n;
        let variance = group.iter().map(|p| (p.amount() - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        for p in group {
            if (p.amount() - mean).abs() > threshold * std_dev {
                anomalies.push(p.clone());
            }
        }
    }

    anomalies
}

/// Find purchases that repeat with the same merchant and exact amount
/// at least `min_occurrences` times, with the earliest and latest
/// occurrence no more than `timeframe_in_days` apart. Qualifying
/// groups contribute all their members, oldest first; groups are
/// visited in first-seen order.
pub fn identify_recurring_expenses(
    purchases: &[CategorizedPurchase],
    timeframe_in_days: i64,
    min_occurrences: usize,
) -> Vec<CategorizedPurchase> {
    // Key on bit-exact amount so cents never collide.
    let mut order: Vec<(String, u64)> = Vec::new();
    let mut groups: HashMap<(String, u64), Vec<&CategorizedPurchase>> = HashMap::new();

    for p in purchases {
        let key = (p.merchant_id().to_string(), p.amount().to_bits());
        let entry = groups.entry(key.clone()).or_default();
        if entry.is_empty() {
            order.push(key);
        }
        entry.push(p);
    }

    let mut recurring = Vec::new();
    for key in &order {
        let group = &groups[key];
        if group.len() < min_occurrences {
            continue;
        }

        let mut sorted = group.clone();
        sorted.sort_by_key(|p| p.date());

        let span = (sorted[sorted.len() - 1].date() - sorted[0].date()).num_days();
        if span <= timeframe_in_days {
            recurring.extend(sorted.into_iter().cloned());
        }
    }

    recurring
}
