//! Grouping and ranking helpers shared by every breakdown
//!
//! All derived percentages go through `percentage_of`, which defines the
//! share as exactly 0 when the base metric is 0 — a breakdown over an
//! empty period must never produce NaN or a division error.

use gatehouse_types::{CategoryTotal, GroupedRow};

/// Round a derived value to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage share of `part` in `total`, 0 when `total` is 0
pub fn percentage_of(part: f64, total: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else {
        round2(part / total * 100.0)
    }
}

/// Rank groups by summed amount descending and derive each share of the
/// amount total
pub fn ranked_by_amount(mut rows: Vec<GroupedRow>) -> Vec<CategoryTotal> {
    rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    let total: f64 = rows.iter().map(|row| row.amount).sum();
    rows.into_iter()
        .map(|row| CategoryTotal {
            percentage: percentage_of(row.amount, total),
            label: row.label,
            count: row.count,
            amount: row.amount,
        })
        .collect()
}

/// Rank groups by count descending and derive each share of the count
/// total
pub fn ranked_by_count(mut rows: Vec<GroupedRow>) -> Vec<CategoryTotal> {
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    let total: u64 = rows.iter().map(|row| row.count).sum();
    rows.into_iter()
        .map(|row| CategoryTotal {
            percentage: percentage_of(row.count as f64, total as f64),
            label: row.label,
            count: row.count,
            amount: row.amount,
        })
        .collect()
}
