//! Aggregate metrics over the collection.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Stats computed at request time over the current collection.
///
/// All fields are zero for an empty collection, and every field is finite:
/// the mean is computed incrementally and `total_value` saturates at
/// `±f64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_items: usize,
    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub total_value: f64,
}

impl StatsSummary {
    pub fn compute(items: &[Item]) -> Self {
        if items.is_empty() {
            return Self::default();
        }

        let mut average = 0.0_f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut total = 0.0_f64;

        for (i, item) in items.iter().enumerate() {
            // Both terms are at most MAX/n, so the step cannot overflow.
            let n = (i + 1) as f64;
            average = saturate(average + (item.price / n - average / n));
            min = min.min(item.price);
            max = max.max(item.price);
            total = saturate(total + item.gross_value());
        }

        Self {
            total_items: items.len(),
            average_price: average,
            min_price: min,
            max_price: max,
            total_value: total,
        }
    }
}

/// Clamp an overflowed (infinite) result back to the largest finite value.
pub(crate) fn saturate(value: f64) -> f64 {
    value.clamp(-f64::MAX, f64::MAX)
}
