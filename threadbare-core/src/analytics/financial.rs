//! Financial metrics
//!
//! Totals and averages over item prices. Missing prices count as zero;
//! original price falls back to price so `savings` only reflects rows
//! that actually recorded a discount.

use super::safe_mean;
use crate::types::WardrobeItem;
use serde::Serialize;

/// Aggregate financial metrics for a wardrobe.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    /// Sum of purchase prices
    pub total_value: f64,
    /// Mean purchase price, zero for an empty wardrobe
    pub avg_price: f64,
    /// Sum of original (pre-discount) prices
    pub total_original_value: f64,
    /// Original value minus purchase value. Negative when original-price
    /// data is inconsistent; passed through unclamped.
    pub savings: f64,
}

impl FinancialMetrics {
    /// Compute financial metrics over the given items.
    pub fn compute(items: &[WardrobeItem]) -> Self {
        let total_value: f64 = items.iter().map(WardrobeItem::price_or_zero).sum();
        let total_original_value: f64 = items.iter().map(WardrobeItem::original_or_price).sum();

        Self {
            total_value,
            avg_price: safe_mean(total_value, items.len()),
            total_original_value,
            savings: total_original_value - total_value,
        }
    }
}
