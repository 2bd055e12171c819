//! Underutilization and sustainability
//!
//! An item is underutilized when it has been owned for more than 30 days
//! and worn fewer than 3 times. The reference date is an explicit
//! parameter rather than the wall clock, so the calculator is
//! deterministic under test and reproducible from the CLI.

use super::percentage;
use crate::types::WardrobeItem;
use chrono::NaiveDate;
use serde::Serialize;

/// Days of ownership before the underutilization rule applies (strict
/// greater-than).
pub const UNDERUTILIZED_AFTER_DAYS: i64 = 30;
/// Wears at or above this count disqualify an item.
pub const UNDERUTILIZED_MAX_WEARS: i64 = 3;
/// Entries in the underutilized preview list.
pub const UNDERUTILIZED_PREVIEW_LEN: usize = 10;

/// Projection for the underutilized list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderutilizedItem {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub times_worn: i64,
}

/// Underutilized items: full qualifying count plus a priciest-first
/// preview.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderutilizedMetrics {
    /// Total qualifying items
    pub count: usize,
    /// Top 10 by price (missing price sorts as zero)
    pub items: Vec<UnderutilizedItem>,
}

impl UnderutilizedMetrics {
    /// Find underutilized items as of the given date.
    ///
    /// Items without a purchase date never qualify.
    pub fn compute(items: &[WardrobeItem], today: NaiveDate) -> Self {
        let mut qualifying: Vec<&WardrobeItem> = items
            .iter()
            .filter(|item| {
                let Some(purchased) = item.purchase_date else {
                    return false;
                };
                (today - purchased).num_days() > UNDERUTILIZED_AFTER_DAYS
                    && item.wear_count() < UNDERUTILIZED_MAX_WEARS
            })
            .collect();

        let count = qualifying.len();
        qualifying.sort_by(|a, b| {
            b.price_or_zero()
                .partial_cmp(&a.price_or_zero())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let items = qualifying
            .into_iter()
            .take(UNDERUTILIZED_PREVIEW_LEN)
            .map(|item| UnderutilizedItem {
                id: item.id.clone(),
                name: item.name.clone(),
                brand: item.brand.clone(),
                price: item.price,
                times_worn: item.wear_count(),
            })
            .collect();

        Self { count, items }
    }
}

/// Share of items sourced secondhand or tagged with sustainability
/// information, as an integer percentage. Zero for an empty wardrobe.
pub fn sustainability_score(items: &[WardrobeItem]) -> i64 {
    let sustainable = items.iter().filter(|i| i.is_sustainable()).count();
    percentage(sustainable, items.len())
}
