//! Wear metrics
//!
//! Cost-per-wear ranking plus most-worn and never-worn projections.
//!
//! Cost per wear is only defined for items with a price and at least one
//! wear; everything else is excluded from the ranking outright rather
//! than treated as zero or infinite. One ascending ranking is the single
//! source for both the best-value and worst-value lists, so with fewer
//! than ten qualifying items the two may overlap.

use super::safe_mean;
use crate::types::{Outfit, WardrobeItem};
use serde::Serialize;

/// Entries in the best/worst value lists.
pub const VALUE_LIST_LEN: usize = 5;
/// Entries in the most-worn list.
pub const MOST_WORN_LEN: usize = 10;
/// Entries in the never-worn preview list.
pub const NEVER_WORN_PREVIEW_LEN: usize = 10;

/// A qualifying item in the cost-per-wear ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostPerWear {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub price: f64,
    pub times_worn: i64,
    pub cost_per_wear: f64,
}

/// Projection for the most-worn list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WornItem {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub times_worn: i64,
}

/// Projection for the never-worn preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeverWornItem {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub price: Option<f64>,
}

/// Wear-frequency metrics for a wardrobe.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WearMetrics {
    /// Sum of recorded wears across all items
    pub total_wears: i64,
    /// Mean wears per item, zero for an empty wardrobe
    pub avg_wears_per_item: f64,
    /// Mean cost per wear over the qualifying ranking, zero when empty
    pub avg_cost_per_wear: f64,
    /// Items with at least one wear, most worn first, top 10
    pub most_worn_items: Vec<WornItem>,
    /// Count of items never worn
    pub never_worn: usize,
    /// First 10 never-worn items in collection order
    pub never_worn_items: Vec<NeverWornItem>,
}

/// Best/worst value lists derived from the cost-per-wear ranking.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueMetrics {
    /// Lowest cost per wear first
    pub best_value_items: Vec<CostPerWear>,
    /// Highest cost per wear first
    pub worst_value_items: Vec<CostPerWear>,
}

/// Build the ascending cost-per-wear ranking.
///
/// Only items with a price and `timesWorn > 0` qualify. The sort is
/// stable: equal cost-per-wear values keep their collection order.
pub fn cost_per_wear_ranking(items: &[WardrobeItem]) -> Vec<CostPerWear> {
    let mut ranking: Vec<CostPerWear> = items
        .iter()
        .filter_map(|item| {
            let price = item.price?;
            let times_worn = item.wear_count();
            if times_worn <= 0 {
                return None;
            }
            Some(CostPerWear {
                id: item.id.clone(),
                name: item.name.clone(),
                brand: item.brand.clone(),
                price,
                times_worn,
                cost_per_wear: price / times_worn as f64,
            })
        })
        .collect();

    ranking.sort_by(|a, b| {
        a.cost_per_wear
            .partial_cmp(&b.cost_per_wear)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranking
}

impl WearMetrics {
    /// Compute wear metrics over the given items and their ranking.
    pub fn compute(items: &[WardrobeItem], ranking: &[CostPerWear]) -> Self {
        let total_wears: i64 = items.iter().map(WardrobeItem::wear_count).sum();

        let mut most_worn: Vec<&WardrobeItem> =
            items.iter().filter(|i| i.wear_count() > 0).collect();
        most_worn.sort_by(|a, b| b.wear_count().cmp(&a.wear_count()));
        let most_worn_items = most_worn
            .into_iter()
            .take(MOST_WORN_LEN)
            .map(|item| WornItem {
                id: item.id.clone(),
                name: item.name.clone(),
                brand: item.brand.clone(),
                times_worn: item.wear_count(),
            })
            .collect();

        let never_worn_all: Vec<&WardrobeItem> =
            items.iter().filter(|i| i.wear_count() == 0).collect();
        let never_worn = never_worn_all.len();
        let never_worn_items = never_worn_all
            .into_iter()
            .take(NEVER_WORN_PREVIEW_LEN)
            .map(|item| NeverWornItem {
                id: item.id.clone(),
                name: item.name.clone(),
                brand: item.brand.clone(),
                price: item.price,
            })
            .collect();

        let cpw_sum: f64 = ranking.iter().map(|e| e.cost_per_wear).sum();

        Self {
            total_wears,
            avg_wears_per_item: safe_mean(total_wears as f64, items.len()),
            avg_cost_per_wear: safe_mean(cpw_sum, ranking.len()),
            most_worn_items,
            never_worn,
            never_worn_items,
        }
    }
}

impl ValueMetrics {
    /// Slice the shared ranking into best (first 5) and worst (last 5,
    /// reversed) value lists. Overlap with fewer than 10 entries is
    /// expected and kept.
    pub fn compute(ranking: &[CostPerWear]) -> Self {
        let best_value_items = ranking.iter().take(VALUE_LIST_LEN).cloned().collect();
        let worst_value_items = ranking
            .iter()
            .rev()
            .take(VALUE_LIST_LEN)
            .cloned()
            .collect();
        Self {
            best_value_items,
            worst_value_items,
        }
    }
}

/// Outfit-level metrics.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitMetrics {
    /// Number of saved outfits
    pub total_outfits: usize,
    /// Mean wears per outfit, zero when there are none
    pub avg_outfit_wears: f64,
}

impl OutfitMetrics {
    /// Compute outfit metrics.
    pub fn compute(outfits: &[Outfit]) -> Self {
        let total_wears: i64 = outfits.iter().map(Outfit::wear_count).sum();
        Self {
            total_outfits: outfits.len(),
            avg_outfit_wears: safe_mean(total_wears as f64, outfits.len()),
        }
    }
}
