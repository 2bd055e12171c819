//! Group-by breakdowns
//!
//! Single-pass grouping reducers over wardrobe items, keyed by category,
//! color, brand, season, style, condition, or purchase type.
//!
//! Accumulators are `IndexMap`s so group order reflects first appearance
//! in the collection, and the descending count sorts are stable. Keys are
//! grouped exactly as recorded (no case or whitespace normalization), so
//! grouping cardinality matches the upstream app's data.

use super::percentage;
use crate::types::WardrobeItem;
use indexmap::IndexMap;
use serde::Serialize;

/// Colors reported in the color breakdown.
pub const TOP_COLORS: usize = 8;
/// Brands reported in the brand breakdown.
pub const TOP_BRANDS: usize = 10;

/// Per-category aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub name: String,
    pub count: i64,
    /// Sum of prices in this category
    pub value: f64,
    /// Sum of recorded wears in this category
    pub wears: i64,
    pub avg_price: f64,
}

/// Per-color occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCount {
    pub name: String,
    pub count: i64,
    /// Share of items carrying this color, rounded to an integer percent
    pub percentage: i64,
}

/// Per-brand aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStats {
    pub name: String,
    pub count: i64,
    /// Sum of prices for this brand
    pub value: f64,
}

/// Group items by category, most populous first.
///
/// Items without a category land in the "Uncategorized" bucket.
pub fn category_breakdown(items: &[WardrobeItem]) -> Vec<CategoryStats> {
    let mut groups: IndexMap<String, (i64, f64, i64)> = IndexMap::new();
    for item in items {
        let entry = groups
            .entry(item.category_or_default().to_string())
            .or_insert((0, 0.0, 0));
        entry.0 += 1;
        entry.1 += item.price_or_zero();
        entry.2 += item.wear_count();
    }

    let mut stats: Vec<CategoryStats> = groups
        .into_iter()
        .map(|(name, (count, value, wears))| CategoryStats {
            name,
            count,
            value,
            wears,
            avg_price: value / count as f64,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Count color occurrences across all items, top 8 by count.
///
/// An item contributes once to each of its colors; the percentage is
/// relative to the total item count, not the total color count.
pub fn color_breakdown(items: &[WardrobeItem]) -> Vec<ColorCount> {
    let mut counts: IndexMap<String, i64> = IndexMap::new();
    for item in items {
        for color in &item.colors {
            *counts.entry(color.clone()).or_insert(0) += 1;
        }
    }

    let mut colors: Vec<ColorCount> = counts
        .into_iter()
        .map(|(name, count)| ColorCount {
            percentage: percentage(count as usize, items.len()),
            name,
            count,
        })
        .collect();
    colors.sort_by(|a, b| b.count.cmp(&a.count));
    colors.truncate(TOP_COLORS);
    colors
}

/// Group items by brand, top 10 by count.
///
/// Items without a brand are excluded entirely rather than bucketed as
/// unknown.
pub fn brand_breakdown(items: &[WardrobeItem]) -> Vec<BrandStats> {
    let mut groups: IndexMap<String, (i64, f64)> = IndexMap::new();
    for item in items {
        let Some(brand) = item.brand.as_deref().filter(|b| !b.is_empty()) else {
            continue;
        };
        let entry = groups.entry(brand.to_string()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += item.price_or_zero();
    }

    let mut brands: Vec<BrandStats> = groups
        .into_iter()
        .map(|(name, (count, value))| BrandStats { name, count, value })
        .collect();
    brands.sort_by(|a, b| b.count.cmp(&a.count));
    brands.truncate(TOP_BRANDS);
    brands
}

/// Season occurrence counts; items contribute once per listed season.
pub fn season_distribution(items: &[WardrobeItem]) -> IndexMap<String, i64> {
    let mut counts: IndexMap<String, i64> = IndexMap::new();
    for item in items {
        for season in &item.seasons {
            *counts.entry(season.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Style occurrence counts; items without a style are excluded.
pub fn style_distribution(items: &[WardrobeItem]) -> IndexMap<String, i64> {
    let mut counts: IndexMap<String, i64> = IndexMap::new();
    for item in items {
        if let Some(style) = item.style.as_deref().filter(|s| !s.is_empty()) {
            *counts.entry(style.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Condition occurrence counts; every item contributes exactly one
/// bucket, defaulting to "excellent".
pub fn condition_breakdown(items: &[WardrobeItem]) -> IndexMap<String, i64> {
    let mut counts: IndexMap<String, i64> = IndexMap::new();
    for item in items {
        *counts
            .entry(item.condition_or_default().to_string())
            .or_insert(0) += 1;
    }
    counts
}

/// Purchase-type occurrence counts; items without one are excluded.
pub fn purchase_type_breakdown(items: &[WardrobeItem]) -> IndexMap<String, i64> {
    let mut counts: IndexMap<String, i64> = IndexMap::new();
    for item in items {
        if let Some(purchase_type) = item.purchase_type.as_deref().filter(|p| !p.is_empty()) {
            *counts.entry(purchase_type.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
