//! Report assembly
//!
//! Fetches the three input collections once, runs every calculator, and
//! merges the results into the report object consumers are built
//! against. Assembly is pure structural composition; all arithmetic
//! lives in the calculator modules.

use super::breakdowns::{
    brand_breakdown, category_breakdown, color_breakdown, condition_breakdown,
    purchase_type_breakdown, season_distribution, style_distribution, BrandStats, CategoryStats,
    ColorCount,
};
use super::financial::FinancialMetrics;
use super::insights::{generate_insights, Insight, InsightContext};
use super::utilization::{sustainability_score, UnderutilizedMetrics};
use super::wear::{cost_per_wear_ranking, OutfitMetrics, ValueMetrics, WearMetrics};
use crate::db::Database;
use crate::error::Result;
use crate::types::{Outfit, WardrobeItem, WearLogEntry};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// The three request-scoped collections the engine computes over.
///
/// Any collection may be empty; none is ever an error. The wear log is
/// carried for interface completeness even though no current metric
/// consumes it.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsInput {
    pub items: Vec<WardrobeItem>,
    pub outfits: Vec<Outfit>,
    pub wear_log: Vec<WearLogEntry>,
}

impl AnalyticsInput {
    /// Fetch a user's collections in one pass: currently-owned items
    /// (legacy rows with no status count as owned), all outfits, and the
    /// full wear log.
    pub fn fetch(db: &Database, user_id: &str) -> Result<Self> {
        Ok(Self {
            items: db.list_owned_items(user_id)?,
            outfits: db.list_outfits(user_id)?,
            wear_log: db.list_wear_entries(user_id)?,
        })
    }
}

/// Headline numbers shown at the top of the report.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_items: usize,
    pub total_value: f64,
    pub avg_price: f64,
    pub total_original_value: f64,
    pub savings: f64,
    pub sustainability_score: i64,
    /// Raw wear-log size; no derived metric consumes the log yet
    pub wear_log_entries: usize,
}

/// The complete analytics report.
///
/// Field names and nesting are a stable contract with consumers; the
/// serialized form uses camelCase group and field names throughout.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeReport {
    pub overview: Overview,
    pub wear: WearMetrics,
    pub value: ValueMetrics,
    pub categories: Vec<CategoryStats>,
    pub colors: Vec<ColorCount>,
    pub brands: Vec<BrandStats>,
    pub underutilized: UnderutilizedMetrics,
    pub season_distribution: IndexMap<String, i64>,
    pub style_distribution: IndexMap<String, i64>,
    pub condition_breakdown: IndexMap<String, i64>,
    pub purchase_type_breakdown: IndexMap<String, i64>,
    pub outfits: OutfitMetrics,
    pub insights: Vec<Insight>,
}

impl WardrobeReport {
    /// Compute the full report from the input collections.
    ///
    /// Pure: no I/O, no mutation of the input. `today` anchors the
    /// underutilization rule.
    pub fn compute(input: &AnalyticsInput, today: NaiveDate) -> Self {
        let items = &input.items;

        let financial = FinancialMetrics::compute(items);
        let ranking = cost_per_wear_ranking(items);
        let wear = WearMetrics::compute(items, &ranking);
        let value = ValueMetrics::compute(&ranking);
        let underutilized = UnderutilizedMetrics::compute(items, today);
        let score = sustainability_score(items);
        let outfits = OutfitMetrics::compute(&input.outfits);

        let insights = generate_insights(&InsightContext {
            avg_cost_per_wear: wear.avg_cost_per_wear,
            sustainability_score: score,
            never_worn: wear.never_worn,
            underutilized: underutilized.count,
            outfit_count: outfits.total_outfits,
            item_count: items.len(),
        });

        Self {
            overview: Overview {
                total_items: items.len(),
                total_value: financial.total_value,
                avg_price: financial.avg_price,
                total_original_value: financial.total_original_value,
                savings: financial.savings,
                sustainability_score: score,
                wear_log_entries: input.wear_log.len(),
            },
            wear,
            value,
            categories: category_breakdown(items),
            colors: color_breakdown(items),
            brands: brand_breakdown(items),
            underutilized,
            season_distribution: season_distribution(items),
            style_distribution: style_distribution(items),
            condition_breakdown: condition_breakdown(items),
            purchase_type_breakdown: purchase_type_breakdown(items),
            outfits,
            insights,
        }
    }
}

/// Fetch a user's collections and compute their report.
pub fn generate_report(db: &Database, user_id: &str, today: NaiveDate) -> Result<WardrobeReport> {
    let input = AnalyticsInput::fetch(db, user_id)?;
    tracing::debug!(
        user_id,
        items = input.items.len(),
        outfits = input.outfits.len(),
        wear_log = input.wear_log.len(),
        "Computing wardrobe report"
    );
    Ok(WardrobeReport::compute(&input, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemStatus;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_empty_input_all_zero() {
        let report = WardrobeReport::compute(&AnalyticsInput::default(), today());

        assert_eq!(report.overview.total_items, 0);
        assert_eq!(report.overview.total_value, 0.0);
        assert_eq!(report.overview.avg_price, 0.0);
        assert_eq!(report.overview.sustainability_score, 0);
        assert_eq!(report.wear.avg_cost_per_wear, 0.0);
        assert_eq!(report.outfits.avg_outfit_wears, 0.0);
        assert!(report.categories.is_empty());
        assert!(report.insights.is_empty());
    }

    #[test]
    fn test_single_item_no_wears() {
        let input = AnalyticsInput {
            items: vec![WardrobeItem {
                id: "a".into(),
                name: "Blazer".into(),
                price: Some(100.0),
                times_worn: Some(0),
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = WardrobeReport::compute(&input, today());

        assert_eq!(report.overview.total_value, 100.0);
        assert_eq!(report.wear.total_wears, 0);
        assert_eq!(report.wear.never_worn, 1);
        assert!(report.wear.most_worn_items.is_empty());
        assert!(report.value.best_value_items.is_empty());
    }

    #[test]
    fn test_full_report_shape() {
        let input = AnalyticsInput {
            items: vec![
                WardrobeItem {
                    id: "a".into(),
                    name: "Denim Jacket".into(),
                    brand: Some("Acme".into()),
                    category: Some("Outerwear".into()),
                    price: Some(80.0),
                    original_price: Some(120.0),
                    colors: vec!["blue".into()],
                    seasons: vec!["spring".into(), "fall".into()],
                    style: Some("casual".into()),
                    condition: Some("good".into()),
                    purchase_type: Some("thrift".into()),
                    purchase_date: Some(today() - Duration::days(200)),
                    times_worn: Some(20),
                    sustainability: None,
                    status: Some(ItemStatus::Owned),
                },
                WardrobeItem {
                    id: "b".into(),
                    name: "Plain Tee".into(),
                    price: Some(15.0),
                    purchase_date: Some(today() - Duration::days(90)),
                    times_worn: Some(1),
                    ..Default::default()
                },
            ],
            outfits: vec![Outfit {
                id: "o1".into(),
                name: None,
                times_worn: Some(6),
            }],
            wear_log: vec![WearLogEntry {
                id: "w1".into(),
                item_ids: vec!["a".into()],
                worn_on: today(),
                note: None,
            }],
        };
        let report = WardrobeReport::compute(&input, today());

        assert_eq!(report.overview.total_items, 2);
        assert_eq!(report.overview.savings, 40.0);
        assert_eq!(report.overview.sustainability_score, 50);
        assert_eq!(report.overview.wear_log_entries, 1);

        // a: cpw 4, b: cpw 15
        assert_eq!(report.value.best_value_items[0].id, "a");
        assert_eq!(report.value.worst_value_items[0].id, "b");
        assert_eq!(report.wear.most_worn_items[0].times_worn, 20);

        // b is 90 days old with 1 wear
        assert_eq!(report.underutilized.count, 1);
        assert_eq!(report.underutilized.items[0].id, "b");

        assert_eq!(report.categories[0].name, "Outerwear");
        assert_eq!(report.season_distribution.get("fall"), Some(&1));
        assert_eq!(report.condition_breakdown.get("excellent"), Some(&1));
        assert_eq!(report.purchase_type_breakdown.get("thrift"), Some(&1));
        assert_eq!(report.outfits.avg_outfit_wears, 6.0);

        // avg cpw = (4 + 15) / 2 = 9.5 -> value praise; underutilized tip
        let categories: Vec<&str> = report.insights.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, vec!["value", "utilization"]);
    }

    #[test]
    fn test_serialized_group_names() {
        let report = WardrobeReport::compute(&AnalyticsInput::default(), today());
        let json = serde_json::to_value(&report).unwrap();
        let obj = json.as_object().unwrap();

        for group in [
            "overview",
            "wear",
            "value",
            "categories",
            "colors",
            "brands",
            "underutilized",
            "seasonDistribution",
            "styleDistribution",
            "conditionBreakdown",
            "purchaseTypeBreakdown",
            "outfits",
            "insights",
        ] {
            assert!(obj.contains_key(group), "missing group {}", group);
        }

        assert!(json["overview"]
            .as_object()
            .unwrap()
            .contains_key("totalItems"));
        assert!(json["wear"].as_object().unwrap().contains_key("neverWorn"));
        assert!(json["value"]
            .as_object()
            .unwrap()
            .contains_key("bestValueItems"));
    }

    #[test]
    fn test_generate_report_from_db() {
        let db = Database::open_in_memory().unwrap();
        db.migrate().unwrap();

        db.upsert_item(
            "user-1",
            &WardrobeItem {
                id: "a".into(),
                name: "Boots".into(),
                price: Some(150.0),
                times_worn: Some(30),
                ..Default::default()
            },
        )
        .unwrap();
        // Sold items are invisible to analytics
        db.upsert_item(
            "user-1",
            &WardrobeItem {
                id: "b".into(),
                name: "Old Coat".into(),
                status: Some(ItemStatus::Sold),
                ..Default::default()
            },
        )
        .unwrap();

        let report = generate_report(&db, "user-1", today()).unwrap();
        assert_eq!(report.overview.total_items, 1);
        assert_eq!(report.wear.total_wears, 30);

        // Unknown user degrades to the empty report
        let empty = generate_report(&db, "nobody", today()).unwrap();
        assert_eq!(empty.overview.total_items, 0);
    }
}
