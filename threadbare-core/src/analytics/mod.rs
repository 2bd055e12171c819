//! Wardrobe analytics engine
//!
//! Computes a complete analytics report from a user's wardrobe items,
//! outfits, and wear log:
//! - Financial metrics (value, savings)
//! - Wear metrics (cost per wear, most/never worn)
//! - Breakdowns by category, color, brand, season, style, condition,
//!   and purchase type
//! - Underutilization and sustainability
//! - Advisory insights derived from the computed metrics
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐     ┌────────────────────┐     ┌────────────────┐
//! │ AnalyticsInput │────►│ metric calculators │────►│ WardrobeReport │
//! │ (one db fetch) │     │ (pure, per family) │     │ + insights     │
//! └────────────────┘     └────────────────────┘     └────────────────┘
//! ```
//!
//! The computation is pure and side-effect-free: the single database
//! fetch happens up front in [`AnalyticsInput::fetch`], and
//! [`WardrobeReport::compute`] never touches I/O. The underutilization
//! clock is an explicit parameter so reports are reproducible in tests
//! and via the CLI's `--as-of` flag.

pub mod breakdowns;
pub mod financial;
pub mod insights;
pub mod report;
pub mod utilization;
pub mod wear;

pub use breakdowns::{BrandStats, CategoryStats, ColorCount, TOP_BRANDS, TOP_COLORS};
pub use financial::FinancialMetrics;
pub use insights::{generate_insights, Insight, InsightContext, InsightKind};
pub use report::{generate_report, AnalyticsInput, Overview, WardrobeReport};
pub use utilization::{
    sustainability_score, UnderutilizedItem, UnderutilizedMetrics, UNDERUTILIZED_AFTER_DAYS,
    UNDERUTILIZED_MAX_WEARS,
};
pub use wear::{
    cost_per_wear_ranking, CostPerWear, NeverWornItem, OutfitMetrics, ValueMetrics, WearMetrics,
    WornItem,
};

/// Mean of a sum over a count, zero when the count is zero.
pub(crate) fn safe_mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Rounded integer percentage of part over whole, zero when whole is zero.
///
/// Always lands in `[0, 100]` for `part <= whole`.
pub(crate) fn percentage(part: usize, whole: usize) -> i64 {
    if whole == 0 {
        0
    } else {
        (100.0 * part as f64 / whole as f64).round() as i64
    }
}
