//! Insight generation
//!
//! A small ordered rule engine over already-computed metrics. Each rule
//! independently inspects the context and may append one message; the
//! output order is the fixed rule order, so reports are deterministic.
//! The two sustainability rules are mutually exclusive.

use serde::Serialize;

/// Cost per wear below this reads as great value.
const GOOD_VALUE_CPW: f64 = 10.0;
/// Sustainability score above this earns praise.
const SUSTAINABLE_HIGH: i64 = 50;
/// Sustainability score below this earns a nudge.
const SUSTAINABLE_LOW: i64 = 20;
/// Never-worn count above this warrants a warning.
const NEVER_WORN_WARNING: usize = 5;
/// Outfit count below this, with a large wardrobe, suggests styling help.
const FEW_OUTFITS: usize = 5;
/// Wardrobe size above which few outfits is notable.
const LARGE_WARDROBE: usize = 20;

/// Severity of an insight message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Tip,
    Warning,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Positive => "positive",
            InsightKind::Tip => "tip",
            InsightKind::Warning => "warning",
        }
    }
}

/// A categorized advisory message shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub category: String,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, category: &str, message: String) -> Self {
        Self {
            kind,
            category: category.to_string(),
            message,
        }
    }
}

/// Metrics the insight rules inspect.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightContext {
    pub avg_cost_per_wear: f64,
    pub sustainability_score: i64,
    pub never_worn: usize,
    pub underutilized: usize,
    pub outfit_count: usize,
    pub item_count: usize,
}

/// Run the insight rules in fixed order.
pub fn generate_insights(ctx: &InsightContext) -> Vec<Insight> {
    let mut insights = Vec::new();

    // 1. Value
    if ctx.avg_cost_per_wear > 0.0 && ctx.avg_cost_per_wear < GOOD_VALUE_CPW {
        insights.push(Insight::new(
            InsightKind::Positive,
            "value",
            format!(
                "Great value! Your average cost per wear is ${:.2}.",
                ctx.avg_cost_per_wear
            ),
        ));
    }

    // 2/3. Sustainability (mutually exclusive; silent on an empty
    // wardrobe, where the zero score carries no signal)
    if ctx.item_count > 0 && ctx.sustainability_score > SUSTAINABLE_HIGH {
        insights.push(Insight::new(
            InsightKind::Positive,
            "sustainability",
            format!(
                "{}% of your wardrobe is sustainably sourced. Keep it up!",
                ctx.sustainability_score
            ),
        ));
    } else if ctx.item_count > 0 && ctx.sustainability_score < SUSTAINABLE_LOW {
        insights.push(Insight::new(
            InsightKind::Tip,
            "sustainability",
            "Consider thrifting or buying secondhand to make your wardrobe more sustainable."
                .to_string(),
        ));
    }

    // 4. Never worn
    if ctx.never_worn > NEVER_WORN_WARNING {
        insights.push(Insight::new(
            InsightKind::Warning,
            "utilization",
            format!(
                "{} items in your wardrobe have never been worn.",
                ctx.never_worn
            ),
        ));
    }

    // 5. Underutilized
    if ctx.underutilized > 0 {
        insights.push(Insight::new(
            InsightKind::Tip,
            "utilization",
            format!(
                "You have {} underutilized items. Try working them into your next outfit.",
                ctx.underutilized
            ),
        ));
    }

    // 6. Styling
    if ctx.outfit_count < FEW_OUTFITS && ctx.item_count > LARGE_WARDROBE {
        insights.push(Insight::new(
            InsightKind::Tip,
            "styling",
            "You have plenty of items but few outfits. Try combining pieces you already own."
                .to_string(),
        ));
    }

    insights
}
