//! Core domain types for threadbare
//!
//! These types mirror the records the companion web app keeps for each
//! user: wardrobe items, outfits, and the wear log. Field names follow
//! the app's camelCase JSON contract via serde renames, so the same
//! structs serve both the import format and the analytics report.
//!
//! Many fields are optional in practice (older records, partial imports,
//! scraped product pages). The documented default substitutions live here
//! as helper methods so each calculator stays a total function over
//! well-typed input rather than re-deriving defaults in its arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category bucket for items without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Condition assumed for items that never recorded one.
pub const DEFAULT_CONDITION: &str = "excellent";

/// Purchase types that count as secondhand sourcing.
pub const SECONDHAND_SOURCES: &[&str] = &["thrift", "vintage", "secondhand"];

// ============================================
// Item status
// ============================================

/// Ownership status of a wardrobe item.
///
/// Legacy records predate this field; an absent status means the item is
/// owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Owned,
    Wishlist,
    Sold,
    Donated,
}

impl ItemStatus {
    /// Returns the identifier used in database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Owned => "owned",
            ItemStatus::Wishlist => "wishlist",
            ItemStatus::Sold => "sold",
            ItemStatus::Donated => "donated",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owned" => Ok(ItemStatus::Owned),
            "wishlist" => Ok(ItemStatus::Wishlist),
            "sold" => Ok(ItemStatus::Sold),
            "donated" => Ok(ItemStatus::Donated),
            _ => Err(format!("unknown item status: {}", s)),
        }
    }
}

// ============================================
// Wardrobe item
// ============================================

/// A single clothing or accessory record belonging to a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    /// Unique identifier within the user's wardrobe
    pub id: String,
    /// Display name
    pub name: String,
    /// Brand name, if known
    pub brand: Option<String>,
    /// Category (e.g., "Shirts"); absent or empty means uncategorized
    pub category: Option<String>,
    /// Purchase price
    pub price: Option<f64>,
    /// Retail price before discount; falls back to `price` when absent
    pub original_price: Option<f64>,
    /// Colors this item contributes to (may be empty)
    #[serde(default)]
    pub colors: Vec<String>,
    /// Seasons this item suits (may be empty)
    #[serde(default, rename = "season")]
    pub seasons: Vec<String>,
    /// Style label (e.g., "casual")
    pub style: Option<String>,
    /// Condition; absent means "excellent"
    pub condition: Option<String>,
    /// How the item was acquired (retail, thrift, vintage, gift,
    /// secondhand; free-form in practice)
    pub purchase_type: Option<String>,
    /// When the item was purchased
    pub purchase_date: Option<NaiveDate>,
    /// Total recorded wears; absent means never worn
    pub times_worn: Option<i64>,
    /// Free-text sustainability notes; presence alone is a signal
    pub sustainability: Option<String>,
    /// Ownership status; absent on legacy records (treated as owned)
    pub status: Option<ItemStatus>,
}

impl WardrobeItem {
    /// Whether this item is currently owned. Legacy records without a
    /// status default to owned.
    pub fn is_owned(&self) -> bool {
        matches!(self.status, None | Some(ItemStatus::Owned))
    }

    /// Category with the documented default applied.
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Condition with the documented default applied.
    pub fn condition_or_default(&self) -> &str {
        self.condition.as_deref().unwrap_or(DEFAULT_CONDITION)
    }

    /// Recorded wears, absent counting as zero.
    pub fn wear_count(&self) -> i64 {
        self.times_worn.unwrap_or(0)
    }

    /// Price with missing values counting as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Original price, falling back to price, then to zero.
    pub fn original_or_price(&self) -> f64 {
        self.original_price.or(self.price).unwrap_or(0.0)
    }

    /// Whether this item counts toward the sustainability score:
    /// sourced secondhand, or carrying any non-empty sustainability text.
    ///
    /// Purchase types are matched exactly (no case normalization), which
    /// keeps grouping cardinality identical to the web app's behavior.
    pub fn is_sustainable(&self) -> bool {
        if let Some(purchase_type) = self.purchase_type.as_deref() {
            if SECONDHAND_SOURCES.contains(&purchase_type) {
                return true;
            }
        }
        self.sustainability
            .as_deref()
            .map_or(false, |s| !s.is_empty())
    }
}

// ============================================
// Outfit
// ============================================

/// A saved combination of wardrobe items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    /// Unique identifier
    pub id: String,
    /// Display name, if the user gave one
    pub name: Option<String>,
    /// Total recorded wears; absent means never worn
    pub times_worn: Option<i64>,
}

impl Outfit {
    /// Recorded wears, absent counting as zero.
    pub fn wear_count(&self) -> i64 {
        self.times_worn.unwrap_or(0)
    }
}

// ============================================
// Wear log
// ============================================

/// A single day's wear record.
///
/// The analytics engine accepts the wear log alongside items and outfits
/// but derives no metric from it yet; the collection is carried through
/// so future metrics can consume it without an interface change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WearLogEntry {
    /// Unique identifier
    pub id: String,
    /// Items worn
    #[serde(default)]
    pub item_ids: Vec<String>,
    /// Day of the wear
    pub worn_on: NaiveDate,
    /// Optional free-text note
    pub note: Option<String>,
}
