//! Category registry
//!
//! A fixed, compiled-in table mapping category identifiers to display
//! metadata. Identifiers carry their emoji glyph (e.g. "🍔 Food") because
//! that is how they appear in the persisted ledger.
//!
//! Transactions may reference identifiers that are not in the registry.
//! Those are tolerated everywhere and render with the "Other" metadata.

use serde::Serialize;
use std::fmt;

/// Display metadata for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Identifier as stored in the ledger
    pub id: &'static str,
    /// Hex display color (e.g. "#FF9F1C")
    pub color: &'static str,
    /// Short human description
    pub description: &'static str,
}

impl fmt::Display for CategoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Identifier of the catch-all bucket
pub const OTHER_CATEGORY: &str = "📦 Other";

/// Color used for categories missing from the registry
pub const DEFAULT_COLOR: &str = "#B5BAC7";

/// Registry entries in display order
const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        id: "🍔 Food",
        color: "#FF9F1C",
        description: "Restaurants, groceries, food delivery",
    },
    CategoryInfo {
        id: "🚌 Transportation",
        color: "#2EC4B6",
        description: "Public transit, fuel, ride services",
    },
    CategoryInfo {
        id: "🏠 Housing",
        color: "#E71D36",
        description: "Rent, mortgage, maintenance",
    },
    CategoryInfo {
        id: "💡 Utilities",
        color: "#011627",
        description: "Electricity, water, internet, gas",
    },
    CategoryInfo {
        id: "🎮 Entertainment",
        color: "#8338EC",
        description: "Movies, games, streaming services",
    },
    CategoryInfo {
        id: "🏥 Healthcare",
        color: "#FF006E",
        description: "Doctor visits, medicine, insurance",
    },
    CategoryInfo {
        id: "🛍️ Shopping",
        color: "#FB5607",
        description: "Clothing, electronics, personal items",
    },
    CategoryInfo {
        id: "💰 Salary",
        color: "#3A86FF",
        description: "Regular income from employment",
    },
    CategoryInfo {
        id: "💼 Business",
        color: "#8AC926",
        description: "Business income and expenses",
    },
    CategoryInfo {
        id: "🎓 Education",
        color: "#FFBE0B",
        description: "Tuition, books, courses",
    },
    CategoryInfo {
        id: "✈️ Travel",
        color: "#9B5DE5",
        description: "Vacations, hotels, flights",
    },
    CategoryInfo {
        id: "🎁 Gifts",
        color: "#F15BB5",
        description: "Presents, donations, charity",
    },
    CategoryInfo {
        id: "💸 Investments",
        color: "#00BBF9",
        description: "Stocks, mutual funds, crypto",
    },
    CategoryInfo {
        id: "💳 Loan Payment",
        color: "#4361EE",
        description: "EMIs, credit card payments",
    },
    CategoryInfo {
        id: "📱 Subscriptions",
        color: "#4CC9F0",
        description: "Monthly services, memberships",
    },
    CategoryInfo {
        id: OTHER_CATEGORY,
        color: DEFAULT_COLOR,
        description: "Miscellaneous expenses",
    },
];

/// Look up a category by exact identifier
pub fn lookup(id: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// All registry identifiers in stable display order
pub fn all() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|c| c.id)
}

/// All registry entries in stable display order
pub fn entries() -> &'static [CategoryInfo] {
    CATEGORIES
}

/// Metadata for the catch-all "Other" bucket
pub fn other() -> &'static CategoryInfo {
    // The last entry is always the catch-all.
    &CATEGORIES[CATEGORIES.len() - 1]
}

/// Metadata to render `id` with, falling back to "Other" when unknown
pub fn resolve(id: &str) -> &'static CategoryInfo {
    lookup(id).unwrap_or_else(other)
}

/// Whether `id` is a registry identifier
pub fn is_known(id: &str) -> bool {
    lookup(id).is_some()
}

/// Find a registry identifier by a loose name ("food", "Food", "🍔 Food")
///
/// Matching ignores case and the leading emoji glyph. Returns `None` when
/// nothing matches, in which case callers keep the raw string as entered.
pub fn find_by_name(name: &str) -> Option<&'static CategoryInfo> {
    let wanted = name.trim();
    if let Some(info) = lookup(wanted) {
        return Some(info);
    }
    let wanted = wanted.to_lowercase();
    CATEGORIES.iter().find(|c| plain_name(c.id).to_lowercase() == wanted)
}

/// Identifier with its leading glyph removed ("🍔 Food" -> "Food")
pub fn plain_name(id: &str) -> &str {
    match id.split_once(' ') {
        Some((glyph, rest)) if !glyph.chars().any(|c| c.is_alphanumeric()) => rest.trim(),
        _ => id,
    }
}
