//! Menu Domain Models
//!
//! This module contains the data structures produced by the CSV transform and
//! consumed by the cart controller.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Column names of the source CSV, in positional order
pub const HEADERS: [&str; 10] = [
    "ID",
    "Name",
    "CategoryTitle",
    "CategoryKey",
    "Price30cm",
    "Price40cm",
    "Price50cm",
    "Tag",
    "IsSpecial",
    "imageURL",
];

/// Image used when a row carries no `imageURL`
pub const PLACEHOLDER_IMAGE: &str = "../images/pizza_placeholder.png";

// =============================================================================
// Raw Rows
// =============================================================================

/// One data line of the CSV, mapped positionally onto [`HEADERS`].
///
/// A field is `None` when the line was too short to reach its column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    /// 1-based line number in the source text
    pub line: usize,
    pub id: Option<String>,
    pub name: Option<String>,
    pub category_title: Option<String>,
    pub category_key: Option<String>,
    pub price30: Option<String>,
    pub price40: Option<String>,
    pub price50: Option<String>,
    pub tag: Option<String>,
    pub is_special: Option<String>,
    pub image_url: Option<String>,
}

impl RawRecord {
    /// Stores `value` under the header at position `index`; out-of-range
    /// positions are ignored.
    pub fn set(&mut self, index: usize, value: String) {
        let slot = match index {
            0 => &mut self.id,
            1 => &mut self.name,
            2 => &mut self.category_title,
            3 => &mut self.category_key,
            4 => &mut self.price30,
            5 => &mut self.price40,
            6 => &mut self.price50,
            7 => &mut self.tag,
            8 => &mut self.is_special,
            9 => &mut self.image_url,
            _ => return,
        };
        *slot = Some(value);
    }
}

// =============================================================================
// Menu Document
// =============================================================================

/// How an item is priced: three size tiers or one flat price.
///
/// Flattened into [`MenuItem`], this serializes as either a `prices` array or
/// a `singlePrice` number, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingMode {
    #[serde(rename = "prices")]
    Tiered([u64; 3]),
    #[serde(rename = "singlePrice")]
    Single(u64),
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single orderable item on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Numeric id from the CSV; `None` when the column was not a number
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    pub image_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_special: bool,

    #[serde(flatten)]
    pub pricing: PricingMode,
}

impl MenuItem {
    /// The price shown before any size has been picked.
    pub fn base_price(&self) -> u64 {
        match self.pricing {
            PricingMode::Tiered(prices) => prices[0],
            PricingMode::Single(price) => price,
        }
    }
}

/// A titled group of items sharing a category key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip)]
    pub key: String,
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// Items grouped by category key, in first-seen order.
///
/// Serializes as a JSON object keyed by category key; the order of keys in
/// the object is the order of `categories`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuData {
    pub categories: Vec<Category>,
}

impl MenuData {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Returns the category for `key`, creating it with `title` on first use.
    pub fn entry(&mut self, key: &str, title: impl FnOnce() -> String) -> &mut Category {
        let index = match self.categories.iter().position(|c| c.key == key) {
            Some(index) => index,
            None => {
                self.categories.push(Category {
                    key: key.to_string(),
                    title: title(),
                    items: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        &mut self.categories[index]
    }

    /// Finds an item by id across all categories; the last match wins.
    pub fn find_item(&self, item_id: i64) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|i| i.id == Some(item_id))
            .last()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl Serialize for MenuData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.key, category)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MenuData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MenuDataVisitor;

        impl<'de> Visitor<'de> for MenuDataVisitor {
            type Value = MenuData;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category key to category")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<MenuData, A::Error> {
                let mut categories = Vec::new();
                while let Some((key, mut category)) = access.next_entry::<String, Category>()? {
                    category.key = key;
                    categories.push(category);
                }
                Ok(MenuData { categories })
            }
        }

        deserializer.deserialize_map(MenuDataVisitor)
    }
}

/// Top-level JSON document written to `menuData.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    pub menu_data: MenuData,
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Why a row or item was left out of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The header line does not match [`HEADERS`]
    UnexpectedHeader,
    /// A required column (`ID` or `CategoryKey`) is empty or missing
    MissingField(&'static str),
    /// No tier combination yields a price
    NoPrice,
}

/// A non-fatal note produced while parsing or transforming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnexpectedHeader => {
                write!(f, "line {}: header does not match expected columns", self.line)
            }
            DiagnosticKind::MissingField(field) => {
                write!(f, "line {}: skipped, missing {}", self.line, field)
            }
            DiagnosticKind::NoPrice => {
                write!(f, "line {}: dropped, no resolvable price", self.line)
            }
        }
    }
}

/// A result paired with the diagnostics collected while producing it
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}
