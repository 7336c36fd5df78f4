//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the cart and the
//! order summary handed off at checkout.

use crate::error::CartError;
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Size label used for items sold at a single price
pub const SINGLE_PORTION_LABEL: &str = "Порција/Парче";

/// Shown by front ends when the cart has no entries
pub const EMPTY_CART_MESSAGE: &str = "Вашата кошничка е празна.";

// =============================================================================
// Size Tiers
// =============================================================================

/// One of the three pizza sizes, indexing into a tiered price list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizeTier {
    #[default]
    Medium,
    Family,
    Jumbo,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Medium, SizeTier::Family, SizeTier::Jumbo];

    pub fn index(self) -> usize {
        match self {
            SizeTier::Medium => 0,
            SizeTier::Family => 1,
            SizeTier::Jumbo => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Medium => "Средна (30cm)",
            SizeTier::Family => "Фамилијарна (40cm)",
            SizeTier::Jumbo => "Џамбо (50cm)",
        }
    }

    /// Diameter in centimetres, as printed on the size selector.
    pub fn centimetres(self) -> u8 {
        match self {
            SizeTier::Medium => 30,
            SizeTier::Family => 40,
            SizeTier::Jumbo => 50,
        }
    }
}

impl TryFrom<u8> for SizeTier {
    type Error = CartError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(SizeTier::Medium),
            1 => Ok(SizeTier::Family),
            2 => Ok(SizeTier::Jumbo),
            other => Err(CartError::InvalidTier(other)),
        }
    }
}

// =============================================================================
// Cart Models
// =============================================================================

/// Identifier of a cart entry, unique within one controller
pub type CartEntryId = u64;

/// One line added to the order, frozen at the moment it was added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub cart_entry_id: CartEntryId,
    pub name: String,
    pub size_label: String,
    pub unit_price: u64,
}

/// What a front end needs to redraw the cart after a change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    pub count: usize,
    pub entries: Vec<CartEntry>,
    pub total: u64,
}

// =============================================================================
// Order Summary
// =============================================================================

/// One line of the order summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    pub size_label: String,
    pub unit_price: u64,
}

/// All cart entries in order, plus the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total: u64,
}

/// Fixed text surrounding the order lines in the outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTemplate {
    pub greeting: String,
    pub footer: String,
    pub currency: String,
}

impl Default for OrderTemplate {
    fn default() -> Self {
        Self {
            greeting: "Здраво Amici Pizza, сакам да нарачам:".to_string(),
            footer: "Мојата адреса за достава е: [Внесете ја Вашата Адреса]".to_string(),
            currency: "ден".to_string(),
        }
    }
}
