//! Cart state machine.
//!
//! `MenuCartController` owns the loaded menu, the size selected for each
//! tiered item and the ordered list of cart entries. Every mutation goes
//! through its methods; observers are told about each change.

use super::helpers::{render_order_text, OrderSink};
use super::models::*;
use crate::error::Result;
use crate::menu::{MenuDocument, MenuItem, PricingMode};
use std::collections::HashMap;

/// Receives the new cart state after every change.
pub trait CartObserver {
    fn cart_changed(&mut self, snapshot: &CartSnapshot);
}

impl<F: FnMut(&CartSnapshot)> CartObserver for F {
    fn cart_changed(&mut self, snapshot: &CartSnapshot) {
        self(snapshot)
    }
}

pub struct MenuCartController {
    menu: MenuDocument,
    selected: HashMap<i64, SizeTier>,
    cart: Vec<CartEntry>,
    next_entry_id: CartEntryId,
    template: OrderTemplate,
    observers: Vec<Box<dyn CartObserver>>,
}

impl MenuCartController {
    /// Starts a session over `menu` with an empty cart.
    pub fn new(menu: MenuDocument) -> Self {
        Self {
            menu,
            selected: HashMap::new(),
            cart: Vec::new(),
            next_entry_id: 1,
            template: OrderTemplate::default(),
            observers: Vec::new(),
        }
    }

    /// Parses a menu document; a malformed document yields no controller at all.
    pub fn from_json(json: &str) -> Result<Self> {
        let menu: MenuDocument = serde_json::from_str(json)?;
        Ok(Self::new(menu))
    }

    pub fn with_template(mut self, template: OrderTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn menu(&self) -> &MenuDocument {
        &self.menu
    }

    pub fn template(&self) -> &OrderTemplate {
        &self.template
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.cart
    }

    /// Size currently selected for `item_id`, defaulting to the smallest.
    pub fn selected_tier(&self, item_id: i64) -> SizeTier {
        self.selected.get(&item_id).copied().unwrap_or_default()
    }

    /// Price to display for an item given its current size selection.
    pub fn displayed_price(&self, item: &MenuItem) -> u64 {
        match (item.pricing, item.id) {
            (PricingMode::Tiered(prices), Some(id)) => prices[self.selected_tier(id).index()],
            _ => item.base_price(),
        }
    }

    /// Selects a size for a tiered item and returns its price at that size.
    ///
    /// Returns `None` and changes nothing for unknown or single-price items.
    /// The cart is not touched.
    pub fn select_tier(&mut self, item_id: i64, tier: SizeTier) -> Option<u64> {
        let prices = match self.menu.menu_data.find_item(item_id)?.pricing {
            PricingMode::Tiered(prices) => prices,
            PricingMode::Single(_) => return None,
        };
        self.selected.insert(item_id, tier);
        Some(prices[tier.index()])
    }

    /// Adds an item from `category_key` at its selected size.
    ///
    /// Silently does nothing when the item is not in that category.
    pub fn add_to_cart(&mut self, item_id: i64, category_key: &str) -> Option<CartEntryId> {
        let item = self
            .menu
            .menu_data
            .category(category_key)?
            .items
            .iter()
            .find(|i| i.id == Some(item_id))?;

        let (unit_price, size_label) = match item.pricing {
            PricingMode::Tiered(prices) => {
                let tier = self.selected_tier(item_id);
                (prices[tier.index()], tier.label())
            }
            PricingMode::Single(price) => (price, SINGLE_PORTION_LABEL),
        };

        let entry = CartEntry {
            cart_entry_id: self.next_entry_id,
            name: item.name.clone(),
            size_label: size_label.to_string(),
            unit_price,
        };
        self.next_entry_id += 1;

        let id = entry.cart_entry_id;
        tracing::debug!(cart_entry_id = id, name = %entry.name, "added to cart");
        self.cart.push(entry);
        self.notify();
        Some(id)
    }

    /// Removes one entry by id; returns whether anything was removed.
    pub fn remove_from_cart(&mut self, cart_entry_id: CartEntryId) -> bool {
        let before = self.cart.len();
        self.cart.retain(|e| e.cart_entry_id != cart_entry_id);
        let removed = self.cart.len() != before;
        if removed {
            tracing::debug!(cart_entry_id, "removed from cart");
            self.notify();
        }
        removed
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.iter().map(|e| e.unit_price).sum()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            count: self.cart.len(),
            entries: self.cart.clone(),
            total: self.cart_total(),
        }
    }

    /// Summarizes the cart for checkout; `None` while the cart is empty.
    pub fn build_order_summary(&self) -> Option<OrderSummary> {
        if self.cart.is_empty() {
            return None;
        }
        let lines = self
            .cart
            .iter()
            .map(|e| OrderLine {
                name: e.name.clone(),
                size_label: e.size_label.clone(),
                unit_price: e.unit_price,
            })
            .collect();
        Some(OrderSummary {
            lines,
            total: self.cart_total(),
        })
    }

    /// Hands the rendered order text to `sink`. The cart is kept as is.
    pub fn checkout<S: OrderSink>(&self, sink: &mut S) -> Option<S::Receipt> {
        let summary = self.build_order_summary()?;
        let text = render_order_text(&summary, &self.template);
        tracing::info!(lines = summary.lines.len(), total = summary.total, "checkout");
        Some(sink.send(&text))
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.cart_changed(&snapshot);
        }
    }
}
