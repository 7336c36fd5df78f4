//! Terminal ordering session
//!
//! Text commands are dispatched onto the controller the same way tool calls
//! are dispatched by name, and each reply is rendered as plain text.

use super::controller::MenuCartController;
use super::helpers::OrderSink;
use super::models::{SizeTier, EMPTY_CART_MESSAGE};
use crate::error::CartError;
use std::fmt::Write;

pub const HELP: &str = "\
commands:
  menu                         show the menu
  size <itemId> <30|40|50>     pick a size for a pizza
  add <itemId> <categoryKey>   add an item at its selected size
  remove <cartEntryId>         remove an entry from the cart
  cart                         show the cart
  checkout                     print the order link
  quit                         leave";

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// Accepts either a tier index (`0`..`2`) or a diameter (`30`/`40`/`50`).
pub fn parse_tier(arg: &str) -> Result<SizeTier, CartError> {
    let value: u8 = arg.parse().map_err(|_| CartError::Usage("size <itemId> <30|40|50>"))?;
    SizeTier::ALL
        .into_iter()
        .find(|t| t.centimetres() == value)
        .map(Ok)
        .unwrap_or_else(|| SizeTier::try_from(value))
}

fn parse_id<T: std::str::FromStr>(arg: Option<&str>, usage: &'static str) -> Result<T, CartError> {
    arg.and_then(|a| a.parse().ok()).ok_or(CartError::Usage(usage))
}

/// Executes one command line against the controller.
pub fn handle_command<S: OrderSink<Receipt = String>>(
    controller: &mut MenuCartController,
    sink: &mut S,
    line: &str,
) -> Result<Reply, CartError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Reply::Output(String::new()));
    };

    let output = match command {
        "menu" => render_menu(controller),
        "cart" => render_cart(controller),
        "help" => HELP.to_string(),
        "quit" | "exit" => return Ok(Reply::Quit),
        "size" => {
            let usage = "size <itemId> <30|40|50>";
            let item_id: i64 = parse_id(words.next(), usage)?;
            let tier = parse_tier(words.next().ok_or(CartError::Usage(usage))?)?;
            match controller.select_tier(item_id, tier) {
                Some(price) => {
                    format!("#{} {} {}", item_id, price, controller.template().currency)
                }
                None => String::new(),
            }
        }
        "add" => {
            let item_id: i64 = parse_id(words.next(), "add <itemId> <categoryKey>")?;
            let category = words.next().ok_or(CartError::Usage("add <itemId> <categoryKey>"))?;
            match controller.add_to_cart(item_id, category) {
                Some(_) => render_cart(controller),
                None => String::new(),
            }
        }
        "remove" => {
            let entry_id = parse_id(words.next(), "remove <cartEntryId>")?;
            controller.remove_from_cart(entry_id);
            render_cart(controller)
        }
        "checkout" => controller.checkout(sink).unwrap_or_default(),
        other => return Err(CartError::UnknownCommand(other.to_string())),
    };

    Ok(Reply::Output(output))
}

/// Lists every category with its items and currently displayed prices.
pub fn render_menu(controller: &MenuCartController) -> String {
    let currency = &controller.template().currency;
    let mut out = String::new();
    for category in &controller.menu().menu_data.categories {
        let _ = writeln!(out, "== {} [{}]", category.title, category.key);
        for item in &category.items {
            let id = item.id.map(|id| id.to_string()).unwrap_or_else(|| "?".into());
            let _ = write!(out, "  #{} {}", id, item.name);
            if let Some(tag) = &item.tag {
                let marker = if item.is_special { "*" } else { "" };
                let _ = write!(out, " [{}{}]", marker, tag);
            }
            let _ = write!(out, " - {} {}", controller.displayed_price(item), currency);
            if let (crate::menu::PricingMode::Tiered(_), Some(id)) = (item.pricing, item.id) {
                let _ = write!(out, " ({}cm)", controller.selected_tier(id).centimetres());
            }
            out.push('\n');
        }
    }
    out
}

/// Shows the count, each entry and the total.
pub fn render_cart(controller: &MenuCartController) -> String {
    let snapshot = controller.snapshot();
    let currency = &controller.template().currency;
    let mut out = format!("cart ({})\n", snapshot.count);
    if snapshot.entries.is_empty() {
        out.push_str(EMPTY_CART_MESSAGE);
        out.push('\n');
    }
    for entry in &snapshot.entries {
        let _ = writeln!(
            out,
            "  [{}] {} ({}) {} {}",
            entry.cart_entry_id, entry.name, entry.size_label, entry.unit_price, currency
        );
    }
    let _ = write!(out, "total: {} {}", snapshot.total, currency);
    out
}
