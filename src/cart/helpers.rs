//! Shopping Cart Business Logic Helpers
//!
//! This module contains the order text formatting and the messaging sink
//! that receives it at checkout.

use super::models::{OrderSummary, OrderTemplate};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Write;

/// Destination for the finished order text.
pub trait OrderSink {
    type Receipt;

    fn send(&mut self, message: &str) -> Self::Receipt;
}

/// Builds a `wa.me` link that opens a pre-filled chat with a fixed recipient.
#[derive(Debug, Clone)]
pub struct WhatsAppLink {
    recipient: String,
}

impl WhatsAppLink {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }
}

impl OrderSink for WhatsAppLink {
    type Receipt = String;

    fn send(&mut self, message: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.recipient,
            encode_uri_component(message)
        )
    }
}

/// Renders the order as the plain-text message sent at checkout.
///
/// Example output:
///
/// ```text
/// Здраво Amici Pizza, сакам да нарачам:
///
/// - Маргарита (Средна (30cm)) - 300 ден
///
/// Вкупно: 300 ден
///
/// Мојата адреса за достава е: [Внесете ја Вашата Адреса]
/// ```
pub fn render_order_text(summary: &OrderSummary, template: &OrderTemplate) -> String {
    let currency = &template.currency;
    let mut message = format!("{}\n\n", template.greeting);
    for line in &summary.lines {
        let _ = writeln!(
            message,
            "- {} ({}) - {} {}",
            line.name, line.size_label, line.unit_price, currency
        );
    }
    let _ = write!(
        message,
        "\nВкупно: {} {}\n\n{}",
        summary.total, currency, template.footer
    );
    message
}

/// Bytes escaped in a URI component: everything except ASCII alphanumerics
/// and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `input` the way browsers encode a URI component.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
