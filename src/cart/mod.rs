//! Shopping Cart Domain Module
//!
//! This module contains the client-side ordering logic, including:
//! - Domain models (CartEntry, SizeTier, order summary)
//! - The cart controller and its change notifications
//! - Order text formatting and the messaging sink
//! - The terminal command session driving the controller

pub mod controller;
pub mod helpers;
pub mod models;
pub mod session;

// Re-export commonly used types for convenience
pub use controller::{CartObserver, MenuCartController};
pub use helpers::{OrderSink, WhatsAppLink};
pub use models::{CartEntry, CartSnapshot, OrderSummary, SizeTier};
