//! Pizza Menu Library
//!
//! This library turns a flat CSV menu into a grouped JSON document and
//! provides the client-side cart that orders from it.

// Domain modules
pub mod cart;
pub mod menu;

// Infrastructure
pub mod cli;
pub mod config;
pub mod error;
pub mod router;

pub use error::{CartError, MenuError, Result};
