//! Menu Domain Module
//!
//! This module turns the flat CSV menu into the grouped JSON document:
//! - Domain models (raw rows, menu items, pricing, the document itself)
//! - Row parsing and category grouping
//! - File boundary for reading the CSV and writing/loading the JSON

pub mod helpers;
pub mod models;
pub mod parser;
pub mod store;
pub mod transform;

// Re-export commonly used types and functions
pub use models::{Category, MenuData, MenuDocument, MenuItem, PricingMode};
pub use parser::parse_rows;
pub use transform::{transform, transform_csv};
