//! Inventory domain module.
//!
//! This crate contains the daily quality rules of the shop's stock,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod gilded_rose;
pub mod item;
pub mod report;
pub mod rules;
pub mod stock;

pub use category::ItemCategory;
pub use gilded_rose::GildedRose;
pub use item::{Item, SharedItem};
pub use report::write_report;
pub use stock::{parse_stock_json, parse_stock_lines, standard_stock};
