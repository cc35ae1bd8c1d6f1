//! Inventory domain module.
//!
//! Stock items, packaging formats, location-partitioned stock levels and
//! glassware, as loaded by the host. This crate never mutates stock: it only
//! reads the collections and derives availability indicators from them.

pub mod availability;
pub mod catalog;
pub mod item;

pub use availability::{StockAlert, StockIndicator, availability, classify, stock_alerts};
pub use catalog::StockCatalog;
pub use item::{DEFAULT_REFERENCE_VOLUME, Format, Glassware, StockItem, StockLevel};
