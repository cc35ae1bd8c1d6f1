//! `barkeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory,
//! recipe and product-sheet crates (no IO, no AI, no sync).

pub mod entity;
pub mod error;
pub mod id;
pub mod status;
pub mod value_object;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{FormatId, GlasswareId, ProductSheetId, RecipeId, StockItemId, UserId};
pub use status::ReviewStatus;
pub use value_object::ValueObject;
