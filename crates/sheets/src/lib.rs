//! Product sheet domain module.
//!
//! Knowledge records describing a sellable stock item: tasting notes, origin,
//! serving advice and commercial attributes. Nested records are typed here and
//! only encoded to text at the storage edge (`stored`).

pub mod glassware;
pub mod sheet;
pub mod stored;

pub use glassware::{GlasswareSelection, MAX_GLASSWARE};
pub use sheet::{CustomFields, ProductSheet, SuggestedPrice, TastingNotes};
pub use stored::StoredProductSheet;
