use serde_json::Value as JsonValue;

use barkeep_recipes::Recipe;
use barkeep_sheets::{ProductSheet, StoredProductSheet};

pub const SAVE_PRODUCT_SHEET: &str = "SAVE_PRODUCT_SHEET";
pub const SAVE_RECIPE: &str = "SAVE_RECIPE";

/// A saved record handed to the sync collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    SaveProductSheet(ProductSheet),
    SaveRecipe(Recipe),
}

impl SyncAction {
    /// Stable action name understood by the collaborator.
    pub fn name(&self) -> &'static str {
        match self {
            SyncAction::SaveProductSheet(_) => SAVE_PRODUCT_SHEET,
            SyncAction::SaveRecipe(_) => SAVE_RECIPE,
        }
    }

    /// Storage-edge payload (camelCase JSON; sheet sub-records encoded as text).
    pub fn payload(&self) -> JsonValue {
        let encoded = match self {
            SyncAction::SaveProductSheet(sheet) => {
                serde_json::to_value(StoredProductSheet::from(sheet))
            }
            SyncAction::SaveRecipe(recipe) => serde_json::to_value(recipe),
        };
        encoded.unwrap_or_else(|e| {
            tracing::warn!(action = self.name(), error = %e, "failed to encode sync payload");
            JsonValue::Null
        })
    }
}
