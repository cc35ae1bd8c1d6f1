use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use barkeep_core::{
    DomainError, DomainResult, Entity, GlasswareId, RecipeId, ReviewStatus, StockItemId, UserId,
};
use barkeep_inventory::StockCatalog;

use crate::technique::Technique;

/// Display name of a stock reference that is missing from the catalog.
pub const UNKNOWN_INGREDIENT: &str = "Unknown ingredient";

/// Measuring unit of an ingredient line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientUnit {
    #[default]
    Cl,
    Ml,
    Dash,
    Piece,
}

impl IngredientUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientUnit::Cl => "cl",
            IngredientUnit::Ml => "ml",
            IngredientUnit::Dash => "dash",
            IngredientUnit::Piece => "piece",
        }
    }

    /// Parse a loosely written unit ("CL", "dashes", "trait", "pcs", ...).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "cl" | "centiliter" | "centiliters" | "centilitre" | "centilitres" => Some(Self::Cl),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(Self::Ml),
            "dash" | "dashes" | "trait" | "traits" => Some(Self::Dash),
            "piece" | "pieces" | "pièce" | "pièces" | "pc" | "pcs" | "unit" | "units" => {
                Some(Self::Piece)
            }
            _ => None,
        }
    }
}

impl core::fmt::Display for IngredientUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an ingredient line comes from: a stock item, or free text when no
/// stock match exists. Exactly one of the two, by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientSource {
    Stock {
        #[serde(rename = "itemId")]
        item_id: StockItemId,
    },
    Free {
        #[serde(rename = "tempName")]
        temp_name: String,
    },
}

/// One line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(flatten)]
    pub source: IngredientSource,
    pub quantity: f64,
    #[serde(default)]
    pub unit: IngredientUnit,
}

impl RecipeIngredient {
    pub fn stock(item_id: StockItemId, quantity: f64, unit: IngredientUnit) -> Self {
        Self {
            source: IngredientSource::Stock { item_id },
            quantity,
            unit,
        }
    }

    pub fn free(name: impl Into<String>, quantity: f64, unit: IngredientUnit) -> Self {
        Self {
            source: IngredientSource::Free {
                temp_name: name.into(),
            },
            quantity,
            unit,
        }
    }

    pub fn item_id(&self) -> Option<StockItemId> {
        match &self.source {
            IngredientSource::Stock { item_id } => Some(*item_id),
            IngredientSource::Free { .. } => None,
        }
    }

    /// Name shown for this line: the stock item's name, or the free text.
    pub fn display_name<'a>(&'a self, catalog: &'a StockCatalog) -> &'a str {
        match &self.source {
            IngredientSource::Stock { item_id } => catalog
                .item(*item_id)
                .map(|item| item.name.as_str())
                .unwrap_or(UNKNOWN_INGREDIENT),
            IngredientSource::Free { temp_name } => temp_name,
        }
    }
}

/// A cocktail formulation with its derived pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub glassware_id: Option<GlasswareId>,
    #[serde(default)]
    pub technique: Option<Technique>,
    #[serde(default)]
    pub technical_details: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub decoration: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub cost_price: f64,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// A blank recipe with a locally generated identifier.
    pub fn new(created_by: Option<UserId>) -> Self {
        Self {
            id: RecipeId::new(),
            name: String::new(),
            category: String::new(),
            glassware_id: None,
            technique: None,
            technical_details: String::new(),
            description: String::new(),
            history: String::new(),
            decoration: String::new(),
            ingredients: Vec::new(),
            cost_price: 0.0,
            selling_price: 0.0,
            status: ReviewStatus::Draft,
            created_by,
            created_at: Utc::now(),
        }
    }

    /// A recipe can only be saved with a name and at least one ingredient.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("recipe name cannot be empty"));
        }
        if self.ingredients.is_empty() {
            return Err(DomainError::validation("recipe needs at least one ingredient"));
        }
        Ok(())
    }
}

impl Entity for Recipe {
    type Id = RecipeId;

    fn id(&self) -> RecipeId {
        self.id
    }
}
