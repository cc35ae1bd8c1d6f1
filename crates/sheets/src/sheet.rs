use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use barkeep_core::{
    DomainError, DomainResult, Entity, ProductSheetId, ReviewStatus, StockItemId, ValueObject,
};

use crate::glassware::GlasswareSelection;

/// Structured tasting notes (eye / nose / mouth).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TastingNotes {
    #[serde(default)]
    pub eye: String,
    #[serde(default)]
    pub nose: String,
    #[serde(default)]
    pub mouth: String,
}

impl TastingNotes {
    pub fn is_empty(&self) -> bool {
        self.eye.is_empty() && self.nose.is_empty() && self.mouth.is_empty()
    }
}

impl ValueObject for TastingNotes {}

/// Free-form key/value attributes (grape variety, cask, ABV...).
pub type CustomFields = BTreeMap<String, String>;

/// A labelled price proposal (glass, bottle, happy hour...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPrice {
    pub label: String,
    pub price: f64,
}

impl SuggestedPrice {
    pub fn new(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

impl ValueObject for SuggestedPrice {}

/// Product knowledge record attached to one stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSheet {
    pub id: ProductSheetId,
    /// Stock item the sheet describes; required to save.
    #[serde(default)]
    pub item_id: Option<StockItemId>,
    #[serde(default)]
    pub full_name: String,
    /// Product type ("wine", "rum", "whisky", ...).
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tasting_notes: TastingNotes,
    #[serde(default)]
    pub custom_fields: CustomFields,
    #[serde(default)]
    pub food_pairing: String,
    #[serde(default)]
    pub serving_temp: String,
    #[serde(default)]
    pub glassware_ids: GlasswareSelection,
    #[serde(default)]
    pub sales_format: String,
    #[serde(default)]
    pub actual_price: Option<f64>,
    #[serde(default)]
    pub suggested_prices: Vec<SuggestedPrice>,
    #[serde(default)]
    pub status: ReviewStatus,
    pub updated_at: DateTime<Utc>,
}

impl ProductSheet {
    /// A blank sheet with a locally generated identifier.
    pub fn new() -> Self {
        Self {
            id: ProductSheetId::new(),
            item_id: None,
            full_name: String::new(),
            kind: String::new(),
            region: String::new(),
            country: String::new(),
            description: String::new(),
            tasting_notes: TastingNotes::default(),
            custom_fields: CustomFields::new(),
            food_pairing: String::new(),
            serving_temp: String::new(),
            glassware_ids: GlasswareSelection::new(),
            sales_format: String::new(),
            actual_price: None,
            suggested_prices: Vec::new(),
            status: ReviewStatus::Draft,
            updated_at: Utc::now(),
        }
    }

    /// A blank sheet already bound to a stock item.
    pub fn for_item(item_id: StockItemId) -> Self {
        Self {
            item_id: Some(item_id),
            ..Self::new()
        }
    }

    /// A sheet can only be saved once a stock item is chosen.
    pub fn validate(&self) -> DomainResult<()> {
        if self.item_id.is_none() {
            return Err(DomainError::validation("product sheet needs a stock item"));
        }
        Ok(())
    }

    /// Insert or replace a custom field; blank keys are ignored.
    pub fn set_custom_field(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return false;
        }
        self.custom_fields.insert(key.to_string(), value.into());
        true
    }

    pub fn remove_custom_field(&mut self, key: &str) -> Option<String> {
        self.custom_fields.remove(key)
    }
}

impl Default for ProductSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for ProductSheet {
    type Id = ProductSheetId;

    fn id(&self) -> ProductSheetId {
        self.id
    }
}
