//! Storage-edge encoding of product sheets.
//!
//! External storage keeps tasting notes and custom fields as JSON text
//! columns. The conversion happens here and nowhere else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use barkeep_core::{ProductSheetId, ReviewStatus, StockItemId};

use crate::glassware::GlasswareSelection;
use crate::sheet::{CustomFields, ProductSheet, SuggestedPrice, TastingNotes};

/// Product sheet as written to / read from external storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProductSheet {
    pub id: ProductSheetId,
    #[serde(default)]
    pub item_id: Option<StockItemId>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub description: String,
    /// JSON-encoded [`TastingNotes`].
    #[serde(default)]
    pub tasting_notes: String,
    /// JSON-encoded [`CustomFields`].
    #[serde(default)]
    pub custom_fields: String,
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

impl From<&ProductSheet> for StoredProductSheet {
    fn from(sheet: &ProductSheet) -> Self {
        Self {
            id: sheet.id,
            item_id: sheet.item_id,
            full_name: sheet.full_name.clone(),
            kind: sheet.kind.clone(),
            region: sheet.region.clone(),
            country: sheet.country.clone(),
            description: sheet.description.clone(),
            tasting_notes: encode(&sheet.tasting_notes),
            custom_fields: encode(&sheet.custom_fields),
            food_pairing: sheet.food_pairing.clone(),
            serving_temp: sheet.serving_temp.clone(),
            glassware_ids: sheet.glassware_ids.clone(),
            sales_format: sheet.sales_format.clone(),
            actual_price: sheet.actual_price,
            suggested_prices: sheet.suggested_prices.clone(),
            status: sheet.status,
            updated_at: sheet.updated_at,
        }
    }
}

impl StoredProductSheet {
    /// Decode the text columns back into typed records.
    ///
    /// Blank or undecodable text yields empty notes/fields (logged), never an
    /// error: a damaged column must not make the sheet unreadable.
    pub fn into_domain(self) -> ProductSheet {
        let tasting_notes: TastingNotes = decode(&self.tasting_notes, "tastingNotes", self.id);
        let custom_fields: CustomFields = decode(&self.custom_fields, "customFields", self.id);

        ProductSheet {
            id: self.id,
            item_id: self.item_id,
            full_name: self.full_name,
            kind: self.kind,
            region: self.region,
            country: self.country,
            description: self.description,
            tasting_notes,
            custom_fields,
            food_pairing: self.food_pairing,
            serving_temp: self.serving_temp,
            glassware_ids: self.glassware_ids,
            sales_format: self.sales_format,
            actual_price: self.actual_price,
            suggested_prices: self.suggested_prices,
            status: self.status,
            updated_at: self.updated_at,
        }
    }
}

fn encode<T: Serialize>(value: &T) -> String {
    // Plain structs and string maps always serialize.
    serde_json::to_string(value).unwrap_or_default()
}

fn decode<T: DeserializeOwned + Default>(text: &str, field: &'static str, id: ProductSheetId) -> T {
    if text.trim().is_empty() {
        return T::default();
    }
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(sheet_id = %id, field, error = %e, "undecodable product sheet column; using empty value");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barkeep_core::GlasswareId;

    fn sample_sheet() -> ProductSheet {
        let mut sheet = ProductSheet::for_item(StockItemId::new());
        sheet.full_name = "Château Margaux 2015".to_string();
        sheet.kind = "wine".to_string();
        sheet.tasting_notes = TastingNotes {
            eye: "Deep ruby".to_string(),
            nose: "Blackcurrant, violet".to_string(),
            mouth: "Silky tannins".to_string(),
        };
        sheet.set_custom_field("Cépage", "Cabernet Sauvignon");
        sheet.glassware_ids.add(GlasswareId::new());
        sheet.suggested_prices.push(SuggestedPrice::new("Glass", 24.0));
        sheet
    }

    #[test]
    fn nested_records_are_encoded_as_text() {
        let stored = StoredProductSheet::from(&sample_sheet());
        let json = serde_json::to_value(&stored).unwrap();

        let notes = json["tastingNotes"].as_str().unwrap();
        assert!(notes.contains("Deep ruby"));
        let fields = json["customFields"].as_str().unwrap();
        assert!(fields.contains("Cabernet Sauvignon"));
        assert_eq!(json["type"], "wine");
    }

    #[test]
    fn decoding_restores_the_domain_sheet() {
        let sheet = sample_sheet();
        let back = StoredProductSheet::from(&sheet).into_domain();
        assert_eq!(back, sheet);
    }

    #[test]
    fn damaged_columns_decode_to_empty_values() {
        let mut stored = StoredProductSheet::from(&sample_sheet());
        stored.tasting_notes = "{not json".to_string();
        stored.custom_fields = String::new();

        let sheet = stored.into_domain();
        assert!(sheet.tasting_notes.is_empty());
        assert!(sheet.custom_fields.is_empty());
        assert_eq!(sheet.full_name, "Château Margaux 2015");
    }
}
