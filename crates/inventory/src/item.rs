use serde::{Deserialize, Serialize};

use barkeep_core::{Entity, FormatId, GlasswareId, StockItemId};

/// Reference volume (centiliters) assumed when an item has no usable format.
pub const DEFAULT_REFERENCE_VOLUME: f64 = 70.0;

/// A stock item as tracked by the bar (a bottle reference, a garnish, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: StockItemId,
    pub name: String,
    /// Quantity on hand when no per-location stock levels are known.
    #[serde(default)]
    pub quantity: f64,
    /// Reorder threshold ("consigne").
    #[serde(default)]
    pub consigne: f64,
    /// Purchase price of one unit (one bottle of the item's format).
    #[serde(default)]
    pub price_per_unit: Option<f64>,
    #[serde(default)]
    pub format_id: Option<FormatId>,
}

impl StockItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StockItemId::new(),
            name: name.into(),
            quantity: 0.0,
            consigne: 0.0,
            price_per_unit: None,
            format_id: None,
        }
    }

    pub fn with_price(mut self, price_per_unit: f64) -> Self {
        self.price_per_unit = Some(price_per_unit);
        self
    }

    pub fn with_format(mut self, format_id: FormatId) -> Self {
        self.format_id = Some(format_id);
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_consigne(mut self, consigne: f64) -> Self {
        self.consigne = consigne;
        self
    }

    /// Unit price, if one is recorded and usable.
    pub fn unit_price(&self) -> Option<f64> {
        self.price_per_unit.filter(|p| p.is_finite() && *p > 0.0)
    }
}

impl Entity for StockItem {
    type Id = StockItemId;

    fn id(&self) -> StockItemId {
        self.id
    }
}

/// Packaging / reference-volume descriptor (e.g. "Bouteille 70cl" → 70).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    pub id: FormatId,
    pub name: String,
    /// Reference volume in centiliters.
    pub value: f64,
}

impl Format {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            id: FormatId::new(),
            name: name.into(),
            value,
        }
    }

    /// Reference volume usable as a divisor.
    pub fn reference_volume(&self) -> Option<f64> {
        (self.value.is_finite() && self.value > 0.0).then_some(self.value)
    }
}

impl Entity for Format {
    type Id = FormatId;

    fn id(&self) -> FormatId {
        self.id
    }
}

/// Location-partitioned quantity of a stock item (bar, cellar, reserve...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub item_id: StockItemId,
    #[serde(default)]
    pub location: String,
    pub quantity: f64,
}

impl StockLevel {
    pub fn new(item_id: StockItemId, location: impl Into<String>, quantity: f64) -> Self {
        Self {
            item_id,
            location: location.into(),
            quantity,
        }
    }
}

/// A glass type recipes and product sheets can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glassware {
    pub id: GlasswareId,
    pub name: String,
}

impl Glassware {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GlasswareId::new(),
            name: name.into(),
        }
    }
}

impl Entity for Glassware {
    type Id = GlasswareId;

    fn id(&self) -> GlasswareId {
        self.id
    }
}
