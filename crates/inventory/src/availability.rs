//! Stock availability annotation.
//!
//! Purely derived: nothing here is stored, callers recompute on every read
//! from the current catalog.

use serde::{Deserialize, Serialize};

use barkeep_core::StockItemId;

use crate::catalog::StockCatalog;
use crate::item::StockItem;

/// Availability indicator shown next to an ingredient or product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockIndicator {
    /// Nothing left (blocking).
    OutOfStock,
    /// Below the reorder threshold (warning).
    LowStock,
}

impl StockIndicator {
    pub fn is_blocking(&self) -> bool {
        matches!(self, StockIndicator::OutOfStock)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockIndicator::OutOfStock => "out of stock",
            StockIndicator::LowStock => "low stock",
        }
    }
}

/// Classify an availability figure against a reorder threshold.
pub fn classify(quantity: f64, consigne: f64) -> Option<StockIndicator> {
    if quantity <= 0.0 {
        Some(StockIndicator::OutOfStock)
    } else if quantity < consigne {
        Some(StockIndicator::LowStock)
    } else {
        None
    }
}

/// Total quantity available for an item across all stock levels.
///
/// Falls back to the item's own `quantity` when no level is recorded for it.
pub fn availability(catalog: &StockCatalog, item: &StockItem) -> f64 {
    let mut levels = catalog.levels_for(item.id).peekable();
    if levels.peek().is_none() {
        return item.quantity;
    }
    levels.map(|l| l.quantity).sum()
}

/// One flagged item in a catalog-wide stock report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub item_id: StockItemId,
    pub name: String,
    pub quantity: f64,
    pub consigne: f64,
    pub indicator: StockIndicator,
}

impl StockCatalog {
    /// Indicator for a referenced item; `None` when unknown or sufficiently stocked.
    pub fn indicator(&self, id: StockItemId) -> Option<StockIndicator> {
        let item = self.item(id)?;
        classify(availability(self, item), item.consigne)
    }
}

/// Every catalog item currently carrying an indicator, in catalog order.
pub fn stock_alerts(catalog: &StockCatalog) -> Vec<StockAlert> {
    catalog
        .items
        .iter()
        .filter_map(|item| {
            let quantity = availability(catalog, item);
            classify(quantity, item.consigne).map(|indicator| StockAlert {
                item_id: item.id,
                name: item.name.clone(),
                quantity,
                consigne: item.consigne,
                indicator,
            })
        })
        .collect()
}
