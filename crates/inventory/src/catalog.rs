//! In-memory catalog handed over by the host.

use serde::{Deserialize, Serialize};

use barkeep_core::{FormatId, GlasswareId, StockItemId, find_by_id};

use crate::item::{DEFAULT_REFERENCE_VOLUME, Format, Glassware, StockItem, StockLevel};

/// Already-loaded collections the managers read from.
///
/// The catalog is a snapshot: it is rebuilt (or replaced) by the host
/// whenever its data changes, and everything derived from it is recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCatalog {
    #[serde(default)]
    pub items: Vec<StockItem>,
    #[serde(default)]
    pub formats: Vec<Format>,
    #[serde(default)]
    pub levels: Vec<StockLevel>,
    #[serde(default)]
    pub glassware: Vec<Glassware>,
}

impl StockCatalog {
    pub fn new(items: Vec<StockItem>, formats: Vec<Format>) -> Self {
        Self {
            items,
            formats,
            ..Self::default()
        }
    }

    pub fn with_levels(mut self, levels: Vec<StockLevel>) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_glassware(mut self, glassware: Vec<Glassware>) -> Self {
        self.glassware = glassware;
        self
    }

    pub fn item(&self, id: StockItemId) -> Option<&StockItem> {
        find_by_id(&self.items, id)
    }

    pub fn format(&self, id: FormatId) -> Option<&Format> {
        find_by_id(&self.formats, id)
    }

    pub fn glass(&self, id: GlasswareId) -> Option<&Glassware> {
        find_by_id(&self.glassware, id)
    }

    /// Reference volume (cl) of the item's format, or the 70cl default.
    pub fn reference_volume(&self, item: &StockItem) -> f64 {
        item.format_id
            .and_then(|id| self.format(id))
            .and_then(Format::reference_volume)
            .unwrap_or(DEFAULT_REFERENCE_VOLUME)
    }

    /// Stock levels recorded for an item, in catalog order.
    pub fn levels_for(&self, id: StockItemId) -> impl Iterator<Item = &StockLevel> {
        self.levels.iter().filter(move |l| l.item_id == id)
    }

    /// Names of every stock item, in catalog order.
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_volume_uses_format_or_defaults_to_70() {
        let litre = Format::new("Litre", 100.0);
        let with_format = StockItem::new("Rum").with_format(litre.id);
        let unknown_format = StockItem::new("Gin").with_format(FormatId::new());
        let no_format = StockItem::new("Vodka");

        let catalog = StockCatalog::new(
            vec![with_format.clone(), unknown_format.clone(), no_format.clone()],
            vec![litre],
        );

        assert_eq!(catalog.reference_volume(&with_format), 100.0);
        assert_eq!(catalog.reference_volume(&unknown_format), 70.0);
        assert_eq!(catalog.reference_volume(&no_format), 70.0);
    }

    #[test]
    fn levels_for_filters_by_item() {
        let rum = StockItem::new("Rum");
        let gin = StockItem::new("Gin");
        let catalog = StockCatalog::new(vec![rum.clone(), gin.clone()], vec![]).with_levels(vec![
            StockLevel::new(rum.id, "bar", 1.0),
            StockLevel::new(gin.id, "bar", 2.0),
            StockLevel::new(rum.id, "cellar", 3.0),
        ]);

        let locations: Vec<&str> = catalog.levels_for(rum.id).map(|l| l.location.as_str()).collect();
        assert_eq!(locations, vec!["bar", "cellar"]);
    }
}
