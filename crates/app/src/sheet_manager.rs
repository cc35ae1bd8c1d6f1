//! Product Sheet Manager.
//!
//! Same session shape as the recipe manager: the manager owns the loaded
//! sheets and the catalog, a [`SheetForm`] owns one edit and its autofill
//! in-flight flag.

use barkeep_ai::{ContentBridge, ProductSheetSuggestion, apply_product_sheet_suggestion};
use barkeep_auth::Principal;
use barkeep_core::{GlasswareId, ProductSheetId, StockItemId, find_by_id};
use barkeep_inventory::{StockCatalog, StockIndicator};
use barkeep_sheets::{ProductSheet, SuggestedPrice};
use barkeep_sync::{SyncAction, SyncSink};
use chrono::Utc;

#[derive(Debug, Clone, PartialEq)]
pub struct SheetForm {
    pub sheet: ProductSheet,
    autofill_in_flight: bool,
}

impl SheetForm {
    pub fn new(sheet: ProductSheet) -> Self {
        Self {
            sheet,
            autofill_in_flight: false,
        }
    }

    pub fn is_autofilling(&self) -> bool {
        self.autofill_in_flight
    }

    /// Add or remove a glass; adding a fourth is refused.
    pub fn toggle_glassware(&mut self, id: GlasswareId) -> bool {
        self.sheet.glassware_ids.toggle(id)
    }

    pub fn add_suggested_price(&mut self, label: impl Into<String>, price: f64) {
        self.sheet.suggested_prices.push(SuggestedPrice::new(label, price));
    }

    pub fn remove_suggested_price(&mut self, index: usize) -> Option<SuggestedPrice> {
        (index < self.sheet.suggested_prices.len()).then(|| self.sheet.suggested_prices.remove(index))
    }
}

/// Inputs of an outstanding product sheet autofill request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSheetAutofill {
    pub name: String,
    pub kind: String,
}

impl ProductSheetAutofill {
    pub async fn run(&self, bridge: &dyn ContentBridge) -> Option<ProductSheetSuggestion> {
        bridge.generate_product_sheet(&self.name, &self.kind).await
    }
}

#[derive(Debug, Clone)]
pub struct SheetManager {
    sheets: Vec<ProductSheet>,
    catalog: StockCatalog,
    principal: Principal,
}

impl SheetManager {
    pub fn new(sheets: Vec<ProductSheet>, catalog: StockCatalog, principal: Principal) -> Self {
        Self {
            sheets,
            catalog,
            principal,
        }
    }

    pub fn sheets(&self) -> &[ProductSheet] {
        &self.sheets
    }

    pub fn sheet(&self, id: ProductSheetId) -> Option<&ProductSheet> {
        find_by_id(&self.sheets, id)
    }

    pub fn sheet_for_item(&self, item_id: StockItemId) -> Option<&ProductSheet> {
        self.sheets.iter().find(|s| s.item_id == Some(item_id))
    }

    pub fn catalog(&self) -> &StockCatalog {
        &self.catalog
    }

    pub fn replace_catalog(&mut self, catalog: StockCatalog) {
        self.catalog = catalog;
    }

    pub fn create(&self) -> SheetForm {
        SheetForm::new(ProductSheet::new())
    }

    /// Blank form bound to a stock item, named after it.
    pub fn create_for_item(&self, item_id: StockItemId) -> SheetForm {
        let mut sheet = ProductSheet::for_item(item_id);
        if let Some(item) = self.catalog.item(item_id) {
            sheet.full_name = item.name.clone();
        }
        SheetForm::new(sheet)
    }

    pub fn edit(&self, id: ProductSheetId) -> Option<SheetForm> {
        self.sheet(id).cloned().map(SheetForm::new)
    }

    pub fn delete(&mut self, id: ProductSheetId) -> Option<ProductSheet> {
        let index = self.sheets.iter().position(|s| s.id == id)?;
        tracing::info!(sheet_id = %id, "product sheet removed from session list");
        Some(self.sheets.remove(index))
    }

    /// Indicator for the stock item the form describes.
    pub fn indicator(&self, form: &SheetForm) -> Option<StockIndicator> {
        form.sheet.item_id.and_then(|id| self.catalog.indicator(id))
    }

    /// Names of the selected glasses, skipping ids the catalog no longer has.
    pub fn glassware_names(&self, form: &SheetForm) -> Vec<String> {
        form.sheet
            .glassware_ids
            .ids()
            .iter()
            .filter_map(|id| self.catalog.glass(*id))
            .map(|g| g.name.clone())
            .collect()
    }

    /// Save the form locally and hand it to the sync sink.
    ///
    /// A sheet without a stock item is not saved (`None`, form untouched).
    pub fn save(&mut self, form: &mut SheetForm, sink: &dyn SyncSink) -> Option<ProductSheet> {
        if let Err(e) = form.sheet.validate() {
            tracing::debug!(sheet_id = %form.sheet.id, error = %e, "product sheet save skipped");
            return None;
        }

        let mut sheet = form.sheet.clone();
        sheet.status = self.principal.save_status();
        sheet.updated_at = Utc::now();

        match self.sheets.iter_mut().find(|s| s.id == sheet.id) {
            Some(existing) => *existing = sheet.clone(),
            None => self.sheets.push(sheet.clone()),
        }
        form.sheet = sheet.clone();

        tracing::info!(sheet_id = %sheet.id, status = %sheet.status, "product sheet saved");
        sink.sync(SyncAction::SaveProductSheet(sheet.clone()));
        Some(sheet)
    }

    /// Start an autofill; `None` while one is outstanding or when there is no
    /// product name to ask about (the sheet's name, else its item's name).
    pub fn begin_autofill(&self, form: &mut SheetForm) -> Option<ProductSheetAutofill> {
        if form.autofill_in_flight {
            return None;
        }
        let name = match form.sheet.full_name.trim() {
            "" => form
                .sheet
                .item_id
                .and_then(|id| self.catalog.item(id))
                .map(|item| item.name.trim().to_string())
                .unwrap_or_default(),
            name => name.to_string(),
        };
        if name.is_empty() {
            return None;
        }

        form.autofill_in_flight = true;
        Some(ProductSheetAutofill {
            name,
            kind: form.sheet.kind.trim().to_string(),
        })
    }

    pub fn complete_autofill(
        &self,
        form: &mut SheetForm,
        suggestion: Option<ProductSheetSuggestion>,
    ) -> Vec<&'static str> {
        form.autofill_in_flight = false;

        let Some(suggestion) = suggestion else {
            tracing::debug!(sheet_id = %form.sheet.id, "no product sheet suggestion; form unchanged");
            return Vec::new();
        };
        let updated = apply_product_sheet_suggestion(&mut form.sheet, &suggestion);
        tracing::info!(sheet_id = %form.sheet.id, fields = ?updated, "product sheet autofill applied");
        updated
    }

    pub async fn autofill(&self, form: &mut SheetForm, bridge: &dyn ContentBridge) -> Vec<&'static str> {
        let Some(request) = self.begin_autofill(form) else {
            return Vec::new();
        };
        let suggestion = request.run(bridge).await;
        self.complete_autofill(form, suggestion)
    }
}
