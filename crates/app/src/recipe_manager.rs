//! Recipe Manager.
//!
//! Holds the loaded recipe list plus the catalog it prices against, and hands
//! out one [`RecipeForm`] per editing session. Pricing and stock indicators
//! are derived on every call from the form's current ingredients.
//!
//! AI autofill is split in three steps so a host can run the request wherever
//! it likes:
//! 1. [`RecipeManager::begin_autofill`] flips the form's in-flight flag and
//!    captures the request inputs (`None` while a request is outstanding).
//! 2. [`CocktailAutofill::run`] awaits the content bridge.
//! 3. [`RecipeManager::complete_autofill`] clears the flag and applies whatever
//!    arrived, even if the form was edited in the meantime.

use barkeep_ai::{ContentBridge, CocktailSuggestion, apply_cocktail_suggestion};
use barkeep_auth::Principal;
use barkeep_core::{RecipeId, find_by_id};
use barkeep_inventory::{StockCatalog, StockIndicator};
use barkeep_recipes::{
    CostLine, PricingConfig, PricingSummary, Recipe, RecipeIngredient, cost_breakdown, price_recipe,
    round_currency,
};
use barkeep_sync::{SyncAction, SyncSink};

/// One open recipe editing session.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeForm {
    pub recipe: Recipe,
    autofill_in_flight: bool,
}

impl RecipeForm {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            autofill_in_flight: false,
        }
    }

    pub fn is_autofilling(&self) -> bool {
        self.autofill_in_flight
    }

    pub fn add_ingredient(&mut self, ingredient: RecipeIngredient) {
        self.recipe.ingredients.push(ingredient);
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Option<RecipeIngredient> {
        (index < self.recipe.ingredients.len()).then(|| self.recipe.ingredients.remove(index))
    }

    /// Replace the line at `index`; returns `false` when out of range.
    pub fn update_ingredient(&mut self, index: usize, ingredient: RecipeIngredient) -> bool {
        match self.recipe.ingredients.get_mut(index) {
            Some(slot) => {
                *slot = ingredient;
                true
            }
            None => false,
        }
    }
}

/// Inputs of an outstanding cocktail autofill request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CocktailAutofill {
    pub name: String,
    pub available_ingredients: Vec<String>,
}

impl CocktailAutofill {
    pub async fn run(&self, bridge: &dyn ContentBridge) -> Option<CocktailSuggestion> {
        bridge
            .generate_cocktail(&self.name, &self.available_ingredients)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct RecipeManager {
    recipes: Vec<Recipe>,
    catalog: StockCatalog,
    pricing: PricingConfig,
    principal: Principal,
}

impl RecipeManager {
    pub fn new(
        recipes: Vec<Recipe>,
        catalog: StockCatalog,
        pricing: PricingConfig,
        principal: Principal,
    ) -> Self {
        Self {
            recipes,
            catalog,
            pricing,
            principal,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        find_by_id(&self.recipes, id)
    }

    pub fn catalog(&self) -> &StockCatalog {
        &self.catalog
    }

    /// Swap in fresh stock data; open forms re-derive against it on next read.
    pub fn replace_catalog(&mut self, catalog: StockCatalog) {
        self.catalog = catalog;
    }

    pub fn pricing_config(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Blank form owned by the acting user.
    pub fn create(&self) -> RecipeForm {
        RecipeForm::new(Recipe::new(Some(self.principal.user_id)))
    }

    pub fn edit(&self, id: RecipeId) -> Option<RecipeForm> {
        self.recipe(id).cloned().map(RecipeForm::new)
    }

    /// Drop a recipe from the local list.
    pub fn delete(&mut self, id: RecipeId) -> Option<Recipe> {
        let index = self.recipes.iter().position(|r| r.id == id)?;
        tracing::info!(recipe_id = %id, "recipe removed from session list");
        Some(self.recipes.remove(index))
    }

    pub fn pricing(&self, form: &RecipeForm) -> PricingSummary {
        price_recipe(&form.recipe.ingredients, &self.catalog, &self.pricing)
    }

    pub fn cost_breakdown(&self, form: &RecipeForm) -> Vec<CostLine> {
        cost_breakdown(&form.recipe.ingredients, &self.catalog)
    }

    /// Stock indicator per ingredient line, in recipe order. Free-text lines
    /// never carry one.
    pub fn ingredient_indicators(&self, form: &RecipeForm) -> Vec<Option<StockIndicator>> {
        form.recipe
            .ingredients
            .iter()
            .map(|i| i.item_id().and_then(|id| self.catalog.indicator(id)))
            .collect()
    }

    /// Persist the form locally and hand it to the sync sink.
    ///
    /// Prices are stamped from the current pricing and the status from the
    /// acting role. An invalid form is a no-op: nothing changes and `None`
    /// is returned.
    pub fn save(&mut self, form: &mut RecipeForm, sink: &dyn SyncSink) -> Option<Recipe> {
        if let Err(e) = form.recipe.validate() {
            tracing::debug!(recipe_id = %form.recipe.id, error = %e, "recipe save skipped");
            return None;
        }

        let pricing = self.pricing(form);
        let mut recipe = form.recipe.clone();
        recipe.cost_price = round_currency(pricing.total_cost);
        recipe.selling_price = round_currency(pricing.suggested_price);
        recipe.status = self.principal.save_status();

        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe.clone(),
            None => self.recipes.push(recipe.clone()),
        }
        form.recipe = recipe.clone();

        tracing::info!(
            recipe_id = %recipe.id,
            status = %recipe.status,
            cost_price = recipe.cost_price,
            selling_price = recipe.selling_price,
            "recipe saved"
        );
        sink.sync(SyncAction::SaveRecipe(recipe.clone()));
        Some(recipe)
    }

    /// Start an autofill for the form; `None` while one is outstanding or
    /// when the recipe has no name to ask about.
    pub fn begin_autofill(&self, form: &mut RecipeForm) -> Option<CocktailAutofill> {
        if form.autofill_in_flight {
            return None;
        }
        let name = form.recipe.name.trim();
        if name.is_empty() {
            return None;
        }

        let request = CocktailAutofill {
            name: name.to_string(),
            available_ingredients: self.catalog.item_names(),
        };
        form.autofill_in_flight = true;
        Some(request)
    }

    /// Clear the in-flight flag and apply the suggestion, if any.
    pub fn complete_autofill(
        &self,
        form: &mut RecipeForm,
        suggestion: Option<CocktailSuggestion>,
    ) -> Vec<&'static str> {
        form.autofill_in_flight = false;

        let Some(suggestion) = suggestion else {
            tracing::debug!(recipe_id = %form.recipe.id, "no cocktail suggestion; form unchanged");
            return Vec::new();
        };
        let updated = apply_cocktail_suggestion(&mut form.recipe, &suggestion, &self.catalog);
        tracing::info!(recipe_id = %form.recipe.id, fields = ?updated, "cocktail autofill applied");
        updated
    }

    pub async fn autofill(&self, form: &mut RecipeForm, bridge: &dyn ContentBridge) -> Vec<&'static str> {
        let Some(request) = self.begin_autofill(form) else {
            return Vec::new();
        };
        let suggestion = request.run(bridge).await;
        self.complete_autofill(form, suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barkeep_ai::{FakeProvider, LlmContentBridge};
    use barkeep_auth::Role;
    use barkeep_core::{ReviewStatus, UserId};
    use barkeep_inventory::{Format, StockItem};
    use barkeep_recipes::{IngredientUnit, Margin};
    use barkeep_sync::{RecordingSyncSink, SAVE_RECIPE};

    fn manager(role: Role) -> RecipeManager {
        let bottle = Format::new("Bottle 70cl", 70.0);
        let items = vec![
            StockItem::new("Tequila Blanco")
                .with_price(21.0)
                .with_format(bottle.id)
                .with_quantity(4.0)
                .with_consigne(2.0),
            StockItem::new("Cointreau")
                .with_price(14.0)
                .with_format(bottle.id)
                .with_quantity(0.0)
                .with_consigne(1.0),
        ];
        RecipeManager::new(
            Vec::new(),
            StockCatalog::new(items, vec![bottle]),
            PricingConfig::default(),
            Principal::new(UserId::new(), role),
        )
    }

    fn margarita(manager: &RecipeManager) -> RecipeForm {
        let tequila = manager.catalog().items[0].id;
        let cointreau = manager.catalog().items[1].id;
        let mut form = manager.create();
        form.recipe.name = "Margarita".to_string();
        form.add_ingredient(RecipeIngredient::stock(tequila, 5.0, IngredientUnit::Cl));
        form.add_ingredient(RecipeIngredient::stock(cointreau, 2.0, IngredientUnit::Cl));
        form.add_ingredient(RecipeIngredient::free("Lime juice", 2.0, IngredientUnit::Cl));
        form
    }

    #[test]
    fn pricing_follows_the_form() {
        let manager = manager(Role::BARTENDER);
        let mut form = margarita(&manager);

        let pricing = manager.pricing(&form);
        assert!((pricing.total_cost - 1.9).abs() < 1e-9);

        form.remove_ingredient(1);
        assert!((manager.pricing(&form).total_cost - 1.5).abs() < 1e-9);
        assert_eq!(form.remove_ingredient(9), None);
    }

    #[test]
    fn indicators_flag_only_stock_lines() {
        let manager = manager(Role::BARTENDER);
        let form = margarita(&manager);

        assert_eq!(
            manager.ingredient_indicators(&form),
            vec![None, Some(StockIndicator::OutOfStock), None]
        );
    }

    #[test]
    fn invalid_form_save_is_a_no_op() {
        let mut manager = manager(Role::ADMIN);
        let sink = RecordingSyncSink::new();
        let mut form = manager.create();
        form.recipe.name = "Empty".to_string();
        let before = form.clone();

        assert_eq!(manager.save(&mut form, &sink), None);
        assert_eq!(form, before);
        assert!(manager.recipes().is_empty());
        assert!(sink.all().is_empty());
    }

    #[test]
    fn save_stamps_prices_and_role_status() {
        let mut manager = manager(Role::BARTENDER);
        let sink = RecordingSyncSink::new();
        let mut form = margarita(&manager);

        let saved = manager.save(&mut form, &sink).unwrap();
        assert_eq!(saved.cost_price, 1.9);
        assert_eq!(saved.selling_price, 10.56);
        assert_eq!(saved.status, ReviewStatus::Draft);
        assert_eq!(sink.names(), vec![SAVE_RECIPE]);
        assert_eq!(manager.recipes().len(), 1);
        assert_eq!(form.recipe, saved);
    }

    #[test]
    fn resaving_updates_in_place() {
        let mut manager = manager(Role::MANAGER);
        let sink = RecordingSyncSink::new();
        let mut form = margarita(&manager);
        manager.save(&mut form, &sink).unwrap();

        let mut again = manager.edit(form.recipe.id).unwrap();
        again.recipe.decoration = "Salt rim".to_string();
        let saved = manager.save(&mut again, &sink).unwrap();

        assert_eq!(manager.recipes().len(), 1);
        assert_eq!(saved.status, ReviewStatus::Validated);
        assert_eq!(manager.recipe(saved.id).unwrap().decoration, "Salt rim");
        assert_eq!(sink.all().len(), 2);
    }

    #[test]
    fn zero_margin_prices_at_cost() {
        let mut manager = manager(Role::BARTENDER);
        manager.pricing = PricingConfig::new(Margin::new(0.0).unwrap());
        let form = margarita(&manager);

        let pricing = manager.pricing(&form);
        assert!((pricing.suggested_price - pricing.total_cost).abs() < 1e-9);
    }

    #[test]
    fn delete_removes_locally() {
        let mut manager = manager(Role::ADMIN);
        let sink = |_action: SyncAction| {};
        let mut form = margarita(&manager);
        let saved = manager.save(&mut form, &sink).unwrap();

        assert_eq!(manager.delete(saved.id).map(|r| r.id), Some(saved.id));
        assert_eq!(manager.delete(saved.id), None);
    }

    #[test]
    fn second_autofill_is_refused_while_in_flight() {
        let manager = manager(Role::BARTENDER);
        let mut form = margarita(&manager);

        let request = manager.begin_autofill(&mut form).unwrap();
        assert_eq!(request.name, "Margarita");
        assert_eq!(request.available_ingredients, vec!["Tequila Blanco", "Cointreau"]);
        assert!(form.is_autofilling());
        assert_eq!(manager.begin_autofill(&mut form), None);

        assert!(manager.complete_autofill(&mut form, None).is_empty());
        assert!(!form.is_autofilling());
        assert!(manager.begin_autofill(&mut form).is_some());
    }

    #[test]
    fn unnamed_recipe_cannot_autofill() {
        let manager = manager(Role::BARTENDER);
        let mut form = manager.create();
        assert_eq!(manager.begin_autofill(&mut form), None);
        assert!(!form.is_autofilling());
    }

    #[tokio::test]
    async fn autofill_maps_ingredients_onto_stock() {
        let manager = manager(Role::BARTENDER);
        let mut form = manager.create();
        form.recipe.name = "Margarita".to_string();

        let bridge = LlmContentBridge::new(FakeProvider::with_response(
            "cocktail card",
            r#"{"description": "Sour and salty.", "technique": "shaker",
                "ingredients": [{"name": "tequila", "quantity": 5, "unit": "cl"},
                                {"name": "Lime juice", "quantity": "2", "unit": "cl"}]}"#,
        ));

        let updated = manager.autofill(&mut form, &bridge).await;
        assert_eq!(updated, vec!["description", "technique", "ingredients"]);
        assert_eq!(form.recipe.ingredients[0].item_id(), Some(manager.catalog().items[0].id));
        assert_eq!(form.recipe.ingredients[1].item_id(), None);
        assert!(!form.is_autofilling());
    }

    #[tokio::test]
    async fn failed_autofill_leaves_the_form_alone() {
        let manager = manager(Role::BARTENDER);
        let mut form = margarita(&manager);
        let before = form.recipe.clone();

        let bridge = LlmContentBridge::new(FakeProvider::new());
        assert!(manager.autofill(&mut form, &bridge).await.is_empty());
        assert_eq!(form.recipe, before);
        assert!(!form.is_autofilling());
    }
}
