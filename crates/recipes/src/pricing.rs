//! Ingredient cost & pricing calculator.
//!
//! Model:
//! - Each stock-backed line costs `unit price / reference volume * cl-equivalent`.
//! - Free-text lines, unknown items and unpriced items cost nothing.
//! - The suggested price grosses the total cost up by the configured margin:
//!   `price = cost / (1 - margin / 100)`.
//!
//! Everything here is a pure function of its inputs; callers recompute
//! whenever ingredients, items or formats change.

use serde::{Deserialize, Serialize};

use barkeep_inventory::StockCatalog;

use crate::margin::{Margin, PricingConfig};
use crate::recipe::{IngredientSource, IngredientUnit, RecipeIngredient};

/// Convert a quantity to the reference-volume unit family (centiliters).
///
/// A dash counts as 0.1cl; a piece counts as one unit whatever the quantity.
pub fn centiliter_equivalent(quantity: f64, unit: IngredientUnit) -> f64 {
    match unit {
        IngredientUnit::Cl => quantity,
        IngredientUnit::Ml => quantity / 10.0,
        IngredientUnit::Dash => quantity * 0.1,
        IngredientUnit::Piece => 1.0,
    }
}

/// Theoretical material cost of one ingredient line.
pub fn ingredient_cost(ingredient: &RecipeIngredient, catalog: &StockCatalog) -> f64 {
    let IngredientSource::Stock { item_id } = &ingredient.source else {
        return 0.0;
    };
    let Some(item) = catalog.item(*item_id) else {
        return 0.0;
    };
    let Some(unit_price) = item.unit_price() else {
        return 0.0;
    };

    let reference_volume = catalog.reference_volume(item);
    (unit_price / reference_volume) * centiliter_equivalent(ingredient.quantity, ingredient.unit)
}

/// Sum of the per-line costs.
pub fn total_cost(ingredients: &[RecipeIngredient], catalog: &StockCatalog) -> f64 {
    ingredients.iter().map(|i| ingredient_cost(i, catalog)).sum()
}

/// Selling price at which `total_cost` represents `1 - margin` of the price.
pub fn suggested_price(total_cost: f64, margin: Margin) -> f64 {
    total_cost / margin.cost_ratio()
}

/// Round a currency amount to cents.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// One priced line of a recipe, for detail views and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub name: String,
    pub quantity: f64,
    pub unit: IngredientUnit,
    pub cost: f64,
}

/// Per-line costs, in recipe order.
pub fn cost_breakdown(ingredients: &[RecipeIngredient], catalog: &StockCatalog) -> Vec<CostLine> {
    ingredients
        .iter()
        .map(|i| CostLine {
            name: i.display_name(catalog).to_string(),
            quantity: i.quantity,
            unit: i.unit,
            cost: ingredient_cost(i, catalog),
        })
        .collect()
}

/// Derived pricing of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    pub total_cost: f64,
    pub suggested_price: f64,
    pub margin_percent: f64,
    /// `total_cost / suggested_price`; 0 when nothing is priced.
    pub cost_ratio: f64,
}

pub fn price_recipe(
    ingredients: &[RecipeIngredient],
    catalog: &StockCatalog,
    config: &PricingConfig,
) -> PricingSummary {
    let total_cost = total_cost(ingredients, catalog);
    let suggested_price = suggested_price(total_cost, config.margin);
    let cost_ratio = if suggested_price > 0.0 {
        total_cost / suggested_price
    } else {
        0.0
    };

    PricingSummary {
        total_cost,
        suggested_price,
        margin_percent: config.margin.percent(),
        cost_ratio,
    }
}
