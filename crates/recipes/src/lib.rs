//! Recipe domain module.
//!
//! Cocktail recipes, their ingredient lines and the material cost / suggested
//! selling price derived from the stock catalog. Pure domain logic: no IO, no
//! AI, no sync.

pub mod margin;
pub mod pricing;
pub mod recipe;
pub mod technique;

pub use margin::{DEFAULT_MARGIN_PERCENT, Margin, PricingConfig};
pub use pricing::{
    CostLine, PricingSummary, centiliter_equivalent, cost_breakdown, ingredient_cost,
    price_recipe, round_currency, suggested_price, total_cost,
};
pub use recipe::{IngredientSource, IngredientUnit, Recipe, RecipeIngredient, UNKNOWN_INGREDIENT};
pub use technique::Technique;
