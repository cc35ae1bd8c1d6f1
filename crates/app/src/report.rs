//! Plain-text stock and recipe report used by `barkeep-report`.

use barkeep_ai::{ContentBridge, StockAnalysis};
use barkeep_inventory::{StockCatalog, stock_alerts};
use barkeep_recipes::{PricingConfig, Recipe, price_recipe};

/// One line per flagged item, e.g. `Gin: low stock (2 / 4)`.
pub fn alert_lines(catalog: &StockCatalog) -> Vec<String> {
    stock_alerts(catalog)
        .into_iter()
        .map(|alert| {
            format!(
                "{}: {} ({} / {})",
                alert.name,
                alert.indicator.label(),
                alert.quantity,
                alert.consigne
            )
        })
        .collect()
}

/// Current cost and suggested price of each recipe, priced against today's
/// catalog rather than the stamped values.
pub fn recipe_lines(recipes: &[Recipe], catalog: &StockCatalog, pricing: &PricingConfig) -> Vec<String> {
    recipes
        .iter()
        .map(|recipe| {
            let summary = price_recipe(&recipe.ingredients, catalog, pricing);
            let blocked: Vec<&str> = recipe
                .ingredients
                .iter()
                .filter(|i| {
                    i.item_id()
                        .and_then(|id| catalog.indicator(id))
                        .is_some_and(|ind| ind.is_blocking())
                })
                .map(|i| i.display_name(catalog))
                .collect();

            let mut line = format!(
                "{} [{}]: cost {:.2}, price {:.2} at {}% margin",
                recipe.name, recipe.status, summary.total_cost, summary.suggested_price, summary.margin_percent
            );
            if !blocked.is_empty() {
                line.push_str(&format!(" - out of stock: {}", blocked.join(", ")));
            }
            line
        })
        .collect()
}

/// Ask the bridge for a stock analysis of the whole catalog.
pub async fn stock_analysis(catalog: &StockCatalog, bridge: &dyn ContentBridge) -> Option<StockAnalysis> {
    let analysis = bridge.analyze_stock(&catalog.items).await;
    if analysis.is_none() {
        tracing::debug!(items = catalog.items.len(), "stock analysis unavailable");
    }
    analysis
}

pub fn analysis_lines(analysis: &StockAnalysis) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(summary) = &analysis.summary {
        lines.push(summary.clone());
    }
    lines.extend(analysis.alerts.iter().map(|a| format!("! {a}")));
    lines.extend(analysis.recommendations.iter().map(|r| format!("> {r}")));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use barkeep_ai::{FakeProvider, LlmContentBridge};
    use barkeep_inventory::{Format, StockItem, StockLevel};
    use barkeep_recipes::{IngredientUnit, RecipeIngredient};

    fn catalog() -> StockCatalog {
        let bottle = Format::new("Bottle", 70.0);
        let gin = StockItem::new("Gin").with_price(28.0).with_format(bottle.id).with_consigne(4.0);
        let vermouth = StockItem::new("Vermouth").with_price(14.0).with_format(bottle.id);
        let levels = vec![
            StockLevel::new(gin.id, "Bar", 1.0),
            StockLevel::new(gin.id, "Cellar", 1.0),
        ];
        StockCatalog::new(vec![gin, vermouth], vec![bottle]).with_levels(levels)
    }

    #[test]
    fn alerts_list_flagged_items() {
        assert_eq!(
            alert_lines(&catalog()),
            vec!["Gin: low stock (2 / 4)", "Vermouth: out of stock (0 / 0)"]
        );
    }

    #[test]
    fn recipe_lines_price_and_flag_missing_stock() {
        let catalog = catalog();
        let mut martini = Recipe::new(None);
        martini.name = "Martini".to_string();
        martini.ingredients = vec![
            RecipeIngredient::stock(catalog.items[0].id, 6.0, IngredientUnit::Cl),
            RecipeIngredient::stock(catalog.items[1].id, 1.0, IngredientUnit::Cl),
        ];

        let lines = recipe_lines(&[martini], &catalog, &PricingConfig::default());
        assert_eq!(
            lines,
            vec!["Martini [DRAFT]: cost 2.60, price 14.44 at 82% margin - out of stock: Vermouth"]
        );
    }

    #[tokio::test]
    async fn analysis_renders_every_section() {
        let bridge = LlmContentBridge::new(FakeProvider::with_response(
            "stock analysis",
            r#"{"summary": "Reorder gin.", "alerts": ["Gin low"], "recommendations": ["Buy 6 gin"]}"#,
        ));
        let analysis = stock_analysis(&catalog(), &bridge).await.unwrap();
        assert_eq!(analysis_lines(&analysis), vec!["Reorder gin.", "! Gin low", "> Buy 6 gin"]);
    }
}
