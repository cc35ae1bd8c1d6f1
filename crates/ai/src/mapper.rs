//! Map typed suggestions onto domain records.
//!
//! Matching is accent/case-insensitive (see [`normalize_name`]). Catalog
//! lookups bind the first hit in catalog order; anything that does not match
//! leaves the existing value alone, except ingredients, which fall back to
//! free text.

use barkeep_core::{GlasswareId, StockItemId};
use barkeep_inventory::StockCatalog;
use barkeep_recipes::{IngredientUnit, Recipe, RecipeIngredient, Technique};
use barkeep_sheets::ProductSheet;

use crate::normalize::normalize_name;
use crate::suggestion::{CocktailSuggestion, ProductSheetSuggestion, SuggestedIngredient};

/// First catalog item whose folded name contains the folded suggestion.
pub fn match_stock_item(name: &str, catalog: &StockCatalog) -> Option<StockItemId> {
    let needle = normalize_name(name);
    if needle.is_empty() {
        return None;
    }
    catalog
        .items
        .iter()
        .find(|item| normalize_name(&item.name).contains(&needle))
        .map(|item| item.id)
}

/// First glass whose folded name contains the folded suggestion.
pub fn match_glassware(name: &str, catalog: &StockCatalog) -> Option<GlasswareId> {
    let needle = normalize_name(name);
    if needle.is_empty() {
        return None;
    }
    catalog
        .glassware
        .iter()
        .find(|glass| normalize_name(&glass.name).contains(&needle))
        .map(|glass| glass.id)
}

/// Technique whose label or alias equals the folded suggestion.
pub fn match_technique(raw: &str) -> Option<Technique> {
    let wanted = normalize_name(raw);
    Technique::ALL.into_iter().find(|technique| {
        normalize_name(technique.label()) == wanted
            || technique.aliases().iter().any(|alias| normalize_name(alias) == wanted)
    })
}

/// Turn suggested ingredients into recipe lines, preserving order.
pub fn map_ingredients(suggested: &[SuggestedIngredient], catalog: &StockCatalog) -> Vec<RecipeIngredient> {
    suggested
        .iter()
        .map(|s| {
            let quantity = s.quantity.unwrap_or(0.0);
            let unit = s.unit.unwrap_or(IngredientUnit::Cl);
            match match_stock_item(&s.name, catalog) {
                Some(item_id) => RecipeIngredient::stock(item_id, quantity, unit),
                None => RecipeIngredient::free(s.name.clone(), quantity, unit),
            }
        })
        .collect()
}

fn overwrite(target: &mut String, value: &Option<String>) -> bool {
    match value {
        Some(v) if !v.is_empty() => {
            *target = v.clone();
            true
        }
        _ => false,
    }
}

/// Apply a cocktail suggestion to a recipe form; returns the updated fields.
pub fn apply_cocktail_suggestion(
    recipe: &mut Recipe,
    suggestion: &CocktailSuggestion,
    catalog: &StockCatalog,
) -> Vec<&'static str> {
    let mut updated = Vec::new();

    if overwrite(&mut recipe.description, &suggestion.description) {
        updated.push("description");
    }
    if overwrite(&mut recipe.history, &suggestion.history) {
        updated.push("history");
    }
    if overwrite(&mut recipe.decoration, &suggestion.decoration) {
        updated.push("decoration");
    }

    match suggestion.technique.as_deref().map(|t| (t, match_technique(t))) {
        Some((_, Some(technique))) => {
            recipe.technique = Some(technique);
            updated.push("technique");
        }
        Some((raw, None)) => tracing::debug!(technique = raw, "unrecognized technique suggestion ignored"),
        None => {}
    }

    if let Some(glass) = suggestion
        .suggested_glassware
        .as_deref()
        .and_then(|g| match_glassware(g, catalog))
    {
        recipe.glassware_id = Some(glass);
        updated.push("glassware");
    }

    if !suggestion.ingredients.is_empty() {
        recipe.ingredients = map_ingredients(&suggestion.ingredients, catalog);
        updated.push("ingredients");
    }

    updated
}

/// Apply a product sheet suggestion to a sheet form; returns the updated fields.
pub fn apply_product_sheet_suggestion(
    sheet: &mut ProductSheet,
    suggestion: &ProductSheetSuggestion,
) -> Vec<&'static str> {
    let fields: [(&'static str, &mut String, &Option<String>); 8] = [
        ("description", &mut sheet.description, &suggestion.description),
        ("region", &mut sheet.region, &suggestion.region),
        ("country", &mut sheet.country, &suggestion.country),
        ("eye", &mut sheet.tasting_notes.eye, &suggestion.eye),
        ("nose", &mut sheet.tasting_notes.nose, &suggestion.nose),
        ("mouth", &mut sheet.tasting_notes.mouth, &suggestion.mouth),
        ("foodPairing", &mut sheet.food_pairing, &suggestion.pairing),
        ("servingTemp", &mut sheet.serving_temp, &suggestion.temp),
    ];

    fields
        .into_iter()
        .filter_map(|(name, target, value)| overwrite(target, value).then_some(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use barkeep_inventory::{Glassware, StockItem};

    fn bar_catalog() -> StockCatalog {
        StockCatalog::new(
            vec![
                StockItem::new("Tequila Blanco"),
                StockItem::new("Cointreau"),
                StockItem::new("Cointreau Noir"),
            ],
            vec![],
        )
        .with_glassware(vec![Glassware::new("Coupe"), Glassware::new("Verre Old Fashioned")])
    }

    #[test]
    fn ingredient_matching_ignores_accents_and_case() {
        let catalog = bar_catalog();
        let cointreau = catalog.items[1].id;

        assert_eq!(match_stock_item("cointreau", &catalog), Some(cointreau));
        assert_eq!(match_stock_item("côintreau", &catalog), Some(cointreau));
        assert_eq!(match_stock_item("tequila", &catalog), Some(catalog.items[0].id));
        assert_eq!(match_stock_item("Mezcal", &catalog), None);
        assert_eq!(match_stock_item("  ", &catalog), None);
    }

    #[test]
    fn map_ingredients_binds_or_falls_back_to_free_text() {
        let catalog = bar_catalog();
        let suggested = vec![
            SuggestedIngredient {
                name: "Tequila".to_string(),
                quantity: Some(5.0),
                unit: Some(IngredientUnit::Cl),
            },
            SuggestedIngredient {
                name: "Jus de citron vert".to_string(),
                quantity: Some(2.0),
                unit: None,
            },
            SuggestedIngredient {
                name: "Cointreau".to_string(),
                quantity: None,
                unit: Some(IngredientUnit::Ml),
            },
        ];

        let lines = map_ingredients(&suggested, &catalog);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].item_id(), Some(catalog.items[0].id));
        assert_eq!(lines[1], RecipeIngredient::free("Jus de citron vert", 2.0, IngredientUnit::Cl));
        assert_eq!(lines[2].item_id(), Some(catalog.items[1].id));
        assert_eq!(lines[2].quantity, 0.0);
        assert_eq!(lines[2].unit, IngredientUnit::Ml);
    }

    #[test]
    fn technique_matching_uses_labels_and_aliases() {
        assert_eq!(match_technique("shaker"), Some(Technique::Shaker));
        assert_eq!(match_technique("verre a melange"), Some(Technique::MixingGlass));
        assert_eq!(match_technique("Stirred"), Some(Technique::MixingGlass));
        assert_eq!(match_technique("Shake vigorously"), None);
    }

    #[test]
    fn unknown_technique_keeps_existing_value() {
        let catalog = bar_catalog();
        let mut recipe = Recipe::new(None);
        recipe.technique = Some(Technique::Built);

        let suggestion = CocktailSuggestion {
            technique: Some("Rolling".to_string()),
            ..CocktailSuggestion::default()
        };
        let updated = apply_cocktail_suggestion(&mut recipe, &suggestion, &catalog);

        assert!(updated.is_empty());
        assert_eq!(recipe.technique, Some(Technique::Built));
    }

    #[test]
    fn cocktail_suggestion_fills_recipe_form() {
        let catalog = bar_catalog();
        let mut recipe = Recipe::new(None);
        recipe.name = "Margarita".to_string();
        recipe.history = "Kept".to_string();

        let suggestion = CocktailSuggestion {
            description: Some("Tart and bright.".to_string()),
            history: None,
            technique: Some("Shaken".to_string()),
            decoration: Some("Salt rim".to_string()),
            suggested_glassware: Some("coupe".to_string()),
            ingredients: vec![SuggestedIngredient {
                name: "Cointreau".to_string(),
                quantity: Some(2.0),
                unit: Some(IngredientUnit::Cl),
            }],
        };
        let updated = apply_cocktail_suggestion(&mut recipe, &suggestion, &catalog);

        assert_eq!(updated, vec!["description", "decoration", "technique", "glassware", "ingredients"]);
        assert_eq!(recipe.history, "Kept");
        assert_eq!(recipe.technique, Some(Technique::Shaker));
        assert_eq!(recipe.glassware_id, Some(catalog.glassware[0].id));
        assert_eq!(recipe.ingredients[0].item_id(), Some(catalog.items[1].id));
        assert_eq!(recipe.name, "Margarita");
    }

    #[test]
    fn product_sheet_suggestion_fills_only_present_fields() {
        let mut sheet = ProductSheet::new();
        sheet.country = "Italy".to_string();

        let suggestion = ProductSheetSuggestion {
            region: Some("Piedmont".to_string()),
            nose: Some("Rose, tar".to_string()),
            temp: Some("16-18°C".to_string()),
            ..ProductSheetSuggestion::default()
        };
        let updated = apply_product_sheet_suggestion(&mut sheet, &suggestion);

        assert_eq!(updated, vec!["region", "nose", "servingTemp"]);
        assert_eq!(sheet.country, "Italy");
        assert_eq!(sheet.tasting_notes.nose, "Rose, tar");
        assert_eq!(sheet.serving_temp, "16-18°C");
    }
}
