//! Prompt templates for the three content requests.
//!
//! Each prompt pins the exact JSON keys the coercion layer reads. The leading
//! phrase of each template ("stock analysis", "cocktail card", "product
//! sheet") is stable so fakes can route on it.

use barkeep_inventory::StockItem;
use barkeep_recipes::Technique;

const JSON_ONLY: &str = "Answer with a single JSON object and nothing else.";

pub fn stock_analysis(items: &[StockItem]) -> String {
    let mut lines = String::new();
    for item in items {
        lines.push_str(&format!(
            "- {} | quantity: {} | reorder threshold: {}\n",
            item.name, item.quantity, item.consigne
        ));
    }

    format!(
        "You are a bar manager assistant preparing a stock analysis.\n\
         Current stock:\n{lines}\n\
         Return keys: \"summary\" (string), \"alerts\" (array of strings), \
         \"recommendations\" (array of strings).\n{JSON_ONLY}"
    )
}

pub fn cocktail(name: &str, available_ingredients: &[String]) -> String {
    let techniques = Technique::ALL
        .iter()
        .map(Technique::label)
        .collect::<Vec<_>>()
        .join(", ");
    let available = if available_ingredients.is_empty() {
        "(none listed)".to_string()
    } else {
        available_ingredients.join(", ")
    };

    format!(
        "You are a head bartender writing a cocktail card for \"{name}\".\n\
         Prefer these available ingredients when they fit: {available}.\n\
         Return keys: \"description\", \"history\", \"technique\" (one of: {techniques}), \
         \"decoration\", \"suggestedGlassware\" (strings) and \"ingredients\" \
         (array of objects with \"name\" (string), \"quantity\" (number) and \
         \"unit\" (one of: cl, ml, dash, piece)).\n{JSON_ONLY}"
    )
}

pub fn product_sheet(name: &str, kind: &str) -> String {
    format!(
        "You are a sommelier writing a product sheet for \"{name}\" (type: {kind}).\n\
         Return keys: \"description\", \"region\", \"country\", \"eye\", \"nose\", \
         \"mouth\", \"pairing\", \"temp\" (all strings).\n{JSON_ONLY}"
    )
}
