//! Typed AI suggestions and their coercion from untrusted JSON.
//!
//! Rules applied to every payload:
//! - the top level must be an object, otherwise there is no suggestion;
//! - text fields must be non-blank strings (trimmed);
//! - numbers may be JSON numbers or numeric strings ("4", "2,5");
//! - lists keep only their usable members;
//! - anything mistyped or unknown is dropped, never propagated.

use serde::Serialize;
use serde_json::{Map, Value};

use barkeep_recipes::IngredientUnit;

type Object = Map<String, Value>;

fn text(obj: &Object, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        _ => None,
    }
}

fn text_list(obj: &Object, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n >= 0.0).then_some(n)
}

/// Stock analysis of the current inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockAnalysis {
    pub summary: Option<String>,
    pub alerts: Vec<String>,
    pub recommendations: Vec<String>,
}

impl StockAnalysis {
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let analysis = Self {
            summary: text(obj, "summary"),
            alerts: text_list(obj, "alerts"),
            recommendations: text_list(obj, "recommendations"),
        };
        (!analysis.is_empty()).then_some(analysis)
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.alerts.is_empty() && self.recommendations.is_empty()
    }
}

/// One ingredient proposed for a cocktail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedIngredient {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<IngredientUnit>,
}

impl SuggestedIngredient {
    /// Accepts `{name, quantity, unit}` objects or bare name strings.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => {
                let name = name.trim();
                (!name.is_empty()).then(|| Self {
                    name: name.to_string(),
                    quantity: None,
                    unit: None,
                })
            }
            Value::Object(obj) => Some(Self {
                name: text(obj, "name")?,
                quantity: obj.get("quantity").and_then(number),
                unit: obj
                    .get("unit")
                    .and_then(Value::as_str)
                    .and_then(IngredientUnit::parse),
            }),
            _ => None,
        }
    }
}

/// Generated content for a cocktail recipe card.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CocktailSuggestion {
    pub description: Option<String>,
    pub history: Option<String>,
    /// Raw technique wording, matched against the vocabulary by the mapper.
    pub technique: Option<String>,
    pub decoration: Option<String>,
    /// Raw glass name, matched against the glassware catalog by the mapper.
    pub suggested_glassware: Option<String>,
    pub ingredients: Vec<SuggestedIngredient>,
}

impl CocktailSuggestion {
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let ingredients = match obj.get("ingredients") {
            Some(Value::Array(items)) => items.iter().filter_map(SuggestedIngredient::from_json).collect(),
            _ => Vec::new(),
        };
        let suggestion = Self {
            description: text(obj, "description"),
            history: text(obj, "history"),
            technique: text(obj, "technique"),
            decoration: text(obj, "decoration"),
            suggested_glassware: text(obj, "suggestedGlassware").or_else(|| text(obj, "glassware")),
            ingredients,
        };
        (!suggestion.is_empty()).then_some(suggestion)
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.history.is_none()
            && self.technique.is_none()
            && self.decoration.is_none()
            && self.suggested_glassware.is_none()
            && self.ingredients.is_empty()
    }
}

/// Generated content for a product knowledge sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductSheetSuggestion {
    pub description: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub eye: Option<String>,
    pub nose: Option<String>,
    pub mouth: Option<String>,
    pub pairing: Option<String>,
    pub temp: Option<String>,
}

impl ProductSheetSuggestion {
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let suggestion = Self {
            description: text(obj, "description"),
            region: text(obj, "region"),
            country: text(obj, "country"),
            eye: text(obj, "eye"),
            nose: text(obj, "nose"),
            mouth: text(obj, "mouth"),
            pairing: text(obj, "pairing"),
            temp: text(obj, "temp"),
        };
        (suggestion != Self::default()).then_some(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_objects_are_no_suggestion() {
        assert_eq!(StockAnalysis::from_json(&json!([1, 2])), None);
        assert_eq!(CocktailSuggestion::from_json(&json!("text")), None);
        assert_eq!(ProductSheetSuggestion::from_json(&Value::Null), None);
    }

    #[test]
    fn empty_objects_are_no_suggestion() {
        assert_eq!(StockAnalysis::from_json(&json!({})), None);
        assert_eq!(CocktailSuggestion::from_json(&json!({"description": "  "})), None);
        assert_eq!(ProductSheetSuggestion::from_json(&json!({"region": 12})), None);
    }

    #[test]
    fn stock_analysis_keeps_string_members_only() {
        let analysis = StockAnalysis::from_json(&json!({
            "summary": " Healthy cellar ",
            "alerts": ["Gin low", 3, null, ""],
            "recommendations": "not a list"
        }))
        .unwrap();

        assert_eq!(analysis.summary.as_deref(), Some("Healthy cellar"));
        assert_eq!(analysis.alerts, vec!["Gin low".to_string()]);
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn cocktail_ingredients_are_coerced() {
        let suggestion = CocktailSuggestion::from_json(&json!({
            "technique": "Shaker",
            "ingredients": [
                {"name": "Tequila", "quantity": 5, "unit": "cl"},
                {"name": "Cointreau", "quantity": "2,5", "unit": "CL"},
                {"name": "Salt", "quantity": "a pinch", "unit": "rim"},
                {"quantity": 2},
                "Lime wedge",
                42
            ]
        }))
        .unwrap();

        assert_eq!(suggestion.technique.as_deref(), Some("Shaker"));
        assert_eq!(suggestion.ingredients.len(), 4);
        assert_eq!(suggestion.ingredients[0].quantity, Some(5.0));
        assert_eq!(suggestion.ingredients[1].quantity, Some(2.5));
        assert_eq!(suggestion.ingredients[1].unit, Some(IngredientUnit::Cl));
        assert_eq!(suggestion.ingredients[2].quantity, None);
        assert_eq!(suggestion.ingredients[2].unit, None);
        assert_eq!(suggestion.ingredients[3].name, "Lime wedge");
    }

    #[test]
    fn negative_quantities_are_dropped() {
        let ingredient = SuggestedIngredient::from_json(&json!({"name": "Gin", "quantity": -4})).unwrap();
        assert_eq!(ingredient.quantity, None);
    }

    #[test]
    fn product_sheet_fields_are_optional() {
        let suggestion = ProductSheetSuggestion::from_json(&json!({
            "region": "Bordeaux",
            "country": "France",
            "temp": 16,
            "unexpected": {"nested": true}
        }))
        .unwrap();

        assert_eq!(suggestion.region.as_deref(), Some("Bordeaux"));
        assert_eq!(suggestion.country.as_deref(), Some("France"));
        assert_eq!(suggestion.temp, None);
        assert_eq!(suggestion.eye, None);
    }
}
