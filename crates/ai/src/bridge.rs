//! AI Content Bridge.
//!
//! The only boundary the managers talk to. Every method answers `Some` with a
//! usable, typed suggestion or `None`; provider errors, malformed JSON and
//! empty answers all collapse to `None` after being logged.

use async_trait::async_trait;
use serde_json::Value;

use barkeep_inventory::StockItem;

use crate::prompts;
use crate::provider::{LlmProvider, LlmError};
use crate::suggestion::{CocktailSuggestion, ProductSheetSuggestion, StockAnalysis};

/// Best-effort content generation.
#[async_trait]
pub trait ContentBridge: Send + Sync {
    async fn analyze_stock(&self, items: &[StockItem]) -> Option<StockAnalysis>;

    async fn generate_cocktail(
        &self,
        name: &str,
        available_ingredients: &[String],
    ) -> Option<CocktailSuggestion>;

    async fn generate_product_sheet(&self, name: &str, kind: &str) -> Option<ProductSheetSuggestion>;
}

/// Content bridge backed by an LLM provider.
#[derive(Debug)]
pub struct LlmContentBridge {
    provider: Box<dyn LlmProvider>,
}

impl LlmContentBridge {
    pub fn new(provider: impl LlmProvider + 'static) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    pub fn from_boxed(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    async fn request<T>(
        &self,
        kind: &'static str,
        prompt: String,
        coerce: fn(&Value) -> Option<T>,
    ) -> Option<T> {
        match self.try_request(&prompt).await {
            Ok(value) => {
                let suggestion = coerce(&value);
                if suggestion.is_none() {
                    tracing::warn!(kind, provider = self.provider.provider_name(), "AI response carried no usable fields");
                }
                suggestion
            }
            Err(e) => {
                tracing::warn!(kind, provider = self.provider.provider_name(), error = %e, "AI content request failed");
                None
            }
        }
    }

    async fn try_request(&self, prompt: &str) -> Result<Value, LlmError> {
        let text = self.provider.complete(prompt).await?;
        serde_json::from_str(extract_json(&text)).map_err(|e| LlmError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ContentBridge for LlmContentBridge {
    async fn analyze_stock(&self, items: &[StockItem]) -> Option<StockAnalysis> {
        self.request("stock_analysis", prompts::stock_analysis(items), StockAnalysis::from_json)
            .await
    }

    async fn generate_cocktail(
        &self,
        name: &str,
        available_ingredients: &[String],
    ) -> Option<CocktailSuggestion> {
        self.request(
            "cocktail",
            prompts::cocktail(name, available_ingredients),
            CocktailSuggestion::from_json,
        )
        .await
    }

    async fn generate_product_sheet(&self, name: &str, kind: &str) -> Option<ProductSheetSuggestion> {
        self.request(
            "product_sheet",
            prompts::product_sheet(name, kind),
            ProductSheetSuggestion::from_json,
        )
        .await
    }
}

/// Cut the JSON object out of a model answer.
///
/// Models often wrap JSON in markdown fences or add a sentence around it; the
/// outermost `{ ... }` span is taken when present.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim(),
    }
}
