//! `barkeep-ai`
//!
//! **Responsibility:** optional AI content generation.
//!
//! This crate is never on the critical path of a save:
//! - Provider failures surface as [`LlmError`] internally and are logged.
//! - The [`ContentBridge`] boundary turns every failure into "no suggestion".
//! - Responses are untrusted input, coerced field by field into typed
//!   suggestions before the mapper touches any domain record.

pub mod bridge;
pub mod mapper;
pub mod normalize;
pub mod prompts;
pub mod provider;
pub mod suggestion;

pub use bridge::{ContentBridge, LlmContentBridge, extract_json};
pub use mapper::{
    apply_cocktail_suggestion, apply_product_sheet_suggestion, map_ingredients, match_glassware,
    match_stock_item, match_technique,
};
pub use normalize::normalize_name;
pub use provider::{
    AiSettings, ClaudeProvider, DisabledProvider, FakeProvider, LlmError, LlmProvider, ProviderKind,
    create_provider,
};
pub use suggestion::{CocktailSuggestion, ProductSheetSuggestion, StockAnalysis, SuggestedIngredient};
