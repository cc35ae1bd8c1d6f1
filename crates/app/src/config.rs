//! Process configuration read from the environment.

use barkeep_ai::provider::DEFAULT_MODEL;
use barkeep_ai::{AiSettings, ProviderKind};
use barkeep_recipes::{Margin, PricingConfig};

pub const MARGIN_VAR: &str = "BARKEEP_DEFAULT_MARGIN";
pub const PROVIDER_VAR: &str = "BARKEEP_AI_PROVIDER";
pub const MODEL_VAR: &str = "BARKEEP_AI_MODEL";
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Settings handed explicitly to the managers and the content bridge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub ai: AiSettings,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Invalid values are logged and replaced by
    /// their default; configuration never fails.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let margin = match value(MARGIN_VAR) {
            None => Margin::default(),
            Some(raw) => match parse_margin(&raw) {
                Ok(margin) => margin,
                Err(error) => {
                    tracing::warn!(var = MARGIN_VAR, value = %raw, %error, "invalid margin; using default");
                    Margin::default()
                }
            },
        };

        let provider = match value(PROVIDER_VAR) {
            None => ProviderKind::default(),
            Some(raw) => ProviderKind::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(var = PROVIDER_VAR, value = %raw, "unknown AI provider; AI disabled");
                ProviderKind::default()
            }),
        };

        Self {
            pricing: PricingConfig::new(margin),
            ai: AiSettings {
                provider,
                model: Some(value(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string())),
                api_key: value(API_KEY_VAR),
            },
        }
    }
}

/// Accepts `82`, `82.5` and the decimal-comma form `82,5`.
fn parse_margin(raw: &str) -> Result<Margin, String> {
    let percent = raw
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|e| e.to_string())?;
    Margin::new(percent).map_err(|e| e.to_string())
}
