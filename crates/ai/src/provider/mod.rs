//! LLM provider abstraction.
//!
//! Providers only turn a prompt into text. Prompting, JSON extraction and
//! coercion live in the bridge so every provider gets the same treatment.

mod claude;
mod fake;

pub use claude::ClaudeProvider;
pub use fake::FakeProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations are stateless from the caller's point of view and safe to
/// share between sessions.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt and get the model's text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Provider name (e.g. "claude", "fake", "disabled").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g. "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

/// Provider that never answers: the AI path is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledProvider;

#[async_trait]
impl LlmProvider for DisabledProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::NotConfigured(
            "AI content generation is disabled".to_string(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "disabled"
    }

    fn model_name(&self) -> &str {
        "none"
    }
}

/// Which provider backs the content bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    Claude,
    Fake,
    #[default]
    Disabled,
}

impl ProviderKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "claude" | "anthropic" => Some(Self::Claude),
            "fake" => Some(Self::Fake),
            "disabled" | "none" | "off" | "" => Some(Self::Disabled),
            _ => None,
        }
    }
}

/// Explicit provider settings (loaded by the host's configuration layer).
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AiSettings {
    pub provider: ProviderKind,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

impl fmt::Debug for AiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiSettings")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Build the configured provider.
pub fn create_provider(settings: &AiSettings) -> Result<Box<dyn LlmProvider>, LlmError> {
    match settings.provider {
        ProviderKind::Disabled => Ok(Box::new(DisabledProvider)),
        ProviderKind::Fake => Ok(Box::new(FakeProvider::default())),
        ProviderKind::Claude => {
            let api_key = settings
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| LlmError::NotConfigured("ANTHROPIC_API_KEY not set".to_string()))?;
            let model = settings
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string());
            Ok(Box::new(ClaudeProvider::new(api_key, model)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_parsing() {
        assert_eq!(ProviderKind::parse("Claude"), Some(ProviderKind::Claude));
        assert_eq!(ProviderKind::parse(" fake "), Some(ProviderKind::Fake));
        assert_eq!(ProviderKind::parse("off"), Some(ProviderKind::Disabled));
        assert_eq!(ProviderKind::parse("openai"), None);
    }

    #[test]
    fn claude_requires_an_api_key() {
        let settings = AiSettings {
            provider: ProviderKind::Claude,
            model: None,
            api_key: Some("  ".to_string()),
        };
        assert!(matches!(create_provider(&settings), Err(LlmError::NotConfigured(_))));
    }

    #[test]
    fn claude_defaults_the_model() {
        let settings = AiSettings {
            provider: ProviderKind::Claude,
            model: None,
            api_key: Some("sk-test".to_string()),
        };
        let provider = create_provider(&settings).unwrap();
        assert_eq!(provider.provider_name(), "claude");
        assert_eq!(provider.model_name(), DEFAULT_MODEL);
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let settings = AiSettings {
            provider: ProviderKind::Claude,
            model: None,
            api_key: Some("sk-secret".to_string()),
        };
        assert!(!format!("{settings:?}").contains("sk-secret"));
    }

    #[tokio::test]
    async fn disabled_provider_always_fails() {
        let result = DisabledProvider.complete("anything").await;
        assert!(matches!(result, Err(LlmError::NotConfigured(_))));
    }
}
