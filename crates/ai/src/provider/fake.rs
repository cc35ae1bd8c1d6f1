//! Fake LLM provider for tests and offline demos.
//!
//! Responses are matched by checking whether the prompt contains a registered
//! substring (case-insensitive, first registration wins).

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{LlmError, LlmProvider};
use async_trait::async_trait;

#[derive(Debug)]
pub struct FakeProvider {
    /// (prompt substring, response) in registration order.
    responses: RwLock<Vec<(String, String)>>,
    default_response: Option<String>,
    calls: AtomicUsize,
}

impl Default for FakeProvider {
    /// Answers `{}` to everything: a well-formed but empty suggestion.
    fn default() -> Self {
        Self::new().with_default_response("{}")
    }
}

impl FakeProvider {
    /// A provider with no responses: every prompt fails.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(Vec::new()),
            default_response: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    pub fn add_response(&self, prompt_contains: &str, response: &str) {
        let mut responses = match self.responses.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        responses.push((prompt_contains.to_lowercase(), response.to_string()));
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of prompts received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let responses = self
            .responses
            .read()
            .map_err(|_| LlmError::RequestFailed("FakeProvider: lock poisoned".to_string()))?;

        let prompt_lower = prompt.to_lowercase();
        if let Some((_, response)) = responses.iter().find(|(p, _)| prompt_lower.contains(p)) {
            return Ok(response.clone());
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: no response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
