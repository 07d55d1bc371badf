use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};

pub const CANNED_ANALYSIS: &str = r#"{"contract_type": "Service Agreement", "parties": ["Provider", "Client"], "key_dates": [], "key_terms": ["Offline analysis placeholder"], "risk_level": "Low", "summary": "Canned analysis returned by the mock model provider."}"#;

/// Replays scripted outcomes in order, then falls back to a fixed reply.
pub struct MockLlmClient {
    script: Mutex<VecDeque<Result<String, LlmClientError>>>,
    fallback: String,
    prompts: Mutex<Vec<(String, String)>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::replying(CANNED_ANALYSIS)
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn scripted(
        outcomes: impl IntoIterator<Item = Result<String, LlmClientError>>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
            fallback: fallback.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }

    /// `(system, user)` prompt pairs in call order.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push((system_prompt.to_string(), user_prompt.to_string()));
        }

        let next = self.script.lock().ok().and_then(|mut script| script.pop_front());
        next.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}
