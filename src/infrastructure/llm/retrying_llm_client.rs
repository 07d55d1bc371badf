use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::infrastructure::retry_policy::{Exhausted, RetryPolicy};

/// Retries every failure of the wrapped client according to a [`RetryPolicy`].
pub struct RetryingLlmClient {
    inner: Arc<dyn LlmClient>,
    policy: RetryPolicy,
}

impl RetryingLlmClient {
    pub fn new(inner: Arc<dyn LlmClient>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl LlmClient for RetryingLlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        self.policy
            .execute("llm_complete", || {
                self.inner.complete(system_prompt, user_prompt)
            })
            .await
            .map_err(|Exhausted { attempts, last }| {
                tracing::error!(attempts, error = %last, "Model call failed after retries");
                LlmClientError::RetriesExhausted {
                    attempts,
                    last: Box::new(last),
                }
            })
    }
}
