use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::infrastructure::retry_policy::RetryPolicy;
use crate::presentation::config::LlmSettings;

use super::{MockLlmClient, OpenAiClient, RetryingLlmClient};

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("base_url required for {0} provider")]
    MissingBaseUrl(String),
    #[error("azure_endpoint required for azure provider")]
    MissingAzureEndpoint,
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("client initialization failed: {0}")]
    InitializationFailed(#[from] LlmClientError),
}

impl LlmClientFactory {
    /// Builds the configured provider client wrapped in retry handling.
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        let inner: Arc<dyn LlmClient> = match settings.provider.as_str() {
            "mock" => {
                tracing::warn!("Using mock model provider with a canned reply");
                Arc::new(MockLlmClient::new())
            }
            provider => {
                let endpoint = chat_completions_endpoint(settings)?;
                tracing::info!(
                    provider,
                    model = %settings.chat_model,
                    endpoint = %endpoint,
                    "Model client configured"
                );
                Arc::new(OpenAiClient::new(
                    provider,
                    endpoint,
                    settings.api_key.clone(),
                    settings.chat_model.clone(),
                    settings.max_tokens,
                    settings.temperature,
                    Duration::from_secs(settings.timeout_seconds),
                )?)
            }
        };

        Ok(Arc::new(RetryingLlmClient::new(
            inner,
            retry_policy(settings),
        )))
    }
}

pub fn retry_policy(settings: &LlmSettings) -> RetryPolicy {
    RetryPolicy::new(
        settings.max_attempts,
        Duration::from_millis(settings.initial_backoff_ms),
        Duration::from_millis(settings.max_backoff_ms),
    )
}

fn chat_completions_endpoint(settings: &LlmSettings) -> Result<String, LlmClientFactoryError> {
    match settings.provider.as_str() {
        "openai" => {
            let base_url = settings
                .base_url
                .as_deref()
                .unwrap_or("https://api.openai.com/v1")
                .trim_end_matches('/');
            Ok(format!("{base_url}/chat/completions"))
        }
        "lmstudio" => {
            let base_url = settings
                .base_url
                .as_deref()
                .ok_or_else(|| LlmClientFactoryError::MissingBaseUrl("lmstudio".to_string()))?
                .trim_end_matches('/');
            Ok(format!("{base_url}/chat/completions"))
        }
        "azure" => {
            let endpoint = settings
                .azure_endpoint
                .as_deref()
                .ok_or(LlmClientFactoryError::MissingAzureEndpoint)?
                .trim_end_matches('/');
            Ok(format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint, settings.chat_model, settings.azure_api_version
            ))
        }
        other => Err(LlmClientFactoryError::UnknownProvider(other.to_string())),
    }
}
