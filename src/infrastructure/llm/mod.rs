mod llm_client_factory;
mod mock_llm_client;
mod openai_client;
mod retrying_llm_client;

pub use llm_client_factory::{LlmClientFactory, LlmClientFactoryError, retry_policy};
pub use mock_llm_client::{CANNED_ANALYSIS, MockLlmClient};
pub use openai_client::OpenAiClient;
pub use retrying_llm_client::RetryingLlmClient;
