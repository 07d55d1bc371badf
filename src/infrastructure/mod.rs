pub mod llm;
pub mod observability;
pub mod persistence;
pub mod retry_policy;
pub mod text_processing;
