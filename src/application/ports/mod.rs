mod contract_repository;
mod document_converter;
mod llm_client;
mod repository_error;

pub use contract_repository::ContractRepository;
pub use document_converter::{Conversion, ConversionError, DocumentConverter};
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
