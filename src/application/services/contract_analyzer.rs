use std::borrow::Cow;
use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::ContractAnalysis;

use super::response_parser::{ResponseParseError, parse_json_object};
use super::schema_validator::{SchemaViolations, validate_contract_analysis};

pub const SYSTEM_PROMPT: &str = "You are a helpful legal contract analyzer.";
pub const TRUNCATION_MARKER: &str = "...";

const INSTRUCTIONS: &str = "You are a legal contract analyzer. Extract the following fields and \
return a JSON object with keys: contract_type, parties (list), key_dates (list), key_terms \
(list), risk_level, summary. Be concise.";

pub struct ContractAnalyzer {
    llm_client: Arc<dyn LlmClient>,
    max_contract_chars: usize,
}

impl ContractAnalyzer {
    pub fn new(llm_client: Arc<dyn LlmClient>, max_contract_chars: usize) -> Self {
        Self {
            llm_client,
            max_contract_chars,
        }
    }

    #[tracing::instrument(skip_all, fields(text_length = contract_text.len()))]
    pub async fn analyze(&self, contract_text: &str) -> Result<ContractAnalysis, AnalysisError> {
        let contract_text = truncate_contract_text(contract_text, self.max_contract_chars);
        let prompt = build_user_prompt(&contract_text);

        let reply = self
            .llm_client
            .complete(SYSTEM_PROMPT, &prompt)
            .await
            .map_err(AnalysisError::Upstream)?;

        let object = parse_json_object(&reply).map_err(|e| {
            tracing::error!(error = %e, preview = e.preview(), "No usable JSON in model reply");
            AnalysisError::UnparseableReply(e)
        })?;

        let analysis = validate_contract_analysis(&object).map_err(|e| {
            tracing::error!(violations = ?e.violations(), "Contract analysis validation failed");
            AnalysisError::SchemaMismatch(e)
        })?;

        tracing::info!(
            contract_type = %analysis.contract_type,
            risk_level = %analysis.risk_level,
            "Contract analysis completed"
        );

        Ok(analysis)
    }
}

/// Cuts text longer than `max_chars` characters down to exactly `max_chars`
/// and appends [`TRUNCATION_MARKER`].
pub fn truncate_contract_text(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => {
            tracing::warn!(
                original_chars = text.chars().count(),
                truncated_chars = max_chars,
                "Contract text truncated"
            );
            Cow::Owned(format!("{}{}", &text[..byte_index], TRUNCATION_MARKER))
        }
        None => Cow::Borrowed(text),
    }
}

pub fn build_user_prompt(contract_text: &str) -> String {
    format!("{INSTRUCTIONS}\n\nCONTRACT:\n{contract_text}")
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("model call failed: {0}")]
    Upstream(#[source] LlmClientError),
    #[error(transparent)]
    UnparseableReply(ResponseParseError),
    #[error(transparent)]
    SchemaMismatch(SchemaViolations),
}
