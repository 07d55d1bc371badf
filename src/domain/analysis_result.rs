use super::{ContractAnalysis, ContractRecordId, DocumentMetadata};

/// Outcome of one analyze request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequestResult {
    pub request_id: String,
    pub filename: String,
    pub analysis: ContractAnalysis,
    pub metadata: DocumentMetadata,
    pub record_id: Option<ContractRecordId>,
    pub processing_time_ms: u64,
}
