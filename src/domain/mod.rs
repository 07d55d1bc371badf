mod analysis_result;
mod contract_analysis;
mod contract_record;
mod document;

pub use analysis_result::AnalysisRequestResult;
pub use contract_analysis::ContractAnalysis;
pub use contract_record::{ContractRecord, ContractRecordId};
pub use document::{
    DocumentFormat, DocumentMetadata, ExtractedDocument, UploadedDocument, display_filename,
};
