mod analysis_pipeline;
mod contract_analyzer;
mod response_parser;
mod schema_validator;
mod text_extractor;

pub use analysis_pipeline::{AnalysisPipeline, PipelineError, UploadViolation};
pub use contract_analyzer::{
    AnalysisError, ContractAnalyzer, SYSTEM_PROMPT, TRUNCATION_MARKER, build_user_prompt,
    truncate_contract_text,
};
pub use response_parser::{ResponseParseError, parse_json_object};
pub use schema_validator::{
    FieldViolation, SchemaViolations, ViolationKind, validate_contract_analysis,
};
pub use text_extractor::{ExtractionError, TextExtractor};
