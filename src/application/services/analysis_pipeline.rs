use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tempfile::NamedTempFile;

use crate::application::ports::ContractRepository;
use crate::domain::{
    AnalysisRequestResult, ContractAnalysis, ContractRecord, ContractRecordId, DocumentMetadata,
    UploadedDocument,
};

use super::contract_analyzer::{AnalysisError, ContractAnalyzer};
use super::text_extractor::{ExtractionError, TextExtractor};

/// Runs one uploaded document through extraction, analysis and optional
/// persistence.
pub struct AnalysisPipeline {
    extractor: Arc<TextExtractor>,
    analyzer: Arc<ContractAnalyzer>,
    repository: Option<Arc<dyn ContractRepository>>,
    max_upload_bytes: u64,
}

impl AnalysisPipeline {
    pub fn new(
        extractor: Arc<TextExtractor>,
        analyzer: Arc<ContractAnalyzer>,
        repository: Option<Arc<dyn ContractRepository>>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            extractor,
            analyzer,
            repository,
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    pub fn repository(&self) -> Option<&Arc<dyn ContractRepository>> {
        self.repository.as_ref()
    }

    #[tracing::instrument(
        skip(self, upload),
        fields(filename = upload.filename.as_deref().unwrap_or(""))
    )]
    pub async fn run(
        &self,
        request_id: &str,
        upload: UploadedDocument,
    ) -> Result<AnalysisRequestResult, PipelineError> {
        let started = Instant::now();

        let filename = match upload.filename.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(PipelineError::InvalidUpload(UploadViolation::MissingFilename)),
        };

        let size = upload.size_bytes();
        if size > self.max_upload_bytes {
            return Err(PipelineError::InvalidUpload(UploadViolation::FileTooLarge {
                size,
                max: self.max_upload_bytes,
            }));
        }

        tracing::info!(
            size_bytes = size,
            content_type = upload.declared_content_type.as_deref().unwrap_or(""),
            "Processing file"
        );

        let temp_file = write_temp_file(&upload)?;
        let outcome = self.process(temp_file.path(), &filename).await;

        let temp_path = temp_file.path().to_path_buf();
        if let Err(e) = temp_file.close() {
            tracing::warn!(
                error = %e,
                path = %temp_path.display(),
                "Failed to delete temporary file"
            );
        }

        let (metadata, analysis, record_id) = outcome?;
        let processing_time_ms = started.elapsed().as_millis() as u64;

        tracing::info!(
            contract_type = %analysis.contract_type,
            processing_time_ms,
            persisted = record_id.is_some(),
            "Analysis completed"
        );

        Ok(AnalysisRequestResult {
            request_id: request_id.to_string(),
            filename: metadata.filename.clone(),
            analysis,
            metadata,
            record_id,
            processing_time_ms,
        })
    }

    async fn process(
        &self,
        path: &Path,
        filename: &str,
    ) -> Result<(DocumentMetadata, ContractAnalysis, Option<ContractRecordId>), PipelineError> {
        let extracted = self.extractor.extract(path, filename).await?;
        let analysis = self.analyzer.analyze(&extracted.text).await?;
        let record_id = self.persist(&extracted.metadata, &analysis).await;

        Ok((extracted.metadata, analysis, record_id))
    }

    async fn persist(
        &self,
        metadata: &DocumentMetadata,
        analysis: &ContractAnalysis,
    ) -> Option<ContractRecordId> {
        let repository = self.repository.as_ref()?;
        let record = ContractRecord::new(metadata.clone(), analysis.clone());

        match repository.insert_contract(&record).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to persist contract analysis");
                None
            }
        }
    }
}

fn write_temp_file(upload: &UploadedDocument) -> Result<NamedTempFile, PipelineError> {
    let suffix = upload.suffix();
    let mut temp_file = tempfile::Builder::new()
        .prefix("contract-")
        .suffix(&suffix)
        .tempfile()
        .map_err(|e| PipelineError::Internal(format!("failed to create temp file: {e}")))?;

    temp_file
        .write_all(&upload.bytes)
        .and_then(|_| temp_file.flush())
        .map_err(|e| PipelineError::Internal(format!("failed to write temp file: {e}")))?;

    Ok(temp_file)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadViolation {
    #[error("Filename is required")]
    MissingFilename,
    #[error("File size {size} exceeds maximum allowed size of {max} bytes")]
    FileTooLarge { size: u64, max: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid upload: {0}")]
    InvalidUpload(UploadViolation),
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("analysis: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("internal error: {0}")]
    Internal(String),
}
