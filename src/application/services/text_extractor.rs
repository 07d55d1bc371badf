use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ConversionError, DocumentConverter};
use crate::domain::{DocumentFormat, DocumentMetadata, ExtractedDocument, display_filename};

/// Routes a saved upload to the converter registered for its format and runs
/// the conversion on the blocking pool.
pub struct TextExtractor {
    converters: HashMap<DocumentFormat, Arc<dyn DocumentConverter>>,
    conversion_timeout: Duration,
}

impl TextExtractor {
    pub fn new(
        converters: Vec<(DocumentFormat, Arc<dyn DocumentConverter>)>,
        conversion_timeout: Duration,
    ) -> Self {
        Self {
            converters: converters.into_iter().collect(),
            conversion_timeout,
        }
    }

    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.converters.contains_key(&format)
    }

    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn extract(
        &self,
        path: &Path,
        filename: &str,
    ) -> Result<ExtractedDocument, ExtractionError> {
        let file_size = match tokio::fs::metadata(path).await {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExtractionError::NotFound(path.to_path_buf()));
            }
            Err(e) => {
                return Err(ExtractionError::Failed {
                    path: path.to_path_buf(),
                    source: ConversionError::Io(e),
                });
            }
        };

        // Unknown suffixes resolve to octet-stream, which never has a converter.
        let format = DocumentFormat::from_filename(filename);
        let converter = self
            .converters
            .get(&format)
            .cloned()
            .ok_or_else(|| ExtractionError::Unavailable {
                content_type: format.as_mime().to_string(),
            })?;

        tracing::info!(
            converter = converter.name(),
            size_bytes = file_size,
            "Processing document"
        );

        let owned_path = path.to_path_buf();
        let conversion = tokio::time::timeout(
            self.conversion_timeout,
            tokio::task::spawn_blocking(move || converter.convert(&owned_path)),
        )
        .await
        .map_err(|_| ConversionError::TimedOut(self.conversion_timeout.as_millis() as u64))
        .and_then(|joined| joined.map_err(|e| ConversionError::Aborted(e.to_string())))
        .and_then(|converted| converted)
        .map_err(|source| {
            tracing::error!(error = %source, "Document conversion failed");
            ExtractionError::Failed {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let metadata = DocumentMetadata {
            filename: display_filename(filename),
            pages: conversion.pages.unwrap_or(1).max(1),
            file_size,
            content_type: format.as_mime().to_string(),
        };

        tracing::info!(
            pages = metadata.pages,
            text_length = conversion.text.len(),
            "Document processed"
        );

        Ok(ExtractedDocument {
            text: conversion.text,
            metadata,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("document processing unavailable for {content_type}")]
    Unavailable { content_type: String },
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to process document {}: {source}", path.display())]
    Failed {
        path: PathBuf,
        #[source]
        source: ConversionError,
    },
}
