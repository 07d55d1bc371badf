use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Serialize;

use crate::domain::{ContractAnalysis, DocumentMetadata, UploadedDocument};
use crate::infrastructure::observability::RequestId;
use crate::presentation::state::AppState;

use super::error_response::ApiError;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub request_id: String,
    pub filename: String,
    pub analysis: ContractAnalysis,
    pub metadata: DocumentMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub processing_time_ms: u64,
}

#[tracing::instrument(skip_all, fields(request_id = %request_id.0))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    multipart: Multipart,
) -> Response {
    let upload = match read_upload(multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!("Analyze request with no file");
            return ApiError::validation(&request_id.0, "No file uploaded", Some(FILE_FIELD))
                .into_response();
        }
        Err(message) => {
            tracing::warn!(error = %message, "Failed to read multipart upload");
            return ApiError::validation(&request_id.0, message, Some(FILE_FIELD)).into_response();
        }
    };

    match state.pipeline.run(&request_id.0, upload).await {
        Ok(result) => Json(AnalyzeResponse {
            request_id: result.request_id,
            filename: result.filename,
            analysis: result.analysis,
            metadata: result.metadata,
            record_id: result.record_id.map(|id| id.as_uuid().to_string()),
            processing_time_ms: result.processing_time_ms,
        })
        .into_response(),
        Err(e) => ApiError::from_pipeline(&request_id.0, &e, state.settings.environment)
            .into_response(),
    }
}

/// Returns the first multipart field named `file`, ignoring any others.
async fn read_upload(mut multipart: Multipart) -> Result<Option<UploadedDocument>, String> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => return Err(format!("Failed to read multipart: {}", e.body_text())),
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| format!("Failed to read file: {}", e.body_text()))?;

        tracing::debug!(
            filename = filename.as_deref().unwrap_or(""),
            bytes = bytes.len(),
            "File data received"
        );

        return Ok(Some(UploadedDocument::new(
            bytes.to_vec(),
            filename,
            content_type,
        )));
    }
}
