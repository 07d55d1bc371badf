use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::{
    AnalysisError, ExtractionError, PipelineError, SchemaViolations, UploadViolation,
};
use crate::presentation::config::Environment;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub request_id: String,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetail>>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// An error already resolved to its HTTP status and body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn new(
        status: StatusCode,
        request_id: &str,
        error: &str,
        message: impl Into<String>,
        details: Option<Vec<ErrorDetail>>,
    ) -> Self {
        Self {
            status,
            body: ErrorResponse {
                request_id: request_id.to_string(),
                error: error.to_string(),
                message: message.into(),
                details,
                timestamp: Utc::now(),
            },
        }
    }

    pub fn validation(request_id: &str, message: impl Into<String>, field: Option<&str>) -> Self {
        let message = message.into();
        let details = field.map(|field| {
            vec![ErrorDetail {
                field: Some(field.to_string()),
                message: message.clone(),
                kind: Some("value_error".to_string()),
            }]
        });

        Self::new(
            StatusCode::BAD_REQUEST,
            request_id,
            "ValidationError",
            message,
            details,
        )
    }

    pub fn from_pipeline(request_id: &str, error: &PipelineError, environment: Environment) -> Self {
        match error {
            PipelineError::InvalidUpload(violation) => {
                tracing::warn!(error = %violation, "Upload rejected");
                Self::validation(request_id, upload_message(violation), Some("file"))
            }
            PipelineError::Extraction(e) => {
                tracing::error!(error = %e, "Document extraction failed");
                Self::from_extraction(request_id, e)
            }
            PipelineError::Analysis(e) => Self::from_analysis(request_id, e),
            PipelineError::Internal(reason) => {
                tracing::error!(error = %reason, "Unexpected error while analyzing contract");
                let message = if environment.exposes_error_details() {
                    reason.clone()
                } else {
                    "An internal error occurred".to_string()
                };
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    request_id,
                    "InternalServerError",
                    message,
                    None,
                )
            }
        }
    }

    fn from_extraction(request_id: &str, error: &ExtractionError) -> Self {
        match error {
            ExtractionError::Unavailable { .. } => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                request_id,
                "ProcessingUnavailable",
                "Document processing is not available for this file type",
                None,
            ),
            ExtractionError::NotFound(_) | ExtractionError::Failed { .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                request_id,
                "DocumentProcessingError",
                "Failed to process document",
                None,
            ),
        }
    }

    fn from_analysis(request_id: &str, error: &AnalysisError) -> Self {
        match error {
            AnalysisError::Upstream(e) => {
                tracing::error!(error = %e, "Model call failed");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    request_id,
                    "UpstreamError",
                    "Failed to analyze contract with the language model",
                    None,
                )
            }
            AnalysisError::UnparseableReply(e) => {
                tracing::error!(error = %e, "Model reply could not be parsed");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    request_id,
                    "UpstreamError",
                    e.to_string(),
                    Some(vec![ErrorDetail {
                        field: None,
                        message: e.preview().to_string(),
                        kind: Some("response_preview".to_string()),
                    }]),
                )
            }
            AnalysisError::SchemaMismatch(violations) => {
                tracing::warn!(error = %violations, "Model reply failed validation");
                Self::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    request_id,
                    "ValidationError",
                    "Contract analysis did not match the expected schema",
                    Some(schema_details(violations)),
                )
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn upload_message(violation: &UploadViolation) -> String {
    match violation {
        UploadViolation::MissingFilename => violation.to_string(),
        UploadViolation::FileTooLarge { max, .. } => format!(
            "File size exceeds maximum allowed size of {}",
            human_size(*max)
        ),
    }
}

const MIB: u64 = 1024 * 1024;

/// Whole mebibytes print as `NMB`, anything else as exact bytes.
pub fn human_size(bytes: u64) -> String {
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}

fn schema_details(violations: &SchemaViolations) -> Vec<ErrorDetail> {
    violations
        .violations()
        .iter()
        .map(|v| ErrorDetail {
            field: Some(v.field.clone()),
            message: v.message.clone(),
            kind: Some(v.kind.as_str().to_string()),
        })
        .collect()
}
