mod analyze;
mod error_response;
mod health;
mod root;

pub use analyze::{AnalyzeResponse, analyze_handler};
pub use error_response::{ApiError, ErrorDetail, ErrorResponse, human_size};
pub use health::{HealthChecks, HealthResponse, health_handler};
pub use root::{RootResponse, root_handler};
