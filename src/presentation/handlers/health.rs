use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub api: &'static str,
    pub database: &'static str,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.pipeline.repository() {
        None => "not_configured",
        Some(repository) => {
            if repository.health_check().await {
                "healthy"
            } else {
                "unhealthy"
            }
        }
    };

    let checks = HealthChecks {
        api: "healthy",
        database,
    };
    let status = if checks.database == "unhealthy" {
        "unhealthy"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
        checks,
    })
}
