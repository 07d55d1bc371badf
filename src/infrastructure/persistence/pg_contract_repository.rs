use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ContractRepository, RepositoryError};
use crate::domain::{ContractRecord, ContractRecordId};
use crate::infrastructure::retry_policy::RetryPolicy;

pub struct PgContractRepository {
    pool: PgPool,
    retry_policy: RetryPolicy,
}

impl PgContractRepository {
    pub fn new(pool: PgPool, retry_policy: RetryPolicy) -> Self {
        Self { pool, retry_policy }
    }

    async fn insert_once(&self, record: &ContractRecord) -> Result<Uuid, RepositoryError> {
        let analysis = &record.analysis;
        let metadata = &record.metadata;

        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO contracts (
                id, filename, content_type, file_size, pages,
                contract_type, parties, key_dates, key_terms, risk_level, summary,
                analysis, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(&metadata.filename)
        .bind(&metadata.content_type)
        .bind(i64::try_from(metadata.file_size).unwrap_or(i64::MAX))
        .bind(i32::try_from(metadata.pages).unwrap_or(i32::MAX))
        .bind(&analysis.contract_type)
        .bind(&analysis.parties)
        .bind(&analysis.key_dates)
        .bind(&analysis.key_terms)
        .bind(&analysis.risk_level)
        .bind(&analysis.summary)
        .bind(Json(analysis))
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::ConstraintViolation(e.to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::ConnectionFailed(e.to_string())
        }
        _ => RepositoryError::QueryFailed(e.to_string()),
    }
}

#[async_trait]
impl ContractRepository for PgContractRepository {
    #[instrument(skip(self, record), fields(record_id = %record.id.as_uuid()))]
    async fn insert_contract(
        &self,
        record: &ContractRecord,
    ) -> Result<ContractRecordId, RepositoryError> {
        let id = self
            .retry_policy
            .execute("insert_contract", || self.insert_once(record))
            .await
            .map_err(|exhausted| {
                tracing::error!(
                    attempts = exhausted.attempts,
                    error = %exhausted.last,
                    "Contract insert failed after retries"
                );
                exhausted.last
            })?;

        tracing::info!(filename = %record.metadata.filename, "Contract analysis stored");
        Ok(ContractRecordId::from_uuid(id))
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
