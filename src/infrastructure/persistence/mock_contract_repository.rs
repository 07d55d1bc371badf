use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::application::ports::{ContractRepository, RepositoryError};
use crate::domain::{ContractRecord, ContractRecordId};

/// In-memory repository. `failing()` makes every insert and health check fail.
#[derive(Default)]
pub struct MockContractRepository {
    records: Mutex<Vec<ContractRecord>>,
    failing: AtomicBool,
}

impl MockContractRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failing: AtomicBool::new(true),
        }
    }

    pub fn records(&self) -> Vec<ContractRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ContractRepository for MockContractRepository {
    async fn insert_contract(
        &self,
        record: &ContractRecord,
    ) -> Result<ContractRecordId, RepositoryError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(RepositoryError::ConnectionFailed(
                "mock repository unavailable".to_string(),
            ));
        }

        self.records
            .lock()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
            .push(record.clone());

        Ok(record.id)
    }

    async fn health_check(&self) -> bool {
        !self.failing.load(Ordering::Relaxed)
    }
}
