use async_trait::async_trait;

use crate::domain::{ContractRecord, ContractRecordId};

use super::RepositoryError;

#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn insert_contract(
        &self,
        record: &ContractRecord,
    ) -> Result<ContractRecordId, RepositoryError>;

    async fn health_check(&self) -> bool;
}
