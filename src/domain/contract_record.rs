use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{ContractAnalysis, DocumentMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractRecordId(Uuid);

impl ContractRecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContractRecordId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractRecord {
    pub id: ContractRecordId,
    pub metadata: DocumentMetadata,
    pub analysis: ContractAnalysis,
    pub created_at: DateTime<Utc>,
}

impl ContractRecord {
    pub fn new(metadata: DocumentMetadata, analysis: ContractAnalysis) -> Self {
        Self {
            id: ContractRecordId::new(),
            metadata,
            analysis,
            created_at: Utc::now(),
        }
    }
}
