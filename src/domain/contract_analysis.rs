use serde::{Deserialize, Serialize};

/// Structured extraction produced from free-form contract text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAnalysis {
    pub contract_type: String,
    pub parties: Vec<String>,
    pub key_dates: Vec<String>,
    pub key_terms: Vec<String>,
    /// Expected to be "Low", "Medium" or "High" but not enforced.
    pub risk_level: String,
    pub summary: String,
}

impl ContractAnalysis {
    pub const FIELDS: [&'static str; 6] = [
        "contract_type",
        "parties",
        "key_dates",
        "key_terms",
        "risk_level",
        "summary",
    ];
}
