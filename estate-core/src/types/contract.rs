//! Contract types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Sale,
    Rental,
    Lease,
    Management,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    #[default]
    Draft,
    Active,
    Expired,
    Terminated,
    Pending,
}

/// Persisted contract between a client and a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: RecordId,
    /// Unique business reference, e.g. `CNT-2024-001`
    pub contract_number: String,
    pub property_id: RecordId,
    pub client_id: RecordId,
    pub contract_type: ContractType,
    pub status: ContractStatus,
    pub amount: Decimal,
    pub monthly_rent: Option<Decimal>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub terms: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Contract fields supplied on create and on full update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInput {
    pub contract_number: String,
    pub property_id: RecordId,
    pub client_id: RecordId,
    pub contract_type: ContractType,
    #[serde(default)]
    pub status: ContractStatus,
    pub amount: Decimal,
    pub monthly_rent: Option<Decimal>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub terms: Option<String>,
}

/// Contract joined with the display names of its property and client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractView {
    #[serde(flatten)]
    pub contract: Contract,
    pub property_name: Option<String>,
    pub client_name: Option<String>,
}
