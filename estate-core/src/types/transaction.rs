//! Financial transaction types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Payment,
    Refund,
    Commission,
    Maintenance,
    Insurance,
    Tax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Cancelled,
}

/// Persisted money movement tied to a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub contract_id: RecordId,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub transaction_date: DateTime<Utc>,
    pub description: Option<String>,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transaction fields supplied on create and on full update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub contract_id: RecordId,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub transaction_date: DateTime<Utc>,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TransactionStatus,
}
