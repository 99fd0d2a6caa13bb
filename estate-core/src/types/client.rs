//! Client types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    Buyer,
    Seller,
    Tenant,
    Landlord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

/// Persisted client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all clients
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub client_type: ClientType,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Client fields supplied on create and on full update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub client_type: ClientType,
    #[serde(default)]
    pub status: ClientStatus,
}

/// Optional filters for the advanced client search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientFilter {
    /// Case-insensitive substring of first or last name
    pub name: Option<String>,
    /// Case-insensitive substring of email
    pub email: Option<String>,
    pub client_type: Option<ClientType>,
    pub status: Option<ClientStatus>,
}

impl ClientFilter {
    pub fn matches(&self, client: &Client) -> bool {
        let name_ok = self.name.as_deref().map_or(true, |needle| {
            let needle = needle.to_lowercase();
            client.first_name.to_lowercase().contains(&needle)
                || client.last_name.to_lowercase().contains(&needle)
        });
        let email_ok = self.email.as_deref().map_or(true, |needle| {
            client.email.to_lowercase().contains(&needle.to_lowercase())
        });

        name_ok
            && email_ok
            && self.client_type.map_or(true, |t| client.client_type == t)
            && self.status.map_or(true, |s| client.status == s)
    }
}
