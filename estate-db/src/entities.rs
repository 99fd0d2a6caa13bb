//! Entity bindings for the domain records
//!
//! Table names and unique keys for every record stored by the back-office.

use chrono::{DateTime, Utc};
use estate_core::{
    BiometricRecord, Client, Contract, Property, RecordId, SignatureRecord, TimestampRecord,
    Transaction,
};

use crate::store::Entity;

/// Unique key field names
pub mod keys {
    pub const SIGNATURE_HASH: &str = "signature_hash";
    pub const TIMESTAMP_HASH: &str = "timestamp_hash";
    pub const BIOMETRIC_HASH: &str = "biometric_hash";
    pub const CLIENT_EMAIL: &str = "email";
    pub const CONTRACT_NUMBER: &str = "contract_number";
}

macro_rules! record_entity {
    ($ty:ty, $table:literal) => {
        record_entity!($ty, $table, |_record| Vec::new());
    };
    ($ty:ty, $table:literal, |$record:ident| $keys:expr) => {
        impl Entity for $ty {
            const TABLE: &'static str = $table;

            fn id(&self) -> RecordId {
                self.id
            }

            fn set_id(&mut self, id: RecordId) {
                self.id = id;
            }

            fn touch(&mut self, at: DateTime<Utc>) {
                self.updated_at = at;
            }

            fn unique_keys(&self) -> Vec<(&'static str, String)> {
                let $record = self;
                $keys
            }
        }
    };
}

record_entity!(SignatureRecord, "digital_signatures", |r| vec![(
    keys::SIGNATURE_HASH,
    r.signature_hash.clone()
)]);

record_entity!(TimestampRecord, "digital_timestamps", |r| vec![(
    keys::TIMESTAMP_HASH,
    r.timestamp_hash.clone()
)]);

record_entity!(BiometricRecord, "biometric_data", |r| vec![(
    keys::BIOMETRIC_HASH,
    r.biometric_hash.clone()
)]);

record_entity!(Property, "properties");

record_entity!(Client, "clients", |r| vec![(keys::CLIENT_EMAIL, r.email.clone())]);

record_entity!(Contract, "contracts", |r| vec![(
    keys::CONTRACT_NUMBER,
    r.contract_number.clone()
)]);

record_entity!(Transaction, "transactions");
