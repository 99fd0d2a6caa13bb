//! Repositories
//!
//! One in-memory table per record type, bundled behind [`Database`].

use estate_core::{
    BiometricRecord, Client, Contract, Property, SignatureRecord, TimestampRecord, Transaction,
};

use crate::store::MemoryTable;

pub type SignatureRepo = MemoryTable<SignatureRecord>;
pub type TimestampRepo = MemoryTable<TimestampRecord>;
pub type BiometricRepo = MemoryTable<BiometricRecord>;
pub type PropertyRepo = MemoryTable<Property>;
pub type ClientRepo = MemoryTable<Client>;
pub type ContractRepo = MemoryTable<Contract>;
pub type TransactionRepo = MemoryTable<Transaction>;

/// Database - main entry point for storage operations
#[derive(Debug, Default)]
pub struct Database {
    pub signatures: SignatureRepo,
    pub timestamps: TimestampRepo,
    pub biometrics: BiometricRepo,
    pub properties: PropertyRepo,
    pub clients: ClientRepo,
    pub contracts: ContractRepo,
    pub transactions: TransactionRepo,
}

impl Database {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }
}
