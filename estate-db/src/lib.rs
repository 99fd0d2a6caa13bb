//! Estate Database Layer
//!
//! In-memory storage and the services built on it.
//!
//! # Layout
//!
//! - [`store`] - the `Store` contract and `MemoryTable`, an id-keyed table
//!   with a unique index checked under the insert's write lock
//! - [`entities`] - table names and unique keys per record type
//! - [`repos`] - one table per record type, bundled as `Database`
//! - [`services`] - signature, timestamp, biometric and back-office services
//! - [`seed`] - sample data for demos
//!
//! # Usage
//!
//! ```ignore
//! use estate_db::{Database, SignatureService};
//! use std::sync::Arc;
//!
//! async fn example() {
//!     let db = Arc::new(Database::new());
//!     let signatures = SignatureService::new(db.clone());
//!     let mine = signatures.list_by_signer(7).await.unwrap();
//! }
//! ```

pub mod entities;
pub mod error;
pub mod repos;
pub mod seed;
pub mod services;
pub mod store;

pub use error::*;
pub use repos::*;
pub use seed::{seed_sample_data, SeedSummary};
pub use services::{
    BiometricService, ClientService, ContractService, PropertyService, SignatureService,
    TimestampService, TransactionService,
};
pub use store::{Entity, MemoryTable, Store};
