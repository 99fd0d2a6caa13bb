//! Service Implementations
//!
//! Document-integrity services (signatures, timestamps, biometric
//! enrollment) and the back-office CRUD services, all over [`Database`].
//!
//! [`Database`]: crate::repos::Database

pub mod biometric_service;
pub mod client_service;
pub mod contract_service;
pub mod property_service;
pub mod signature_service;
pub mod timestamp_service;
pub mod transaction_service;

pub use biometric_service::{evaluate_quality, quality_level, BiometricService};
pub use client_service::ClientService;
pub use contract_service::ContractService;
pub use property_service::PropertyService;
pub use signature_service::SignatureService;
pub use timestamp_service::TimestampService;
pub use transaction_service::TransactionService;
