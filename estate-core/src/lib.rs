//! Estate Core
//!
//! Domain records and shared conventions for the estate back-office:
//! - Document-integrity records (signatures, timestamps, biometric enrollment)
//! - Back-office records (properties, clients, contracts, transactions)
//! - Service error taxonomy
//! - Validity periods and quality thresholds
//! - Logging conventions

pub mod constants;
pub mod error;
pub mod logging;
pub mod types;

pub use constants::*;
pub use error::*;
pub use types::*;
