//! Core type definitions for the estate back-office
//!
//! All types follow these naming conventions:
//! - snake_case for field names
//! - `id` is the store-assigned primary key
//! - *_id suffix for references to other records
//! - *_hash suffix for base64 SHA-256 digests
//! - enums travel as SCREAMING_SNAKE_CASE strings

mod biometric;
mod client;
mod contract;
mod property;
mod signature;
mod timestamp;
mod transaction;

pub use biometric::*;
pub use client::*;
pub use contract::*;
pub use property::*;
pub use signature::*;
pub use timestamp::*;
pub use transaction::*;

/// Store-assigned record identifier
pub type RecordId = u64;
