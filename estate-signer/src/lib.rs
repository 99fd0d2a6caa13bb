//! Estate Signer
//!
//! Hash/sign utility for the document-integrity services.
//!
//! - `digest`: SHA-256 fingerprints rendered as base64
//! - `crypto`: Ed25519 signing and verification with caller-supplied keys
//!
//! Keys are passed in per call; nothing here holds key state between calls.

pub mod crypto;
pub mod digest;
pub mod error;

pub use crypto::*;
pub use digest::*;
pub use error::*;
