//! Estate API Server
//!
//! REST surface over the estate services. Everything except `/health`
//! lives under `/api`.
//!
//! ## Endpoints
//!
//! ### Document Signatures
//! - POST /signatures - Sign a document
//! - GET /signatures/:id - Get signature
//! - POST /signatures/:id/verify - Verify against document content
//! - POST /signatures/:id/revoke - Revoke
//! - GET /signatures/signer/:signer_id - Signatures by signer
//! - GET /signatures/contract/:contract_id - Signatures on a contract
//!
//! ### Digital Timestamps
//! - POST /timestamps - Issue timestamp
//! - GET /timestamps - List timestamps
//! - GET /timestamps/:id - Get timestamp
//! - POST /timestamps/:id/verify - Check the timestamp is active
//! - DELETE /timestamps/:id - Remove timestamp
//! - GET /timestamps/document/:document_id
//! - GET /timestamps/type/:type
//! - GET /timestamps/authority/:authority
//!
//! ### Biometric Enrollment
//! - POST /biometric/register - Enroll (quality scored server-side)
//! - POST /biometric/authenticate - Exact match against ACTIVE enrollments
//! - POST /biometric/evaluate-quality - Score a payload
//! - GET /biometric/user/:user_id - Enrollments for a user
//! - GET /biometric/:id - Get enrollment
//! - POST /biometric/:id/deactivate - Mark INACTIVE
//! - DELETE /biometric/:id - Mark DELETED
//!
//! ### Back Office
//! - /properties, /clients, /contracts, /transactions - list, get, create,
//!   update (PUT), delete, plus type/status/search filters
//!
//! ### Health
//! - GET /health

pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use routes::*;
pub use server::*;
pub use state::*;
