//! API route handlers

pub mod biometric;
pub mod client;
pub mod contract;
pub mod health;
pub mod property;
pub mod signature;
pub mod timestamp;
pub mod transaction;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Signature endpoints
        .route("/signatures", post(signature::create_signature))
        .route("/signatures/:signature_id", get(signature::get_signature))
        .route("/signatures/:signature_id/verify", post(signature::verify_signature))
        .route("/signatures/:signature_id/revoke", post(signature::revoke_signature))
        .route("/signatures/signer/:signer_id", get(signature::list_by_signer))
        .route("/signatures/contract/:contract_id", get(signature::list_by_contract))
        // Timestamp endpoints
        .route(
            "/timestamps",
            get(timestamp::list_timestamps).post(timestamp::create_timestamp),
        )
        .route(
            "/timestamps/:timestamp_id",
            get(timestamp::get_timestamp).delete(timestamp::delete_timestamp),
        )
        .route("/timestamps/:timestamp_id/verify", post(timestamp::verify_timestamp))
        .route("/timestamps/document/:document_id", get(timestamp::list_by_document))
        .route("/timestamps/type/:document_type", get(timestamp::list_by_type))
        .route("/timestamps/authority/:authority", get(timestamp::list_by_authority))
        // Biometric endpoints
        .route("/biometric/register", post(biometric::register_biometric))
        .route("/biometric/authenticate", post(biometric::authenticate_biometric))
        .route("/biometric/evaluate-quality", post(biometric::evaluate_quality))
        .route("/biometric/user/:user_id", get(biometric::list_by_user))
        .route(
            "/biometric/:biometric_id",
            get(biometric::get_biometric).delete(biometric::delete_biometric),
        )
        .route("/biometric/:biometric_id/deactivate", post(biometric::deactivate_biometric))
        // Property endpoints
        .route(
            "/properties",
            get(property::list_properties).post(property::create_property),
        )
        .route(
            "/properties/:property_id",
            get(property::get_property)
                .put(property::update_property)
                .delete(property::delete_property),
        )
        .route("/properties/type/:property_type", get(property::list_by_type))
        .route("/properties/status/:status", get(property::list_by_status))
        .route("/properties/search", get(property::search_properties))
        .route("/properties/search/criteria", get(property::search_by_criteria))
        // Client endpoints
        .route("/clients", get(client::list_clients).post(client::create_client))
        .route(
            "/clients/:client_id",
            get(client::get_client)
                .put(client::update_client)
                .delete(client::delete_client),
        )
        .route("/clients/type/:client_type", get(client::list_by_type))
        .route("/clients/search", get(client::search_clients))
        .route("/clients/search/advanced", get(client::advanced_search))
        // Contract endpoints
        .route(
            "/contracts",
            get(contract::list_contracts).post(contract::create_contract),
        )
        .route(
            "/contracts/:contract_id",
            get(contract::get_contract)
                .put(contract::update_contract)
                .delete(contract::delete_contract),
        )
        .route("/contracts/type/:contract_type", get(contract::list_by_type))
        .route("/contracts/status/:status", get(contract::list_by_status))
        .route("/contracts/property/:property_id", get(contract::list_by_property))
        .route("/contracts/client/:client_id", get(contract::list_by_client))
        .route("/contracts/expiring", get(contract::list_expiring))
        // Transaction endpoints
        .route(
            "/transactions",
            get(transaction::list_transactions).post(transaction::create_transaction),
        )
        .route(
            "/transactions/:transaction_id",
            get(transaction::get_transaction)
                .put(transaction::update_transaction)
                .delete(transaction::delete_transaction),
        )
        .route("/transactions/contract/:contract_id", get(transaction::list_by_contract))
        .route("/transactions/type/:transaction_type", get(transaction::list_by_type))
        .route("/transactions/status/:status", get(transaction::list_by_status))
}
