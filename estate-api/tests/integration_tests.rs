//! Integration tests for the estate API
//!
//! Every test drives the real router over a fresh in-memory database.

use axum::http::StatusCode;
use axum_test::TestServer;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use estate_api::{create_router, AppState};
use estate_db::Database;
use estate_signer::crypto::generate_keypair;
use serde_json::json;
use std::sync::Arc;

/// Create test server
fn create_test_server() -> TestServer {
    let state = AppState::new(Arc::new(Database::new()));
    let router = create_router(state);
    TestServer::new(router).unwrap()
}

fn payload(len: usize, fill: u8) -> String {
    BASE64.encode(vec![fill; len])
}

async fn create_property(server: &TestServer, name: &str) -> u64 {
    let response = server
        .post("/api/properties")
        .json(&json!({
            "name": name,
            "address": "1-1-1 Aoyama, Minato-ku",
            "description": "Corner unit",
            "property_type": "APARTMENT",
            "price": "85000000",
            "area": "65.5",
            "rooms": 2,
            "bathrooms": 1,
            "parking_spaces": 1,
            "year_built": 2015
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["id"].as_u64().unwrap()
}

async fn create_client(server: &TestServer, email: &str) -> u64 {
    let response = server
        .post("/api/clients")
        .json(&json!({
            "first_name": "Taro",
            "last_name": "Tanaka",
            "email": email,
            "phone": "090-1234-5678",
            "client_type": "BUYER"
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["id"].as_u64().unwrap()
}

fn contract_body(number: &str, property_id: u64, client_id: u64) -> serde_json::Value {
    json!({
        "contract_number": number,
        "property_id": property_id,
        "client_id": client_id,
        "contract_type": "RENTAL",
        "status": "ACTIVE",
        "amount": "150000",
        "monthly_rent": "150000",
        "start_date": "2024-01-01T00:00:00Z",
        "end_date": "2026-01-01T00:00:00Z",
        "terms": "Two months deposit"
    })
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

// ============ Signature Endpoint Tests ============

#[tokio::test]
async fn test_signature_sign_verify_revoke_flow() {
    let server = create_test_server();
    let (private_key, public_key) = generate_keypair();

    let response = server
        .post("/api/signatures")
        .json(&json!({
            "signer_id": 7,
            "signer_name": "Taro Tanaka",
            "contract_id": 1,
            "document_type": "CONTRACT",
            "document_content": "Lease for Aoyama Mansion 101",
            "private_key": private_key
        }))
        .await;
    response.assert_status_ok();
    let record: serde_json::Value = response.json();
    assert_eq!(record["status"], "SIGNED");
    let id = record["id"].as_u64().unwrap();

    let response = server
        .post(&format!("/api/signatures/{id}/verify"))
        .json(&json!({
            "document_content": "Lease for Aoyama Mansion 101",
            "public_key": public_key
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["valid"], true);

    let response = server.get(&format!("/api/signatures/{id}")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "VERIFIED");
    assert_eq!(body["verification_result"], "VERIFIED");

    let response = server.post(&format!("/api/signatures/{id}/revoke")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    let response = server
        .post(&format!("/api/signatures/{id}/verify"))
        .json(&json!({
            "document_content": "Lease for Aoyama Mansion 101",
            "public_key": public_key
        }))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["valid"], false);

    let response = server.get("/api/signatures/signer/7").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_signature_with_mismatched_key() {
    let server = create_test_server();
    let (private_key, _) = generate_keypair();
    let (_, other_public) = generate_keypair();

    let response = server
        .post("/api/signatures")
        .json(&json!({
            "signer_id": 1,
            "signer_name": "Hanako Sato",
            "contract_id": 2,
            "document_type": "AGREEMENT",
            "document_content": "Sale agreement",
            "private_key": private_key
        }))
        .await;
    let id = response.json::<serde_json::Value>()["id"].as_u64().unwrap();

    let response = server
        .post(&format!("/api/signatures/{id}/verify"))
        .json(&json!({ "document_content": "Sale agreement", "public_key": other_public }))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["valid"], false);

    let body: serde_json::Value = server.get(&format!("/api/signatures/{id}")).await.json();
    assert_eq!(body["status"], "SIGNED");
    assert_eq!(body["verification_result"], "INVALID");
}

#[tokio::test]
async fn test_signature_bad_key_is_generic_400() {
    let server = create_test_server();

    let response = server
        .post("/api/signatures")
        .json(&json!({
            "signer_id": 1,
            "signer_name": "Hanako Sato",
            "contract_id": 2,
            "document_type": "CONTRACT",
            "document_content": "Sale agreement",
            "private_key": "not-a-key"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "error": "bad_request" }));
}

#[tokio::test]
async fn test_signature_missing() {
    let server = create_test_server();

    server.get("/api/signatures/99").await.assert_status_not_found();

    let response = server.post("/api/signatures/99/revoke").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}

// ============ Malformed Request Tests ============

#[tokio::test]
async fn test_malformed_requests_are_generic_400() {
    let server = create_test_server();

    // body missing a required field
    let missing_field = server
        .post("/api/biometric/register")
        .json(&json!({
            "user_name": "Taro",
            "biometric_type": "FINGERPRINT_RIGHT_INDEX",
            "biometric_data": payload(4000, 1)
        }))
        .await;

    // id that is not a number
    let bad_id = server.post("/api/signatures/abc/revoke").await;

    // body that is not JSON
    let not_json = server.post("/api/timestamps").text("document_id=1").await;

    // unknown enum value in the path
    let bad_variant = server.get("/api/properties/type/CASTLE").await;

    for response in [missing_field, bad_id, not_json, bad_variant] {
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body, json!({ "error": "bad_request" }));
    }
}

// ============ Timestamp Endpoint Tests ============

#[tokio::test]
async fn test_timestamp_lifecycle() {
    let server = create_test_server();

    let response = server
        .post("/api/timestamps")
        .json(&json!({
            "document_id": 42,
            "document_type": "CONTRACT",
            "timestamp_certificate": "MIIB-cert",
            "timestamp_authority": "Tokyo TSA"
        }))
        .await;
    response.assert_status_ok();
    let record: serde_json::Value = response.json();
    assert_eq!(record["status"], "ACTIVE");
    assert!(record["expires_at"].is_string());
    let id = record["id"].as_u64().unwrap();

    let body: serde_json::Value = server.post(&format!("/api/timestamps/{id}/verify")).await.json();
    assert_eq!(body["valid"], true);

    let body: serde_json::Value = server.get("/api/timestamps/document/42").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    let body: serde_json::Value = server.get("/api/timestamps/type/CONTRACT").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    let body: serde_json::Value = server.get("/api/timestamps/authority/Tokyo%20TSA").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    server.delete(&format!("/api/timestamps/{id}")).await.assert_status_ok();
    server.get(&format!("/api/timestamps/{id}")).await.assert_status_not_found();
    server.delete(&format!("/api/timestamps/{id}")).await.assert_status_not_found();

    let body: serde_json::Value = server.post(&format!("/api/timestamps/{id}/verify")).await.json();
    assert_eq!(body["valid"], false);
}

// ============ Biometric Endpoint Tests ============

#[tokio::test]
async fn test_biometric_register_and_authenticate() {
    let server = create_test_server();
    let sample = payload(6000, 7);

    let response = server
        .post("/api/biometric/register")
        .json(&json!({
            "user_id": 1,
            "user_name": "Taro Tanaka",
            "biometric_type": "FINGERPRINT_RIGHT_INDEX",
            "biometric_data": sample
        }))
        .await;
    response.assert_status_ok();
    let record: serde_json::Value = response.json();
    assert_eq!(record["quality_score"], 100);
    let id = record["id"].as_u64().unwrap();

    let auth = json!({
        "user_id": 1,
        "biometric_type": "FINGERPRINT_RIGHT_INDEX",
        "biometric_data": sample
    });
    let body: serde_json::Value = server
        .post("/api/biometric/authenticate")
        .json(&auth)
        .await
        .json();
    assert_eq!(body["authenticated"], true);

    let body: serde_json::Value = server
        .post("/api/biometric/authenticate")
        .json(&json!({
            "user_id": 1,
            "biometric_type": "FINGERPRINT_RIGHT_INDEX",
            "biometric_data": payload(6000, 8)
        }))
        .await
        .json();
    assert_eq!(body["authenticated"], false);

    let body: serde_json::Value = server
        .post(&format!("/api/biometric/{id}/deactivate"))
        .await
        .json();
    assert_eq!(body["success"], true);

    let body: serde_json::Value = server
        .post("/api/biometric/authenticate")
        .json(&auth)
        .await
        .json();
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn test_biometric_duplicate_registration() {
    let server = create_test_server();
    let request = json!({
        "user_id": 3,
        "user_name": "Jiro Yamada",
        "biometric_type": "FACE_RECOGNITION",
        "biometric_data": payload(2000, 1)
    });

    server.post("/api/biometric/register").json(&request).await.assert_status_ok();

    let response = server.post("/api/biometric/register").json(&request).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");

    let body: serde_json::Value = server.get("/api/biometric/user/3").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_biometric_soft_delete() {
    let server = create_test_server();
    let response = server
        .post("/api/biometric/register")
        .json(&json!({
            "user_id": 4,
            "user_name": "Yumi Nakamura",
            "biometric_type": "IRIS_SCAN",
            "biometric_data": payload(1500, 2)
        }))
        .await;
    let id = response.json::<serde_json::Value>()["id"].as_u64().unwrap();

    let body: serde_json::Value = server.delete(&format!("/api/biometric/{id}")).await.json();
    assert_eq!(body["success"], true);

    let body: serde_json::Value = server.get(&format!("/api/biometric/{id}")).await.json();
    assert_eq!(body["status"], "DELETED");

    let body: serde_json::Value = server.delete("/api/biometric/99").await.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_evaluate_quality() {
    let server = create_test_server();

    let body: serde_json::Value = server
        .post("/api/biometric/evaluate-quality")
        .json(&json!({ "biometric_data": payload(6000, 0) }))
        .await
        .json();
    assert_eq!(body["quality_score"], 100);
    assert_eq!(body["quality_level"], "EXCELLENT");

    let body: serde_json::Value = server
        .post("/api/biometric/evaluate-quality")
        .json(&json!({ "biometric_data": payload(50, 0) }))
        .await
        .json();
    assert_eq!(body["quality_score"], 0);
    assert_eq!(body["quality_level"], "UNACCEPTABLE");
}

// ============ Property Endpoint Tests ============

#[tokio::test]
async fn test_property_crud() {
    let server = create_test_server();
    let id = create_property(&server, "Aoyama Mansion 101").await;

    let body: serde_json::Value = server.get(&format!("/api/properties/{id}")).await.json();
    assert_eq!(body["name"], "Aoyama Mansion 101");
    assert_eq!(body["status"], "AVAILABLE");

    let response = server
        .put(&format!("/api/properties/{id}"))
        .json(&json!({ "status": "SOLD" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "SOLD");
    assert_eq!(body["name"], "Aoyama Mansion 101");

    let body: serde_json::Value = server.get("/api/properties/status/SOLD").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    server.delete(&format!("/api/properties/{id}")).await.assert_status_ok();
    server.get(&format!("/api/properties/{id}")).await.assert_status_not_found();
    server.delete(&format!("/api/properties/{id}")).await.assert_status_not_found();
    server
        .put(&format!("/api/properties/{id}"))
        .json(&json!({ "status": "SOLD" }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_property_search() {
    let server = create_test_server();
    create_property(&server, "Aoyama Mansion 101").await;
    create_property(&server, "Daikanyama Terrace").await;

    let body: serde_json::Value = server
        .get("/api/properties/search")
        .add_query_param("query", "daikanyama")
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let body: serde_json::Value = server
        .get("/api/properties/search/criteria")
        .add_query_param("property_type", "APARTMENT")
        .add_query_param("min_price", "80000000")
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 2);

    let body: serde_json::Value = server.get("/api/properties/type/HOUSE").await.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_property_validation() {
    let server = create_test_server();

    let response = server
        .post("/api/properties")
        .json(&json!({
            "name": "",
            "address": "nowhere",
            "property_type": "LAND",
            "price": "1",
            "area": "1",
            "year_built": 2000
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ============ Client Endpoint Tests ============

#[tokio::test]
async fn test_client_crud_and_search() {
    let server = create_test_server();
    let id = create_client(&server, "tanaka@example.com").await;

    let response = server
        .post("/api/clients")
        .json(&json!({
            "first_name": "Ichiro",
            "last_name": "Tanaka",
            "email": "tanaka@example.com",
            "phone": "090-0000-0000",
            "client_type": "SELLER"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = server
        .get("/api/clients/search")
        .add_query_param("query", "TANAKA")
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let body: serde_json::Value = server
        .get("/api/clients/search/advanced")
        .add_query_param("client_type", "BUYER")
        .add_query_param("email", "example.com")
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = server
        .put(&format!("/api/clients/{id}"))
        .json(&json!({
            "first_name": "Taro",
            "last_name": "Tanaka",
            "email": "taro@example.com",
            "phone": "090-1234-5678",
            "client_type": "LANDLORD"
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = server.get("/api/clients/type/LANDLORD").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    server.delete(&format!("/api/clients/{id}")).await.assert_status_ok();
    server.get(&format!("/api/clients/{id}")).await.assert_status_not_found();
}

// ============ Contract Endpoint Tests ============

#[tokio::test]
async fn test_contract_flow() {
    let server = create_test_server();
    let property_id = create_property(&server, "Aoyama Mansion 101").await;
    let client_id = create_client(&server, "tanaka@example.com").await;

    let response = server
        .post("/api/contracts")
        .json(&contract_body("CNT-2024-001", property_id, client_id))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["property_name"], "Aoyama Mansion 101");
    assert_eq!(body["client_name"], "Taro Tanaka");
    let id = body["id"].as_u64().unwrap();

    server
        .post("/api/contracts")
        .json(&contract_body("CNT-2024-001", property_id, client_id))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/api/contracts")
        .json(&contract_body("CNT-2024-002", 99, client_id))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = server
        .get(&format!("/api/contracts/property/{property_id}"))
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    let body: serde_json::Value = server.get("/api/contracts/status/ACTIVE").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let body: serde_json::Value = server
        .get("/api/contracts/expiring")
        .add_query_param("before", "2026-06-01T00:00:00Z")
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    let body: serde_json::Value = server
        .get("/api/contracts/expiring")
        .add_query_param("before", "2025-06-01T00:00:00Z")
        .await
        .json();
    assert!(body.as_array().unwrap().is_empty());

    server.delete(&format!("/api/contracts/{id}")).await.assert_status_ok();
    server.get(&format!("/api/contracts/{id}")).await.assert_status_not_found();
}

// ============ Transaction Endpoint Tests ============

#[tokio::test]
async fn test_transaction_flow() {
    let server = create_test_server();
    let property_id = create_property(&server, "Aoyama Mansion 101").await;
    let client_id = create_client(&server, "tanaka@example.com").await;
    let contract: serde_json::Value = server
        .post("/api/contracts")
        .json(&contract_body("CNT-2024-001", property_id, client_id))
        .await
        .json();
    let contract_id = contract["id"].as_u64().unwrap();

    let response = server
        .post("/api/transactions")
        .json(&json!({
            "contract_id": contract_id,
            "transaction_type": "PAYMENT",
            "amount": "150000",
            "transaction_date": "2024-02-01T00:00:00Z",
            "description": "February rent",
            "status": "COMPLETED"
        }))
        .await;
    response.assert_status_ok();
    let id = response.json::<serde_json::Value>()["id"].as_u64().unwrap();

    server
        .post("/api/transactions")
        .json(&json!({
            "contract_id": contract_id,
            "transaction_type": "PAYMENT",
            "amount": "0",
            "transaction_date": "2024-02-01T00:00:00Z"
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = server
        .get(&format!("/api/transactions/contract/{contract_id}"))
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    let body: serde_json::Value = server.get("/api/transactions/type/PAYMENT").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    let body: serde_json::Value = server.get("/api/transactions/status/PENDING").await.json();
    assert!(body.as_array().unwrap().is_empty());

    server.delete(&format!("/api/transactions/{id}")).await.assert_status_ok();
    server
        .get(&format!("/api/transactions/{id}"))
        .await
        .assert_status_not_found();
}
