#![allow(dead_code)]

//! Test infrastructure for zd-server API tests

use zd_auth::{IdentityProvider, IdentityToolkitClient, RequestAuthenticator};
use zd_core::NewProfile;
use zd_db::{ProfileRepository, ProfileStore};
use zd_server::AppState;
use zd_sync::{IdentitySyncService, SyncPolicy};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

pub const API_KEY: &str = "test-api-key";
pub const TOKEN: &str = "id-token-1";
pub const UID: &str = "uid-1";
pub const EMAIL: &str = "a@x.com";

/// Wiremock identity provider plus an in-memory profile store.
pub struct TestContext {
    pub idp: MockServer,
    pub store: Arc<dyn ProfileStore>,
    pub state: AppState,
}

pub async fn create_test_context() -> TestContext {
    create_test_context_with_policy(SyncPolicy {
        send_verification_email: false,
        ..SyncPolicy::default()
    })
    .await
}

pub async fn create_test_context_with_policy(policy: SyncPolicy) -> TestContext {
    let idp = MockServer::start().await;

    let client = IdentityToolkitClient::new(
        &idp.uri(),
        Some(API_KEY.to_string()),
        Duration::from_secs(5),
    )
    .expect("Failed to build identity provider client")
    .with_service_token(Some("service-token".to_string()));
    let provider: Arc<dyn IdentityProvider> = Arc::new(client);

    let pool = zd_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database");
    let store: Arc<dyn ProfileStore> = Arc::new(ProfileRepository::new(pool));

    let state = AppState {
        sync_service: IdentitySyncService::new(provider.clone(), store.clone(), policy),
        authenticator: RequestAuthenticator::new(provider),
        request_timeout: Duration::from_secs(10),
    };

    TestContext { idp, store, state }
}

pub fn session_body(uid: &str, email: &str) -> serde_json::Value {
    json!({
        "idToken": TOKEN,
        "email": email,
        "refreshToken": "refresh-token-1",
        "expiresIn": "3600",
        "localId": uid
    })
}

pub fn error_body(message: &str) -> serde_json::Value {
    json!({ "error": { "code": 400, "message": message, "errors": [] } })
}

/// Make `TOKEN` resolve to `UID` through accounts:lookup.
pub async fn mount_token_lookup(idp: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/accounts:lookup"))
        .and(body_partial_json(json!({ "idToken": TOKEN })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{ "localId": UID, "email": EMAIL, "emailVerified": true }]
        })))
        .mount(idp)
        .await;
}

/// Insert the profile `UID` owns.
pub async fn create_test_profile(store: &Arc<dyn ProfileStore>) -> zd_core::Profile {
    store
        .create(&NewProfile::new(UID.to_string(), EMAIL.to_string()))
        .await
        .expect("Failed to create test profile")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", TOKEN));

    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
