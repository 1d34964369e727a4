use crate::{ApiError, AppState, AuthenticatedUser};

use zd_auth::{Identity, IdentityProvider, IdpError, IdpResult, IdpSession, RequestAuthenticator};
use zd_db::{ProfileRepository, ProfileStore};
use zd_sync::{IdentitySyncService, SyncPolicy};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, extract::FromRequestParts, http::Request};

/// Knows one token; everything else is rejected.
struct SingleTokenProvider {
    outage: bool,
}

#[async_trait]
impl IdentityProvider for SingleTokenProvider {
    async fn create_identity(&self, _email: &str, _password: &str) -> IdpResult<IdpSession> {
        unimplemented!()
    }

    async fn authenticate(&self, _email: &str, _password: &str) -> IdpResult<IdpSession> {
        unimplemented!()
    }

    async fn verify_token(&self, id_token: &str) -> IdpResult<String> {
        if self.outage {
            return Err(IdpError::unavailable("connection refused"));
        }
        match id_token {
            "good-token" => Ok("uid-1".to_string()),
            _ => Err(IdpError::rejected("INVALID_ID_TOKEN", "INVALID_ID_TOKEN")),
        }
    }

    async fn get_identity(&self, _uid: &str) -> IdpResult<Identity> {
        unimplemented!()
    }

    async fn update_email(&self, _uid: &str, _email: &str) -> IdpResult<()> {
        unimplemented!()
    }

    async fn send_verification_email(&self, _id_token: &str) -> IdpResult<()> {
        unimplemented!()
    }

    async fn delete_identity(&self, _uid: &str) -> IdpResult<()> {
        unimplemented!()
    }
}

async fn create_test_state(outage: bool) -> AppState {
    let pool = zd_db::open_in_memory_pool()
        .await
        .expect("Failed to create test pool");
    let store: Arc<dyn ProfileStore> = Arc::new(ProfileRepository::new(pool));
    let provider: Arc<dyn IdentityProvider> = Arc::new(SingleTokenProvider { outage });

    AppState {
        sync_service: IdentitySyncService::new(provider.clone(), store, SyncPolicy::default()),
        authenticator: RequestAuthenticator::new(provider),
        request_timeout: Duration::from_secs(5),
    }
}

async fn extract(state: &AppState, header: Option<&str>) -> Result<AuthenticatedUser, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    AuthenticatedUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let state = create_test_state(false).await;

    let result = extract(&state, Some("Bearer good-token")).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().uid(), "uid-1");
}

#[tokio::test]
async fn test_extractor_missing_header() {
    let state = create_test_state(false).await;

    let result = extract(&state, None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { code, .. }) if code == "MALFORMED_AUTH_HEADER"));
}

#[tokio::test]
async fn test_extractor_wrong_scheme() {
    let state = create_test_state(false).await;

    let result = extract(&state, Some("Basic good-token")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { code, .. }) if code == "MALFORMED_AUTH_HEADER"));
}

#[tokio::test]
async fn test_extractor_empty_token() {
    let state = create_test_state(false).await;

    let result = extract(&state, Some("Bearer ")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { code, .. }) if code == "INVALID_TOKEN"));
}

#[tokio::test]
async fn test_extractor_unknown_token() {
    let state = create_test_state(false).await;

    let result = extract(&state, Some("Bearer forged")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { code, .. }) if code == "INVALID_TOKEN"));
}

#[tokio::test]
async fn test_extractor_provider_outage() {
    let state = create_test_state(true).await;

    let result = extract(&state, Some("Bearer good-token")).await;

    assert!(matches!(result, Err(ApiError::BadGateway { code, .. }) if code == "PROVIDER_UNAVAILABLE"));
}
