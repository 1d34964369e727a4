use crate::ApiError;

use zd_auth::{AuthError, IdpError};
use zd_db::DbError;
use zd_sync::SyncError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn into_parts(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        code: "PROFILE_NOT_FOUND",
        message: "Profile not found".into(),
        location: here(),
    };

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "PROFILE_NOT_FOUND");
    assert_eq!(json["error"]["message"], "Profile not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "email must not be empty".into(),
        field: Some("email".into()),
        location: here(),
    };

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_timeout_returns_504() {
    let (status, json) = into_parts(ApiError::Timeout { location: here() }).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["error"]["code"], "TIMEOUT");
}

#[tokio::test]
async fn test_duplicate_email_signup_maps_to_400_with_provider_code() {
    let error: ApiError = SyncError::IdentityCreation {
        source: IdpError::rejected("EMAIL_EXISTS", "EMAIL_EXISTS"),
        location: here(),
    }
    .into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "IDENTITY_CREATION_FAILED");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("EMAIL_EXISTS")
    );
}

#[tokio::test]
async fn test_signup_during_outage_maps_to_502() {
    let error: ApiError = SyncError::IdentityCreation {
        source: IdpError::unavailable("connection refused"),
        location: here(),
    }
    .into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "IDENTITY_CREATION_FAILED");
}

#[tokio::test]
async fn test_invalid_credentials_maps_to_401() {
    let error: ApiError = SyncError::InvalidCredentials {
        source: IdpError::rejected("INVALID_PASSWORD", "INVALID_PASSWORD"),
        location: here(),
    }
    .into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    // Provider reason is not disclosed on login
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("INVALID_PASSWORD")
    );
}

#[tokio::test]
async fn test_unverified_email_maps_to_403() {
    let error: ApiError = SyncError::EmailNotVerified {
        uid: "uid-1".into(),
        location: here(),
    }
    .into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "EMAIL_NOT_VERIFIED");
}

#[tokio::test]
async fn test_profile_sync_failure_maps_to_500_without_db_details() {
    let error: ApiError = SyncError::ProfileSync {
        uid: "uid-1".into(),
        source: DbError::InvalidProfile {
            message: "idp_uid must not be empty".into(),
            location: here(),
        },
        location: here(),
    }
    .into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "PROFILE_SYNC_FAILED");
    assert!(!json["error"]["message"].as_str().unwrap().contains("idp_uid"));
}

#[tokio::test]
async fn test_rejected_email_change_maps_to_400() {
    let error: ApiError = SyncError::EmailSync {
        source: IdpError::rejected("INVALID_EMAIL", "INVALID_EMAIL"),
        location: here(),
    }
    .into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "EMAIL_SYNC_FAILED");
}

#[tokio::test]
async fn test_provider_unavailable_maps_to_502() {
    let error: ApiError = SyncError::ProviderUnavailable {
        source: IdpError::unavailable("timed out"),
        location: here(),
    }
    .into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "PROVIDER_UNAVAILABLE");
}

#[tokio::test]
async fn test_persistence_failure_maps_to_500() {
    let error: ApiError = SyncError::Persistence {
        source: DbError::ProfileNotFound {
            id: 7,
            location: here(),
        },
        location: here(),
    }
    .into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "PERSISTENCE_FAILED");
}

#[tokio::test]
async fn test_malformed_header_maps_to_401() {
    let error: ApiError = AuthError::malformed_header("missing").into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MALFORMED_AUTH_HEADER");
}

#[tokio::test]
async fn test_expired_token_maps_to_invalid_token() {
    let error: ApiError = AuthError::TokenExpired { location: here() }.into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_token_check_during_outage_maps_to_502() {
    let error: ApiError = AuthError::from(IdpError::unavailable("connection reset")).into();

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "PROVIDER_UNAVAILABLE");
}
