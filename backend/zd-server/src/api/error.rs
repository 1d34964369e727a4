//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message"}}` with
//! a status derived from the error class. Wrapped causes are logged here and
//! never sent to the client.

use zd_auth::AuthError;
use zd_sync::SyncError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_TOKEN", "PROFILE_NOT_FOUND")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request refused by the identity provider or malformed (400)
    #[error("Bad request: {code}: {message} {location}")]
    BadRequest {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or invalid credentials (401)
    #[error("Unauthorized: {code}: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {code}: {message} {location}")]
    Forbidden {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {code}: {message} {location}")]
    Internal {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Identity provider unreachable (502)
    #[error("Bad gateway: {code}: {message} {location}")]
    BadGateway {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Request exceeded the handler timeout (504)
    #[error("Request timed out {location}")]
    Timeout { location: ErrorLocation },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match self {
            ApiError::Internal { .. } | ApiError::BadGateway { .. } | ApiError::Timeout { .. } => {
                log::error!("{}", self)
            }
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::BadRequest { code, message, .. } => {
                (StatusCode::BAD_REQUEST, body(code, message, None))
            }
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                body("VALIDATION_ERROR", message, field),
            ),
            ApiError::Unauthorized { code, message, .. } => {
                (StatusCode::UNAUTHORIZED, body(code, message, None))
            }
            ApiError::Forbidden { code, message, .. } => {
                (StatusCode::FORBIDDEN, body(code, message, None))
            }
            ApiError::NotFound { code, message, .. } => {
                (StatusCode::NOT_FOUND, body(code, message, None))
            }
            ApiError::Internal { code, message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, body(code, message, None))
            }
            ApiError::BadGateway { code, message, .. } => {
                (StatusCode::BAD_GATEWAY, body(code, message, None))
            }
            ApiError::Timeout { .. } => (
                StatusCode::GATEWAY_TIMEOUT,
                body("TIMEOUT", "Request timed out".to_string(), None),
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

fn body(code: &str, message: String, field: Option<String>) -> ApiErrorBody {
    ApiErrorBody {
        code: code.to_string(),
        message,
        field,
    }
}

/// Convert sync errors to API errors
impl From<SyncError> for ApiError {
    #[track_caller]
    fn from(e: SyncError) -> Self {
        // Full cause (with its own location) stays in the server log
        log::warn!("Sync operation failed: {}", e);

        let location = ErrorLocation::from(Location::caller());
        let outage = e.is_provider_outage();

        match e {
            SyncError::IdentityCreation { ref source, .. } if !outage => ApiError::BadRequest {
                code: "IDENTITY_CREATION_FAILED",
                message: rejected_message("Sign-up rejected by identity provider", source.code()),
                location,
            },
            SyncError::IdentityCreation { .. } => ApiError::BadGateway {
                code: "IDENTITY_CREATION_FAILED",
                message: "Identity provider unavailable".to_string(),
                location,
            },
            SyncError::InvalidCredentials { .. } => ApiError::Unauthorized {
                code: "INVALID_CREDENTIALS",
                message: "Invalid email or password".to_string(),
                location,
            },
            SyncError::EmailNotVerified { .. } => ApiError::Forbidden {
                code: "EMAIL_NOT_VERIFIED",
                message: "Email address has not been verified".to_string(),
                location,
            },
            SyncError::ProfileNotFound { .. } => ApiError::NotFound {
                code: "PROFILE_NOT_FOUND",
                message: "Profile not found".to_string(),
                location,
            },
            SyncError::ProfileSync { .. } => ApiError::Internal {
                code: "PROFILE_SYNC_FAILED",
                message: "Account created but profile could not be saved".to_string(),
                location,
            },
            SyncError::EmailSync { ref source, .. } if !outage => ApiError::BadRequest {
                code: "EMAIL_SYNC_FAILED",
                message: rejected_message("Email change rejected by identity provider", source.code()),
                location,
            },
            SyncError::EmailSync { .. } => ApiError::BadGateway {
                code: "EMAIL_SYNC_FAILED",
                message: "Identity provider unavailable".to_string(),
                location,
            },
            SyncError::Persistence { .. } => ApiError::Internal {
                code: "PERSISTENCE_FAILED",
                message: "Profile could not be saved".to_string(),
                location,
            },
            SyncError::ProviderUnavailable { .. } => ApiError::BadGateway {
                code: "PROVIDER_UNAVAILABLE",
                message: "Identity provider unavailable".to_string(),
                location,
            },
            SyncError::IdentityDeletion { ref source, .. } if !outage => ApiError::BadRequest {
                code: "IDENTITY_DELETION_FAILED",
                message: rejected_message("Account deletion rejected by identity provider", source.code()),
                location,
            },
            SyncError::IdentityDeletion { .. } => ApiError::BadGateway {
                code: "IDENTITY_DELETION_FAILED",
                message: "Identity provider unavailable".to_string(),
                location,
            },
        }
    }
}

/// Provider codes such as `EMAIL_EXISTS` are safe to pass on and useful to clients.
fn rejected_message(prefix: &str, code: Option<&str>) -> String {
    match code {
        Some(code) if !code.is_empty() => format!("{} ({})", prefix, code),
        _ => prefix.to_string(),
    }
}

/// Convert request authentication errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::debug!("Request authentication failed ({}): {}", e.error_code(), e);

        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::MalformedHeader { .. } => ApiError::Unauthorized {
                code: "MALFORMED_AUTH_HEADER",
                message: "Expected 'Authorization: Bearer <token>'".to_string(),
                location,
            },
            AuthError::ProviderUnavailable { .. } => ApiError::BadGateway {
                code: "PROVIDER_UNAVAILABLE",
                message: "Identity provider unavailable".to_string(),
                location,
            },
            _ => ApiError::Unauthorized {
                code: "INVALID_TOKEN",
                message: "Invalid or expired token".to_string(),
                location,
            },
        }
    }
}

/// Convert JSON body rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation {
            message: e.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
