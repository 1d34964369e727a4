//! Authentication REST API handlers

use crate::{
    ApiResult, AppState, AuthResponse, AuthenticatedUser, CredentialsRequest, MessageResponse,
};

use zd_sync::AuthResult;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::{info, warn};

// =============================================================================
// Handlers
// =============================================================================

/// POST /auth/signup
///
/// Create the identity and its profile
pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    let result = state.sync_service.sign_up(&req.email, &req.password).await?;
    log_warnings(&result);

    Ok(Json(result.into()))
}

/// POST /auth/login
///
/// Authenticate; `user` is null when the identity has no profile
pub async fn log_in(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    let result = state.sync_service.log_in(&req.email, &req.password).await?;
    log_warnings(&result);

    Ok(Json(result.into()))
}

/// POST /auth/logout
///
/// ID tokens are stateless; clients discard theirs
pub async fn log_out(user: AuthenticatedUser) -> ApiResult<Json<MessageResponse>> {
    info!("Logout for uid {}", user.uid());
    Ok(Json(MessageResponse::new("Logged out")))
}

fn log_warnings(result: &AuthResult) {
    for warning in &result.warnings {
        warn!("{}", warning);
    }
}
