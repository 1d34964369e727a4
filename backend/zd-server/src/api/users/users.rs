//! Own-profile REST API handlers
//!
//! Every route acts on the authenticated caller's profile; there is no way
//! to address another user's record.

use crate::{ApiResult, AppState, AuthenticatedUser, FontSizeRequest, MessageResponse, ProfileDto};

use zd_core::ProfileUpdate;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

// =============================================================================
// Handlers
// =============================================================================

/// GET /users/me
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<ProfileDto>> {
    let profile = state.sync_service.get_profile(user.uid()).await?;

    Ok(Json(profile.into()))
}

/// PATCH /users/me
///
/// Partial update; absent or null fields are left unchanged
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> ApiResult<Json<ProfileDto>> {
    let Json(update) = payload?;

    let profile = state
        .sync_service
        .update_profile(user.uid(), &update)
        .await?;

    Ok(Json(profile.into()))
}

/// PUT /users/me/font-size
pub async fn update_font_size(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<FontSizeRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileDto>> {
    let Json(req) = payload?;

    let profile = state
        .sync_service
        .update_font_size(user.uid(), req.font_size)
        .await?;

    Ok(Json(profile.into()))
}

/// DELETE /users/me
///
/// Deletes the identity first, then the profile
pub async fn delete_me(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<MessageResponse>> {
    state.sync_service.delete_account(user.uid()).await?;

    Ok(Json(MessageResponse::new("Account deleted")))
}
