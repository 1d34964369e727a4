//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use zd_auth::AuthError;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Subject id of the caller, verified through the identity provider.
///
/// Handlers taking this extractor are protected: requests without a valid
/// `Authorization: Bearer <token>` header never reach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

impl AuthenticatedUser {
    pub fn uid(&self) -> &str {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = match parts.headers.get(AUTHORIZATION) {
                Some(value) => Some(
                    value
                        .to_str()
                        .map_err(|_| AuthError::malformed_header("header is not visible ASCII"))?,
                ),
                None => None,
            };

            let uid = state.authenticator.verify(header).await?;

            Ok(AuthenticatedUser(uid))
        }
    }
}
