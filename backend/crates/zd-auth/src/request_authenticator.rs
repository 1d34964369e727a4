use crate::{AuthError, IdentityProvider, Result as AuthErrorResult};

use std::sync::Arc;

use log::debug;

const BEARER_SCHEME: &str = "Bearer";

/// Resolves the `Authorization` header of an inbound request to a subject id.
#[derive(Clone)]
pub struct RequestAuthenticator {
    provider: Arc<dyn IdentityProvider>,
}

impl RequestAuthenticator {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Verify `Bearer <token>` and return the token's subject id.
    ///
    /// An empty token still goes to the provider and comes back as
    /// `InvalidToken`, not `MalformedHeader`.
    pub async fn verify(&self, header: Option<&str>) -> AuthErrorResult<String> {
        let token = Self::parse_bearer(header)?;

        let uid = self.provider.verify_token(token).await?;
        debug!("Authenticated request for uid {}", uid);

        Ok(uid)
    }

    /// Split the header once on a space; the scheme must be exactly `Bearer`.
    #[track_caller]
    pub fn parse_bearer(header: Option<&str>) -> AuthErrorResult<&str> {
        let header = header.ok_or_else(|| AuthError::malformed_header("missing header"))?;

        let (scheme, token) = header
            .split_once(' ')
            .ok_or_else(|| AuthError::malformed_header("expected '<scheme> <token>'"))?;

        if scheme != BEARER_SCHEME {
            return Err(AuthError::malformed_header("expected 'Bearer' scheme"));
        }

        Ok(token)
    }
}
