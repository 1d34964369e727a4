use crate::ProfileDto;

use zd_sync::AuthResult;

use serde::Serialize;

/// Token material plus the caller's profile (`null` when none exists)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id_token: String,
    pub refresh_token: String,
    /// Seconds, as a string like the identity provider sends it
    pub expires_in: String,
    pub user: Option<ProfileDto>,
}

impl From<AuthResult> for AuthResponse {
    fn from(result: AuthResult) -> Self {
        Self {
            id_token: result.id_token,
            refresh_token: result.refresh_token,
            expires_in: result.expires_in.to_string(),
            user: result.user.map(ProfileDto::from),
        }
    }
}
