use crate::SyncWarning;

use zd_auth::IdpSession;
use zd_core::Profile;

/// Session material plus the caller's profile, returned by sign-up and login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResult {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    /// `None` when the identity has no local profile
    pub user: Option<Profile>,
    pub warnings: Vec<SyncWarning>,
}

impl AuthResult {
    pub fn from_session(session: IdpSession, user: Option<Profile>) -> Self {
        Self {
            id_token: session.id_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
            user,
            warnings: Vec::new(),
        }
    }
}
