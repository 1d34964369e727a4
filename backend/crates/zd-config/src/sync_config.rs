use crate::{
    DEFAULT_COMPENSATE_ON_PROFILE_FAILURE, DEFAULT_REQUIRE_VERIFIED_EMAIL,
    DEFAULT_SEND_VERIFICATION_EMAIL,
};

use serde::Deserialize;

/// Policy toggles for signup and login orchestration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Dispatch a verification email after signup (best effort)
    pub send_verification_email: bool,
    /// Reject logins whose identity email is not verified
    pub require_verified_email: bool,
    /// Delete the freshly created identity when the local profile insert fails
    pub compensate_on_profile_failure: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            send_verification_email: DEFAULT_SEND_VERIFICATION_EMAIL,
            require_verified_email: DEFAULT_REQUIRE_VERIFIED_EMAIL,
            compensate_on_profile_failure: DEFAULT_COMPENSATE_ON_PROFILE_FAILURE,
        }
    }
}
