/// Toggles for the optional steps around sign-up and login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPolicy {
    /// Ask the provider to send a verification email after sign-up (best effort)
    pub send_verification_email: bool,
    /// Refuse login until the identity's email is verified
    pub require_verified_email: bool,
    /// Delete the new identity when its profile cannot be created
    pub compensate_on_profile_failure: bool,
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            send_verification_email: true,
            require_verified_email: false,
            compensate_on_profile_failure: false,
        }
    }
}
