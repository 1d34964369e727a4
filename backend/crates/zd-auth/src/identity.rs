/// Account as known to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
}

/// Token material returned by sign-up and sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdpSession {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    /// Lifetime of `id_token` in seconds
    pub expires_in: u64,
}
