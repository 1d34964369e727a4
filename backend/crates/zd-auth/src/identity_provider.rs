use crate::{Identity, IdpResult, IdpSession};

use async_trait::async_trait;

/// Operations the backend needs from the external identity provider.
///
/// Implementations never retry; every failure is reported as an [`IdpError`](crate::IdpError)
/// distinguishing refusals from outages.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new identity and open a long-lived session for it.
    async fn create_identity(&self, email: &str, password: &str) -> IdpResult<IdpSession>;

    /// Verify credentials and open a session.
    async fn authenticate(&self, email: &str, password: &str) -> IdpResult<IdpSession>;

    /// Verify an ID token and return its subject id.
    async fn verify_token(&self, id_token: &str) -> IdpResult<String>;

    async fn get_identity(&self, uid: &str) -> IdpResult<Identity>;

    async fn update_email(&self, uid: &str, email: &str) -> IdpResult<()>;

    async fn send_verification_email(&self, id_token: &str) -> IdpResult<()>;

    async fn delete_identity(&self, uid: &str) -> IdpResult<()>;
}
