use zd_auth::RequestAuthenticator;
use zd_sync::IdentitySyncService;

use std::time::Duration;

/// Shared, immutable state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub sync_service: IdentitySyncService,
    pub authenticator: RequestAuthenticator,
    /// Upper bound on a single request, remote calls included
    pub request_timeout: Duration,
}
