
use crate::{IdentitySyncService, SyncPolicy};

use fakes::{FakeIdentityProvider, FakeProfileStore};

use std::sync::Arc;

/// Service wired to fresh fakes, returned alongside them for inspection.
pub(crate) fn service_with(
    policy: SyncPolicy,
) -> (
    IdentitySyncService,
    Arc<FakeIdentityProvider>,
    Arc<FakeProfileStore>,
) {
    let provider = Arc::new(FakeIdentityProvider::default());
    let store = Arc::new(FakeProfileStore::default());
    let service = IdentitySyncService::new(provider.clone(), store.clone(), policy);
    (service, provider, store)
}
