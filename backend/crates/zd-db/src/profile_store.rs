use crate::Result as DbErrorResult;

use zd_core::{NewProfile, Profile};

use async_trait::async_trait;

/// Persistence of local profiles, keyed by local id and by identity provider uid.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert a profile with zero-valued fields and return it with its generated id.
    async fn create(&self, new_profile: &NewProfile) -> DbErrorResult<Profile>;

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Profile>>;

    async fn find_by_idp_uid(&self, idp_uid: &str) -> DbErrorResult<Option<Profile>>;

    async fn find_all(&self) -> DbErrorResult<Vec<Profile>>;

    /// Overwrite every mutable column. Fails with `ProfileNotFound` when no row matches.
    async fn update(&self, profile: &Profile) -> DbErrorResult<()>;

    async fn delete(&self, id: i64) -> DbErrorResult<()>;
}
