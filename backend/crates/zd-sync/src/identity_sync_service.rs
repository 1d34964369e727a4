//! Keeps the identity provider and the local profile store consistent.
//!
//! No transaction spans both stores. Three windows can leave them out of
//! step and are reported rather than repaired:
//!
//! - sign-up: identity created, profile insert failed (unless compensation is on)
//! - profile update: provider email changed, local write failed
//! - account deletion: identity deleted, local delete failed

use crate::{AuthResult, Result as SyncErrorResult, SyncError, SyncPolicy, SyncWarning};

use zd_auth::IdentityProvider;
use zd_core::{FontSize, NewProfile, Profile, ProfileUpdate};
use zd_db::{DbError, ProfileStore};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, error, info, warn};

#[derive(Clone)]
pub struct IdentitySyncService {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
    policy: SyncPolicy,
}

impl IdentitySyncService {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        policy: SyncPolicy,
    ) -> Self {
        Self {
            provider,
            store,
            policy,
        }
    }

    /// Create the identity, then its profile.
    pub async fn sign_up(&self, email: &str, password: &str) -> SyncErrorResult<AuthResult> {
        let session = self
            .provider
            .create_identity(email, password)
            .await
            .map_err(|source| SyncError::IdentityCreation {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;
        debug!("Identity created for {}", email);

        let mut warnings = Vec::new();

        if self.policy.send_verification_email
            && let Err(e) = self.provider.send_verification_email(&session.id_token).await
        {
            warn!("Verification email for uid {} not sent: {}", session.uid, e);
            warnings.push(SyncWarning::VerificationEmailFailed {
                reason: e.to_string(),
            });
        }

        let new_profile = NewProfile::new(session.uid.clone(), session.email.clone());
        let profile = match self.store.create(&new_profile).await {
            Ok(profile) => profile,
            Err(source) => {
                error!(
                    "Profile creation failed for uid {}: {}",
                    session.uid, source
                );
                if self.policy.compensate_on_profile_failure {
                    match self.provider.delete_identity(&session.uid).await {
                        Ok(()) => info!("Deleted identity {} after profile failure", session.uid),
                        Err(e) => {
                            error!(
                                "Compensation failed, identity {} has no profile: {}",
                                session.uid, e
                            );
                            warnings.push(SyncWarning::CompensationFailed {
                                uid: session.uid.clone(),
                                reason: e.to_string(),
                            });
                        }
                    }
                } else {
                    error!("Identity {} has no profile", session.uid);
                }
                return Err(SyncError::ProfileSync {
                    uid: session.uid,
                    source,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        info!("Signed up uid {} (profile {})", profile.idp_uid, profile.id);

        let mut result = AuthResult::from_session(session, Some(profile));
        result.warnings = warnings;
        Ok(result)
    }

    /// Authenticate and attach the profile if one exists.
    pub async fn log_in(&self, email: &str, password: &str) -> SyncErrorResult<AuthResult> {
        let session = self
            .provider
            .authenticate(email, password)
            .await
            .map_err(|source| {
                if source.is_outage() {
                    SyncError::provider_unavailable(source)
                } else {
                    SyncError::InvalidCredentials {
                        source,
                        location: ErrorLocation::from(Location::caller()),
                    }
                }
            })?;

        if self.policy.require_verified_email {
            let identity = self
                .provider
                .get_identity(&session.uid)
                .await
                .map_err(SyncError::provider_unavailable)?;
            if !identity.email_verified {
                return Err(SyncError::EmailNotVerified {
                    uid: session.uid,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let user = match self.store.find_by_idp_uid(&session.uid).await {
            Ok(Some(profile)) => Some(profile),
            Ok(None) => {
                warn!("Login for uid {} without a profile", session.uid);
                None
            }
            Err(e) => {
                warn!("Profile lookup failed for uid {}: {}", session.uid, e);
                None
            }
        };

        info!("Logged in uid {}", session.uid);
        Ok(AuthResult::from_session(session, user))
    }

    /// Apply a partial update. Email goes to the provider first; if it refuses,
    /// nothing from this call is persisted.
    pub async fn update_profile(
        &self,
        uid: &str,
        update: &ProfileUpdate,
    ) -> SyncErrorResult<Profile> {
        let mut profile = self.load_profile(uid).await?;

        update.apply_local_changes(&mut profile);

        let new_email = update.email_change(&profile);
        if let Some(email) = new_email {
            self.provider
                .update_email(uid, email)
                .await
                .map_err(|source| SyncError::EmailSync {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })?;
            debug!("Provider email updated for uid {}", uid);
            profile.email = email.to_string();
        }

        profile.updated_at = Utc::now();
        self.store.update(&profile).await.map_err(|e| {
            if new_email.is_some() {
                error!(
                    "Profile write failed for uid {} after provider email change: {}",
                    uid, e
                );
            }
            SyncError::persistence(e)
        })?;

        Ok(profile)
    }

    /// Explicit font size choice.
    pub async fn update_font_size(
        &self,
        uid: &str,
        font_size: FontSize,
    ) -> SyncErrorResult<Profile> {
        let mut profile = self.load_profile(uid).await?;

        profile.set_font_size(font_size);
        profile.updated_at = Utc::now();
        self.store
            .update(&profile)
            .await
            .map_err(SyncError::persistence)?;

        Ok(profile)
    }

    pub async fn get_profile(&self, uid: &str) -> SyncErrorResult<Profile> {
        self.load_profile(uid).await
    }

    /// Delete the identity, then the profile if there is one.
    pub async fn delete_account(&self, uid: &str) -> SyncErrorResult<()> {
        self.provider
            .delete_identity(uid)
            .await
            .map_err(|source| SyncError::IdentityDeletion {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let profile = self
            .store
            .find_by_idp_uid(uid)
            .await
            .map_err(|e| {
                error!("Identity {} deleted but profile lookup failed: {}", uid, e);
                SyncError::persistence(e)
            })?;

        if let Some(profile) = profile {
            match self.store.delete(profile.id).await {
                Ok(()) | Err(DbError::ProfileNotFound { .. }) => {}
                Err(e) => {
                    error!("Identity {} deleted but profile delete failed: {}", uid, e);
                    return Err(SyncError::persistence(e));
                }
            }
        }

        info!("Deleted account for uid {}", uid);
        Ok(())
    }

    async fn load_profile(&self, uid: &str) -> SyncErrorResult<Profile> {
        self.store
            .find_by_idp_uid(uid)
            .await
            .map_err(SyncError::persistence)?
            .ok_or_else(|| SyncError::profile_not_found(uid))
    }
}
