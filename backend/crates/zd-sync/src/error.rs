use zd_auth::IdpError;
use zd_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Identity creation failed: {source} {location}")]
    IdentityCreation {
        #[source]
        source: IdpError,
        location: ErrorLocation,
    },

    #[error("Invalid credentials: {source} {location}")]
    InvalidCredentials {
        #[source]
        source: IdpError,
        location: ErrorLocation,
    },

    #[error("Email not verified for uid {uid} {location}")]
    EmailNotVerified { uid: String, location: ErrorLocation },

    #[error("Profile not found for uid {uid} {location}")]
    ProfileNotFound { uid: String, location: ErrorLocation },

    #[error("Profile creation failed for uid {uid}: {source} {location}")]
    ProfileSync {
        uid: String,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Email change rejected by identity provider: {source} {location}")]
    EmailSync {
        #[source]
        source: IdpError,
        location: ErrorLocation,
    },

    #[error("Profile persistence failed: {source} {location}")]
    Persistence {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Identity provider unavailable: {source} {location}")]
    ProviderUnavailable {
        #[source]
        source: IdpError,
        location: ErrorLocation,
    },

    #[error("Identity deletion failed: {source} {location}")]
    IdentityDeletion {
        #[source]
        source: IdpError,
        location: ErrorLocation,
    },
}

impl SyncError {
    /// True when the underlying identity provider call failed because the
    /// provider was unreachable rather than because it refused the request.
    pub fn is_provider_outage(&self) -> bool {
        match self {
            Self::IdentityCreation { source, .. }
            | Self::InvalidCredentials { source, .. }
            | Self::EmailSync { source, .. }
            | Self::IdentityDeletion { source, .. } => source.is_outage(),
            Self::ProviderUnavailable { .. } => true,
            _ => false,
        }
    }

    #[track_caller]
    pub(crate) fn persistence(source: DbError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn provider_unavailable(source: IdpError) -> Self {
        Self::ProviderUnavailable {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn profile_not_found(uid: &str) -> Self {
        Self::ProfileNotFound {
            uid: uid.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
