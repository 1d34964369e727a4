use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Settings serialization failed: {source} {location}")]
    Serialization {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid profile: {message} {location}")]
    InvalidProfile {
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile not found: {id} {location}")]
    ProfileNotFound { id: i64, location: ErrorLocation },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    /// True when the error is a UNIQUE / CHECK constraint violation.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Sqlx {
                source: sqlx::Error::Database(db_err),
                ..
            } => matches!(
                db_err.kind(),
                sqlx::error::ErrorKind::UniqueViolation | sqlx::error::ErrorKind::CheckViolation
            ),
            Self::InvalidProfile { .. } => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
