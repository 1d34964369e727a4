use crate::ApiError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Body of `POST /auth/signup` and `POST /auth/login`
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

impl CredentialsRequest {
    #[track_caller]
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "email is required".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation {
                message: "password is required".to_string(),
                field: Some("password".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
