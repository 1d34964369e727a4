use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure of a call to the identity provider.
#[derive(Error, Debug)]
pub enum IdpError {
    /// The provider answered and refused the request (bad credentials,
    /// duplicate email, invalid token, unknown user, ...).
    #[error("Identity provider rejected request: {code}: {message} {location}")]
    Rejected {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider response could not be decoded: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl IdpError {
    #[track_caller]
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The provider could not be reached or did not answer sensibly,
    /// as opposed to refusing the request.
    pub fn is_outage(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    /// Provider error code for rejections, e.g. `EMAIL_EXISTS`.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IdpError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_decode() {
            Self::Decode {
                message: source.to_string(),
                location,
            }
        } else {
            Self::Unavailable {
                message: source.to_string(),
                location,
            }
        }
    }
}

/// Failure to authenticate an inbound request.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed authorization header: {message} {location}")]
    MalformedHeader {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token verification unavailable: {source} {location}")]
    ProviderUnavailable {
        #[source]
        source: IdpError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedHeader { .. } => "MALFORMED_AUTH_HEADER",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::ProviderUnavailable { .. } => "PROVIDER_UNAVAILABLE",
        }
    }
}

impl From<IdpError> for AuthError {
    /// Any refusal by the provider is an invalid token; reasons are not distinguished.
    #[track_caller]
    fn from(source: IdpError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_outage() {
            Self::ProviderUnavailable { source, location }
        } else {
            Self::InvalidToken {
                message: "token rejected by identity provider".to_string(),
                location,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

pub type IdpResult<T> = std::result::Result<T, IdpError>;
