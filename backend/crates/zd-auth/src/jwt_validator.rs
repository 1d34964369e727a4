use crate::{AuthError, Claims, JwtAlgorithm, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

const ISSUER_PREFIX: &str = "https://securetoken.google.com/";
const LEEWAY_SECS: u64 = 30;

/// Local ID token validator
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], project_id: Option<&str>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Self::validation(Algorithm::HS256, project_id),
            algorithm: Algorithm::HS256,
        }
    }

    /// Create validator with RS256 (asymmetric public key)
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str, project_id: Option<&str>) -> AuthErrorResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self {
            decoding_key,
            validation: Self::validation(Algorithm::RS256, project_id),
            algorithm: Algorithm::RS256,
        })
    }

    #[track_caller]
    pub fn from_algorithm(algorithm: &JwtAlgorithm, project_id: Option<&str>) -> AuthErrorResult<Self> {
        match algorithm {
            JwtAlgorithm::HS256 { secret } => Ok(Self::with_hs256(secret, project_id)),
            JwtAlgorithm::RS256 { public_key_pem } => Self::with_rs256(public_key_pem, project_id),
        }
    }

    /// With a project id, `aud` must equal it and `iss` must be the provider's
    /// issuer for that project. Without one neither is checked.
    fn validation(algorithm: Algorithm, project_id: Option<&str>) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;

        match project_id {
            Some(project_id) => {
                validation.set_audience(&[project_id]);
                validation.set_issuer(&[format!("{}{}", ISSUER_PREFIX, project_id)]);
            }
            None => validation.validate_aud = false,
        }

        validation
    }

    /// Validate JWT token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}
