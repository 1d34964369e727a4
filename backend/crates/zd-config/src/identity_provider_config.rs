use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IDP_BASE_URL, DEFAULT_IDP_REQUEST_TIMEOUT_SECS,
    MAX_IDP_REQUEST_TIMEOUT_SECS, MIN_IDP_REQUEST_TIMEOUT_SECS, MIN_TOKEN_SECRET_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

/// Connection settings for the hosted identity provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityProviderConfig {
    /// REST base URL, e.g. the provider's v1 endpoint or a local emulator
    pub base_url: String,
    /// Public web API key sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Bearer credential for privileged account calls (lookup by uid, update, delete)
    pub service_token: Option<String>,
    /// Expected `aud` of ID tokens; also derives the expected issuer
    pub project_id: Option<String>,
    /// HS256 secret for locally validating ID tokens (emulators, tests)
    pub token_secret: Option<String>,
    /// RS256 public key PEM, relative to the config directory
    pub token_public_key_path: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for IdentityProviderConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IDP_BASE_URL),
            api_key: None,
            service_token: None,
            project_id: None,
            token_secret: None,
            token_public_key_path: None,
            request_timeout_secs: DEFAULT_IDP_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl IdentityProviderConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::identity_provider(format!(
                "identity_provider.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.request_timeout_secs < MIN_IDP_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_IDP_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::identity_provider(format!(
                "identity_provider.request_timeout_secs must be {}-{}, got {}",
                MIN_IDP_REQUEST_TIMEOUT_SECS,
                MAX_IDP_REQUEST_TIMEOUT_SECS,
                self.request_timeout_secs
            )));
        }

        if self.token_secret.is_some() && self.token_public_key_path.is_some() {
            return Err(ConfigError::identity_provider(
                "identity_provider.token_secret and token_public_key_path are mutually exclusive",
            ));
        }

        if let Some(ref secret) = self.token_secret
            && secret.len() < MIN_TOKEN_SECRET_LENGTH
        {
            return Err(ConfigError::identity_provider(format!(
                "identity_provider.token_secret must be at least {} characters",
                MIN_TOKEN_SECRET_LENGTH
            )));
        }

        if let Some(ref key_path) = self.token_public_key_path {
            let path = Path::new(key_path);
            if path.is_absolute() || key_path.contains("..") {
                return Err(ConfigError::identity_provider(
                    "identity_provider.token_public_key_path must be relative and cannot contain '..'",
                ));
            }
            let full_path = config_dir.join(path);
            if !full_path.exists() {
                return Err(ConfigError::identity_provider(format!(
                    "identity_provider.token_public_key_path not found: {}",
                    full_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Which local token validation is configured, for logging.
    pub fn token_validation_mode(&self) -> &'static str {
        if self.token_secret.is_some() {
            "HS256"
        } else if self.token_public_key_path.is_some() {
            "RS256"
        } else {
            "remote lookup"
        }
    }
}
