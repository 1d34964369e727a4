//! REST client for an Identity-Toolkit-style v1 API.
//!
//! Every call is `POST {base_url}/{endpoint}?key={api_key}` with a JSON body.
//! Privileged account calls additionally carry the configured service token
//! as a bearer credential. Error bodies look like
//! `{"error": {"code": 400, "message": "EMAIL_EXISTS"}}`; the message prefix
//! before an optional `" : detail"` suffix becomes the rejection code.

use crate::{Identity, IdentityProvider, IdpError, IdpResult, IdpSession, JwtValidator};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::json;

const SIGN_UP_ENDPOINT: &str = "accounts:signUp";
const SIGN_IN_ENDPOINT: &str = "accounts:signInWithPassword";
const LOOKUP_ENDPOINT: &str = "accounts:lookup";
const UPDATE_ENDPOINT: &str = "accounts:update";
const SEND_OOB_CODE_ENDPOINT: &str = "accounts:sendOobCode";
const DELETE_ENDPOINT: &str = "accounts:delete";

const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
const INVALID_ID_TOKEN: &str = "INVALID_ID_TOKEN";
const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
    expires_in: String,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    email_verified: bool,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP implementation of [`IdentityProvider`].
pub struct IdentityToolkitClient {
    base_url: String,
    api_key: Option<String>,
    service_token: Option<String>,
    token_validator: Option<JwtValidator>,
    client: ReqwestClient,
}

impl IdentityToolkitClient {
    /// Create a client whose every request is bounded by `timeout`.
    #[track_caller]
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> IdpResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IdpError::Unavailable {
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            service_token: None,
            token_validator: None,
            client,
        })
    }

    /// Bearer credential for lookup-by-uid, update and delete.
    pub fn with_service_token(mut self, service_token: Option<String>) -> Self {
        self.service_token = service_token;
        self
    }

    /// Validate ID tokens locally instead of asking the provider.
    pub fn with_token_validator(mut self, token_validator: Option<JwtValidator>) -> Self {
        self.token_validator = token_validator;
        self
    }

    async fn post<B, R>(&self, endpoint: &str, body: &B, privileged: bool) -> IdpResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut req = self.client.post(&url).json(body);

        if let Some(ref api_key) = self.api_key {
            req = req.query(&[("key", api_key)]);
        }
        if privileged && let Some(ref token) = self.service_token {
            req = req.bearer_auth(token);
        }

        debug!("Identity provider call: {}", endpoint);
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            let payload: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
            return serde_json::from_slice(payload).map_err(|e| IdpError::Decode {
                message: format!("{} response: {}", endpoint, e),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if status.is_server_error() {
            warn!("Identity provider {} returned {}", endpoint, status);
            return Err(IdpError::unavailable(format!(
                "{} returned {}",
                endpoint, status
            )));
        }

        match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            Ok(envelope) => {
                let message = envelope.error.message;
                let code = message
                    .split(" : ")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                debug!("Identity provider {} rejected: {}", endpoint, code);
                Err(IdpError::rejected(code, message))
            }
            Err(e) => Err(IdpError::Decode {
                message: format!("{} returned {} with unreadable body: {}", endpoint, status, e),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    async fn password_call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> IdpResult<IdpSession> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: SessionResponse = self.post(endpoint, &body, false).await?;

        let expires_in = response.expires_in.parse::<u64>().map_err(|e| IdpError::Decode {
            message: format!("expiresIn '{}': {}", response.expires_in, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(IdpSession {
            uid: response.local_id,
            email: if response.email.is_empty() {
                email.to_string()
            } else {
                response.email
            },
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_in,
        })
    }

    async fn lookup(&self, body: serde_json::Value, privileged: bool) -> IdpResult<LookupUser> {
        let response: LookupResponse = self.post(LOOKUP_ENDPOINT, &body, privileged).await?;
        response
            .users
            .into_iter()
            .next()
            .ok_or_else(|| IdpError::rejected(USER_NOT_FOUND, "lookup returned no users"))
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn create_identity(&self, email: &str, password: &str) -> IdpResult<IdpSession> {
        self.password_call(SIGN_UP_ENDPOINT, email, password).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> IdpResult<IdpSession> {
        self.password_call(SIGN_IN_ENDPOINT, email, password).await
    }

    async fn verify_token(&self, id_token: &str) -> IdpResult<String> {
        if id_token.is_empty() {
            return Err(IdpError::rejected(INVALID_ID_TOKEN, "empty ID token"));
        }

        if let Some(ref validator) = self.token_validator {
            return match validator.validate(id_token) {
                Ok(claims) => Ok(claims.sub),
                Err(crate::AuthError::TokenExpired { .. }) => {
                    Err(IdpError::rejected(TOKEN_EXPIRED, "ID token expired"))
                }
                Err(e) => Err(IdpError::rejected(INVALID_ID_TOKEN, e.to_string())),
            };
        }

        let user = self.lookup(json!({ "idToken": id_token }), false).await?;
        Ok(user.local_id)
    }

    async fn get_identity(&self, uid: &str) -> IdpResult<Identity> {
        let user = self.lookup(json!({ "localId": [uid] }), true).await?;
        Ok(Identity {
            uid: user.local_id,
            email: user.email,
            email_verified: user.email_verified,
        })
    }

    async fn update_email(&self, uid: &str, email: &str) -> IdpResult<()> {
        let _: IgnoredAny = self
            .post(UPDATE_ENDPOINT, &json!({ "localId": uid, "email": email }), true)
            .await?;
        Ok(())
    }

    async fn send_verification_email(&self, id_token: &str) -> IdpResult<()> {
        let _: IgnoredAny = self
            .post(
                SEND_OOB_CODE_ENDPOINT,
                &json!({ "requestType": "VERIFY_EMAIL", "idToken": id_token }),
                false,
            )
            .await?;
        Ok(())
    }

    async fn delete_identity(&self, uid: &str) -> IdpResult<()> {
        let _: IgnoredAny = self
            .post(DELETE_ENDPOINT, &json!({ "localId": uid }), true)
            .await?;
        Ok(())
    }
}
