pub mod claims;
pub mod error;
pub mod identity;
pub mod identity_provider;
pub mod identity_toolkit_client;
pub mod jwt_algorithm;
pub mod jwt_validator;
pub mod request_authenticator;

pub use claims::Claims;
pub use error::{AuthError, IdpError, IdpResult, Result};
pub use identity::{Identity, IdpSession};
pub use identity_provider::IdentityProvider;
pub use identity_toolkit_client::IdentityToolkitClient;
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::JwtValidator;
pub use request_authenticator::RequestAuthenticator;
