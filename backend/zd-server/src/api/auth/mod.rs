#[allow(clippy::module_inception)]
pub mod auth;
pub mod auth_response;
pub mod credentials_request;
