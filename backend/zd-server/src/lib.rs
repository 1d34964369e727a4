pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{log_in, log_out, sign_up},
        auth_response::AuthResponse,
        credentials_request::CredentialsRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    message_response::MessageResponse,
    users::{
        font_size_request::FontSizeRequest,
        profile_dto::ProfileDto,
        users::{delete_me, get_me, update_font_size, update_me},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
