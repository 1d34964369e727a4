use crate::{
    ApiError, AppState, delete_me, get_me, health, log_in, log_out, sign_up, update_font_size,
    update_me,
};

use std::panic::Location;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    routing::{get, post, put},
};
use error_location::ErrorLocation;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authentication
        .route("/auth/signup", post(sign_up))
        .route("/auth/login", post(log_in))
        .route("/auth/logout", post(log_out))
        // Own profile
        .route("/users/me", get(get_me).patch(update_me).delete(delete_me))
        .route("/users/me/font-size", put(update_font_size))
        .with_state(state)
        // Dropping the handler future on timeout cancels in-flight provider and database calls
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout {
            location: ErrorLocation::from(Location::caller()),
        }
    } else {
        log::error!("Unhandled middleware error: {}", err);
        ApiError::Internal {
            code: "INTERNAL_ERROR",
            message: "Request could not be processed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
