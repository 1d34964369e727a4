use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] zd_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] zd_db::DbError),

    #[error("Identity provider setup failed: {0}")]
    IdentityProvider(#[from] zd_auth::IdpError),

    #[error("Token validator setup failed: {0}")]
    TokenValidator(#[from] zd_auth::AuthError),

    #[error("Failed to read token public key file {path}: {source}")]
    TokenKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
