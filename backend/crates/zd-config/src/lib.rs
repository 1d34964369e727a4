mod config;
mod database_config;
mod error;
mod handler_config;
mod identity_provider_config;
mod log_level;
mod logging_config;
mod server_config;
mod sync_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use handler_config::HandlerConfig;
pub use identity_provider_config::IdentityProviderConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sync_config::SyncConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "ZD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".zd";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "zerodelay.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_IDP_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_IDP_REQUEST_TIMEOUT_SECS: u64 = 10;
const MIN_IDP_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_IDP_REQUEST_TIMEOUT_SECS: u64 = 120;
const MIN_TOKEN_SECRET_LENGTH: usize = 32;

const DEFAULT_SEND_VERIFICATION_EMAIL: bool = true;
const DEFAULT_REQUIRE_VERIFIED_EMAIL: bool = false;
const DEFAULT_COMPENSATE_ON_PROFILE_FAILURE: bool = false;

const DEFAULT_HANDLER_TIMEOUT_SECS: u64 = 30;
const MIN_HANDLER_TIMEOUT_SECS: u64 = 1;
const MAX_HANDLER_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
