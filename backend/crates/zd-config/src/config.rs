use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, HandlerConfig, IdentityProviderConfig, LoggingConfig, ServerConfig, SyncConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub identity_provider: IdentityProviderConfig,
    pub sync: SyncConfig,
    pub handler: HandlerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ZD_CONFIG_DIR env var, else use ./.zd/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ZD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ZD_CONFIG_DIR env var > ./.zd/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.identity_provider.validate(&config_dir)?;
        self.handler.validate()?;

        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the ID token public key, if configured.
    pub fn token_public_key_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.identity_provider.token_public_key_path {
            Some(ref key_path) => Ok(Some(Self::config_dir()?.join(key_path))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  identity_provider: {} (api key: {}, service token: {}, tokens: {}, timeout {}s)",
            self.identity_provider.base_url,
            if self.identity_provider.api_key.is_some() {
                "set"
            } else {
                "missing"
            },
            if self.identity_provider.service_token.is_some() {
                "set"
            } else {
                "none"
            },
            self.identity_provider.token_validation_mode(),
            self.identity_provider.request_timeout_secs
        );
        info!(
            "  sync: verification_email={}, require_verified={}, compensate={}",
            self.sync.send_verification_email,
            self.sync.require_verified_email,
            self.sync.compensate_on_profile_failure
        );
        info!("  handler: timeout={}s", self.handler.timeout_secs);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("ZD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ZD_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("ZD_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "ZD_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Identity provider
        Self::apply_env_string("ZD_IDP_BASE_URL", &mut self.identity_provider.base_url);
        Self::apply_env_option_string("ZD_IDP_API_KEY", &mut self.identity_provider.api_key);
        Self::apply_env_option_string(
            "ZD_IDP_SERVICE_TOKEN",
            &mut self.identity_provider.service_token,
        );
        Self::apply_env_option_string("ZD_IDP_PROJECT_ID", &mut self.identity_provider.project_id);
        Self::apply_env_option_string(
            "ZD_IDP_TOKEN_SECRET",
            &mut self.identity_provider.token_secret,
        );
        Self::apply_env_option_string(
            "ZD_IDP_TOKEN_PUBLIC_KEY_PATH",
            &mut self.identity_provider.token_public_key_path,
        );
        Self::apply_env_parse(
            "ZD_IDP_REQUEST_TIMEOUT_SECS",
            &mut self.identity_provider.request_timeout_secs,
        );

        // Sync policy
        Self::apply_env_bool(
            "ZD_SYNC_SEND_VERIFICATION_EMAIL",
            &mut self.sync.send_verification_email,
        );
        Self::apply_env_bool(
            "ZD_SYNC_REQUIRE_VERIFIED_EMAIL",
            &mut self.sync.require_verified_email,
        );
        Self::apply_env_bool(
            "ZD_SYNC_COMPENSATE_ON_PROFILE_FAILURE",
            &mut self.sync.compensate_on_profile_failure,
        );

        // Handler
        Self::apply_env_parse("ZD_HANDLER_TIMEOUT_SECS", &mut self.handler.timeout_secs);

        // Logging
        Self::apply_env_parse("ZD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ZD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ZD_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
