use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HANDLER_TIMEOUT_SECS, MAX_HANDLER_TIMEOUT_SECS,
    MIN_HANDLER_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Handler configuration for request processing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Maximum time in seconds for a request, including remote calls
    pub timeout_secs: u64,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HANDLER_TIMEOUT_SECS,
        }
    }
}

impl HandlerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs < MIN_HANDLER_TIMEOUT_SECS
            || self.timeout_secs > MAX_HANDLER_TIMEOUT_SECS
        {
            return Err(ConfigError::config(format!(
                "handler.timeout_secs must be {}-{}, got {}",
                MIN_HANDLER_TIMEOUT_SECS, MAX_HANDLER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
