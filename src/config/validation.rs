//! Checks applied to settings after every source has been merged

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::{AuthConfig, LoggerSettings, ServerConfig, Settings};

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Fails with `field` unless `value` (case-insensitive) is one of `allowed`.
fn one_of(field: &str, what: &str, value: &str, allowed: &[&str]) -> Result<(), ConfigError> {
    if allowed.contains(&value.to_ascii_lowercase().as_str()) {
        return Ok(());
    }

    Err(ConfigError::validation(
        field.to_string(),
        format!(
            "Invalid {} '{}'. Valid values are: {}",
            what,
            value,
            allowed.join(", ")
        ),
    ))
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_password.is_empty() {
            return Err(ConfigError::validation(
                "auth.initial_password",
                "Initial superuser password cannot be empty.",
            ));
        }

        Ok(())
    }

    /// Also refuses the well-known seed password where `environment` forbids it.
    pub fn validate_for(&self, environment: Environment) -> Result<(), ConfigError> {
        self.validate()?;

        if self.uses_default_password() && !environment.allows_default_superuser_password() {
            return Err(ConfigError::validation(
                "auth.initial_password".to_string(),
                format!(
                    "The superuser cannot keep its default password in {}. \
                     Set USERADMIN_AUTH__INITIAL_PASSWORD.",
                    environment
                ),
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        one_of("logger.level", "log level", &self.level, VALID_LOG_LEVELS)?;
        one_of(
            "logger.file.format",
            "log format",
            &self.file.format,
            VALID_LOG_FORMATS,
        )?;

        if self.file.enabled && self.file.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Environment-independent checks, returning the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.auth.validate()?;
        self.logger.validate()
    }

    /// Full check for settings about to run in `environment`.
    pub fn validate_for(&self, environment: Environment) -> Result<(), ConfigError> {
        self.validate()?;
        self.auth.validate_for(environment)
    }
}
