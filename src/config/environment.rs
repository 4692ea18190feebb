//! Deployment environment selection
//!
//! Picks which `config/{environment}.toml` overlay is loaded and how strict
//! validation is about the superuser's seed credentials.

use std::fmt;
use std::str::FromStr;

use crate::config::error::ConfigError;

/// Where the service is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Variable naming the active environment
    pub const ENV_VAR: &'static str = "USERADMIN_APP_ENV";

    const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Test,
        Environment::Staging,
        Environment::Production,
    ];

    /// Reads `USERADMIN_APP_ENV`, falling back to development when it is unset or unknown.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Canonical name, also the stem of the overlay file
    pub fn as_str(&self) -> &'static str {
        self.names()[0]
    }

    /// Canonical name first, then accepted short forms.
    fn names(&self) -> &'static [&'static str] {
        match self {
            Environment::Development => &["development", "dev"],
            Environment::Test => &["test"],
            Environment::Staging => &["staging", "stage"],
            Environment::Production => &["production", "prod"],
        }
    }

    /// Whether the superuser may still log in with its well-known seed password.
    ///
    /// Production binds a public address, so the seed password there must come
    /// from `USERADMIN_AUTH__INITIAL_PASSWORD` or a local override.
    pub fn allows_default_superuser_password(&self) -> bool {
        !matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|env| env.names().contains(&wanted.as_str()))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(Environment::as_str).collect();
                ConfigError::EnvVarError(format!(
                    "Unknown environment '{}' in {}. Valid values are: {}",
                    s,
                    Self::ENV_VAR,
                    known.join(", ")
                ))
            })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
