//! Layered settings loading
//!
//! Sources, later ones winning:
//! 1. `default.toml` (required)
//! 2. `{environment}.toml`
//! 3. `local.toml`
//! 4. `USERADMIN_*` variables, `__` between nested keys (`USERADMIN_AUTH__INITIAL_PASSWORD`)
//!
//! A single file named by `USERADMIN_CONFIG_FILE` or `--config` replaces steps 1 to 3.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Directory holding `default.toml` and the overlays
pub const CONFIG_DIR_ENV: &str = "USERADMIN_CONFIG_DIR";

/// Single settings file, exclusive with `USERADMIN_CONFIG_DIR`
pub const CONFIG_FILE_ENV: &str = "USERADMIN_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

const ENV_PREFIX: &str = "USERADMIN";

const ENV_SEPARATOR: &str = "__";

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

/// Where settings come from for one run
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Reads `USERADMIN_CONFIG_DIR`, `USERADMIN_CONFIG_FILE` and `USERADMIN_APP_ENV`.
    ///
    /// Fails when both the directory and the single file are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok();

        if config_dir.is_some() && config_file.is_some() {
            return Err(ConfigError::mutual_exclusivity(format!(
                "{CONFIG_DIR_ENV} and {CONFIG_FILE_ENV} cannot both be set. \
                 Use {CONFIG_DIR_ENV} for layered configuration or \
                 {CONFIG_FILE_ENV} for a single configuration file."
            )));
        }

        Ok(Self {
            config_dir: PathBuf::from(config_dir.as_deref().unwrap_or(DEFAULT_CONFIG_DIR)),
            config_file: config_file.map(PathBuf::from),
            environment: AppEnvironment::from_env(),
        })
    }

    /// Load only `path` instead of the layered directory files
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Override the environment read from `USERADMIN_APP_ENV`
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Merges every source, then validates the result for the selected environment.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let builder = match &self.config_file {
            Some(file) => Self::add_file_source(Config::builder(), file, true)?,
            None => self.add_layered_sources(Config::builder())?,
        };

        let settings: Settings = Self::add_env_source(builder)
            .build()?
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize configuration: {e}")))?;

        settings.validate_for(self.environment)?;
        Ok(settings)
    }

    fn add_layered_sources(&self, builder: Builder) -> Result<Builder, ConfigError> {
        let overlay = format!("{}.toml", self.environment);

        let builder = Self::add_file_source(builder, &self.config_dir.join("default.toml"), true)?;
        let builder = Self::add_file_source(builder, &self.config_dir.join(overlay), false)?;
        Self::add_file_source(builder, &self.config_dir.join("local.toml"), false)
    }

    fn add_file_source(builder: Builder, path: &Path, required: bool) -> Result<Builder, ConfigError> {
        if required && !path.is_file() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        let name = path.to_str().ok_or_else(|| {
            ConfigError::ParseError(format!(
                "Configuration path is not valid UTF-8: {}",
                path.display()
            ))
        })?;

        Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
    }

    fn add_env_source(builder: Builder) -> Builder {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}
