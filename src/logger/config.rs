//! Runtime logger configuration

use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use crate::logger::LoggerError;

/// Everything needed to install the global subscriber
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level, e.g. `info`
    pub level: String,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

impl LoggerConfig {
    pub fn validate(&self) -> Result<(), LoggerError> {
        self.level
            .parse::<Level>()
            .map_err(|_| LoggerError::config(format!("Invalid log level '{}'", self.level)))?;

        if self.file.enabled && self.file.path.as_os_str().is_empty() {
            return Err(LoggerError::config(
                "File path cannot be empty when file output is enabled",
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(LoggerError::config(
                "At least one output (console or file) must be enabled",
            ));
        }

        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: ConsoleConfig {
                enabled: true,
                colored: true,
            },
            file: FileConfig {
                enabled: false,
                path: PathBuf::from("logs/useradmin.log"),
                append: true,
                format: LogFormat::Json,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// ANSI colours, only honoured when stdout is a terminal
    pub colored: bool,
}

#[derive(Debug, Clone)]
pub struct FileConfig {
    pub enabled: bool,
    pub path: PathBuf,
    /// Truncate on startup when false
    pub append: bool,
    pub format: LogFormat,
}

/// Line format of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggerError::config(format!(
                "Invalid log format '{}'. Valid formats are: full, compact, json",
                s
            ))),
        }
    }
}
