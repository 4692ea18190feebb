//! CLI argument validation functions
//!
//! Value parsers for arguments that clap cannot validate on its own.

use std::fs;
use std::net::IpAddr;
use std::path::PathBuf;

use tracing::Level;

use crate::config::Environment;

/// Parse `--env`, accepting the same names and short forms as `USERADMIN_APP_ENV`
pub fn parse_environment(env_str: &str) -> Result<Environment, String> {
    env_str.parse().map_err(|e: crate::config::ConfigError| e.to_string())
}

/// Parse `--log-level`, case-insensitively
pub fn parse_log_level(level_str: &str) -> Result<Level, String> {
    level_str.parse().map_err(|_| {
        format!(
            "Invalid log level '{}'. Valid levels are: error, warn, info, debug, trace",
            level_str
        )
    })
}

/// Validate port number is within valid range (1-65535)
pub fn validate_port(port_str: &str) -> Result<u16, String> {
    let port: u16 = port_str
        .parse()
        .map_err(|_| format!("Port must be a valid number between 1 and 65535, got: '{}'", port_str))?;

    if port == 0 {
        return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
    }

    Ok(port)
}

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate host address format
///
/// Accepts IP literals and hostnames. Dotted all-digit strings must be valid IPv4.
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    let host = host_str.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host.contains(char::is_whitespace) {
        return Err("Host address cannot contain spaces".to_string());
    }

    if host.parse::<IpAddr>().is_ok() {
        return Ok(host.to_string());
    }

    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(format!("Invalid IPv4 address format: '{}'", host_str));
    }

    if host.len() > 253 {
        return Err("Host address is too long (maximum 253 characters)".to_string());
    }

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("Error").unwrap(), Level::ERROR);
        assert!(parse_log_level("chatty").unwrap_err().contains("chatty"));
    }

    #[test]
    fn test_parse_environment_reports_valid_values() {
        assert_eq!(parse_environment("dev").unwrap(), Environment::Development);
        assert!(parse_environment("qa").unwrap_err().contains("production"));
    }

    #[test]
    fn test_port_validation_valid_ports() {
        for port_str in ["1", "80", "7474", "65535"] {
            assert!(validate_port(port_str).is_ok(), "Port {} should be valid", port_str);
        }
    }

    #[test]
    fn test_port_validation_invalid_ports() {
        for port_str in ["0", "65536", "abc", "-1", ""] {
            assert!(validate_port(port_str).is_err(), "Port {} should be invalid", port_str);
        }
    }

    #[test]
    fn test_host_validation_valid_hosts() {
        let valid_hosts = ["localhost", "127.0.0.1", "0.0.0.0", "::1", "db.example.com"];

        for host in valid_hosts {
            assert!(validate_host_address(host).is_ok(), "Host {} should be valid", host);
        }
    }

    #[test]
    fn test_host_validation_invalid_hosts() {
        let long_host = "x".repeat(300);
        let invalid_hosts = ["", "   ", "host with spaces", "999.999.999.999", long_host.as_str()];

        for host in invalid_hosts {
            assert!(validate_host_address(host).is_err(), "Host '{}' should be invalid", host);
        }
    }

    #[test]
    fn test_config_file_path_validation() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), PathBuf::from(path));

        let dir = file.path().parent().unwrap().to_str().unwrap();
        assert!(validate_config_file_path(dir).is_err());
        assert!(validate_config_file_path("/definitely/not/here.toml").is_err());
    }
}
