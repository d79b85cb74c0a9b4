//! Configuration loading for the OAK console.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Base URL of the daemon's HTTP API, e.g. `http://localhost:4665`.
    pub api_base_url: String,
    pub auth: AuthConfig,
    pub request_timeout_ms: u64,
    /// How often background views re-poll the daemon. Refreshes are
    /// suppressed while a form holds unsaved edits.
    pub refresh_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    pub api_key: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or OAK_CONSOLE_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConsoleConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ConsoleConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("OAK_CONSOLE_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ConsoleConfig {
        ConsoleConfig {
            api_base_url: "http://localhost:4665".to_string(),
            auth: AuthConfig { api_key: None },
            request_timeout_ms: 5_000,
            refresh_interval_ms: 2_000,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let mut config = base_config();
        config.api_base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let mut config = base_config();
        config.request_timeout_ms = 0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.refresh_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_toml_file() -> Result<(), ConfigError> {
        let dir = tempfile::tempdir().map_err(ConfigError::Io)?;
        let path = dir.path().join("console.toml");
        std::fs::write(
            &path,
            r#"
api_base_url = "http://localhost:4665"
request_timeout_ms = 5000
refresh_interval_ms = 2000

[auth]
api_key = "local-dev"
"#,
        )
        .map_err(ConfigError::Io)?;

        let config = ConsoleConfig::from_path(&path)?;
        config.validate()?;
        assert_eq!(config.auth.api_key.as_deref(), Some("local-dev"));
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<ConsoleConfig, _> = toml::from_str(
            r#"
api_base_url = "http://localhost:4665"
request_timeout_ms = 5000
refresh_interval_ms = 2000
grpc_endpoint = "http://localhost:50051"

[auth]
"#,
        );
        assert!(result.is_err());
    }
}
