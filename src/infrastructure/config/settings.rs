//! Application configuration loading and validation.
//!
//! Non-secret settings come from an optional TOML file. The Telegram
//! credentials and webhook secret are read from the environment only, and
//! `HOST`/`PORT` override the file's `[server]` table.
//!
//! # Example
//!
//! ```no_run
//! use mintwatch::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("mintwatch.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::telegram::TelegramSettings;
use crate::error::{ConfigError, Result};

pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_WEBHOOK_SECRET: &str = "WEBHOOK_SECRET";
pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "HOST";

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,
    /// Bot credential and target chat.
    pub telegram: TelegramSettings,
    /// Shared secret required on webhook calls. `None` disables the check.
    pub webhook_secret: Option<String>,
}

/// Shape of the TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    server: ServerConfig,
    logging: LoggingConfig,
}

impl Config {
    /// Load configuration from `path` and the process environment.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if required
    /// environment variables are missing or invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = match fs::read_to_string(path.as_ref()) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };
        Self::from_sources(content.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build configuration from optional TOML content and an environment lookup.
    ///
    /// All missing required variables are reported together.
    ///
    /// # Errors
    ///
    /// Returns an error on unparseable TOML, missing variables, or invalid values.
    pub fn from_sources<F>(toml_content: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = match toml_content {
            Some(content) => toml::from_str(content).map_err(ConfigError::Parse)?,
            None => FileConfig::default(),
        };

        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let bot_token = lookup(ENV_BOT_TOKEN);
        let chat_id = lookup(ENV_CHAT_ID);
        let missing: Vec<&'static str> = [(ENV_BOT_TOKEN, &bot_token), (ENV_CHAT_ID, &chat_id)]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name)
            .collect();

        let (Some(bot_token), Some(chat_id)) = (bot_token, chat_id) else {
            return Err(ConfigError::MissingEnv { vars: missing }.into());
        };

        let chat_id = chat_id
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidValue {
                field: ENV_CHAT_ID,
                reason: e.to_string(),
            })?;

        let mut server = file.server;
        if let Some(host) = lookup(ENV_HOST) {
            server.host = host.trim().to_string();
        }
        if let Some(port) = lookup(ENV_PORT) {
            server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: ENV_PORT,
                    reason: e.to_string(),
                })?;
        }

        let config = Self {
            server,
            logging: file.logging,
            telegram: TelegramSettings { bot_token, chat_id },
            webhook_secret: lookup(ENV_WEBHOOK_SECRET),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host",
                reason: "must not be empty".into(),
            }
            .into());
        }
        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected one of {:?}", LoggingConfig::FORMATS),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::Error;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![(ENV_BOT_TOKEN, "123:abc"), (ENV_CHAT_ID, "-1001234")]
    }

    #[test]
    fn minimal_env_uses_defaults() {
        let config = Config::from_sources(None, env_of(&required())).unwrap();

        assert_eq!(config.server.port, 10000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.telegram.chat_id, -1_001_234);
        assert_eq!(config.telegram.bot_token, "123:abc");
        assert!(config.webhook_secret.is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn all_missing_variables_are_reported() {
        let err = Config::from_sources(None, env_of(&[])).unwrap_err();
        match err {
            Error::Config(ConfigError::MissingEnv { vars }) => {
                assert_eq!(vars, vec![ENV_BOT_TOKEN, ENV_CHAT_ID]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_variable_counts_as_missing() {
        let err =
            Config::from_sources(None, env_of(&[(ENV_BOT_TOKEN, "  "), (ENV_CHAT_ID, "1")]))
                .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingEnv { ref vars }) if vars == &vec![ENV_BOT_TOKEN]
        ));
    }

    #[test]
    fn non_numeric_chat_id_is_rejected() {
        let err = Config::from_sources(
            None,
            env_of(&[(ENV_BOT_TOKEN, "t"), (ENV_CHAT_ID, "@channel")]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: ENV_CHAT_ID, .. })
        ));
    }

    #[test]
    fn empty_secret_is_treated_as_unset() {
        let mut env = required();
        env.push((ENV_WEBHOOK_SECRET, ""));
        let config = Config::from_sources(None, env_of(&env)).unwrap();
        assert!(config.webhook_secret.is_none());
    }

    #[test]
    fn secret_is_read_from_env() {
        let mut env = required();
        env.push((ENV_WEBHOOK_SECRET, "hunter2"));
        let config = Config::from_sources(None, env_of(&env)).unwrap();
        assert_eq!(config.webhook_secret.as_deref(), Some("hunter2"));
    }

    #[test]
    fn file_settings_are_applied() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [logging]
            level = "debug"
            format = "json"
        "#;
        let config = Config::from_sources(Some(toml), env_of(&required())).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn env_overrides_file_port_and_host() {
        let mut env = required();
        env.push((ENV_PORT, "9000"));
        env.push((ENV_HOST, "127.0.0.1"));
        let toml = "[server]\nport = 8080\n";
        let config = Config::from_sources(Some(toml), env_of(&env)).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn invalid_port_is_rejected() {
        for port in ["abc", "70000", "0"] {
            let mut env = required();
            env.push((ENV_PORT, port));
            assert!(
                Config::from_sources(None, env_of(&env)).is_err(),
                "port {port} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_logging_format_is_rejected() {
        let toml = "[logging]\nformat = \"xml\"\n";
        let err = Config::from_sources(Some(toml), env_of(&required())).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "logging.format", .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::from_sources(Some("[server"), env_of(&required())).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn secrets_in_file_are_rejected() {
        let toml = "[telegram]\nbot_token = \"leak\"\n";
        let err = Config::from_sources(Some(toml), env_of(&required())).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_not_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("absent.toml"));
        assert!(!matches!(
            result,
            Err(Error::Config(ConfigError::ReadFile(_) | ConfigError::Parse(_)))
        ));
    }
}
