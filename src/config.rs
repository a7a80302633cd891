//! Configuration management for brandaudit.
//!
//! Non-secret settings (endpoints, timeouts, addresses) live in
//! `./config/brandaudit.toml`; defaults exist only in the bundled template.
//! Secrets (API keys, the mailing list id) are resolved from the environment
//! once at startup into a [`Credentials`] value and injected into the
//! network clients. The audit core itself takes no configuration.

use serde::Deserialize;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file path relative to working directory
pub const CONFIG_PATH: &str = "./config/brandaudit.toml";

/// Default configuration file content - this is the ONLY place defaults exist
pub const DEFAULT_CONFIG: &str = include_str!("../config/brandaudit.toml");

/// Environment variable holding the search provider API key
pub const SERP_API_KEY_VAR: &str = "SERPAPI_KEY";
/// Environment variable holding the transactional email API key
pub const NOTIFY_API_KEY_VAR: &str = "RESEND_API_KEY";
/// Environment variable holding the mailing list API token
pub const SUBSCRIBE_AUTH_TOKEN_VAR: &str = "BENCHMARK_AUTH_TOKEN";
/// Environment variable holding the mailing list id
pub const SUBSCRIBE_LIST_ID_VAR: &str = "BENCHMARK_LIST_ID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found at {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid URL in '{field}': {url}")]
    InvalidUrl { field: String, url: String },

    #[error("Configuration field '{field}' cannot be empty")]
    EmptyRequired { field: String },

    #[error("Missing environment variable '{var}' ({purpose})")]
    MissingCredential {
        var: &'static str,
        purpose: &'static str,
    },
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub serp: SerpConfig,
    pub notify: NotifyConfig,
    pub subscribe: SubscribeConfig,
}

/// HTTP client configuration shared by all network clients
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub user_agent: String,
}

/// Search provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SerpConfig {
    /// Base URL of the SerpAPI-compatible endpoint
    pub endpoint: String,
    /// Search engine passed through to the provider
    pub engine: String,
    /// Caller-side timeout; a timed-out query fails the whole audit
    pub request_timeout_secs: u64,
}

/// Transactional email configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Base URL of the Resend-compatible endpoint
    pub endpoint: String,
    /// Sender address, e.g. "Brand Audit <audit@example.com>"
    pub from: String,
    /// Sales address that receives completed reports
    pub to: String,
    pub request_timeout_secs: u64,
}

/// Mailing list configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeConfig {
    /// Base URL of the Benchmark-compatible contact API
    pub endpoint: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from the default path
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(Path::new(CONFIG_PATH))
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.user_agent.is_empty() {
            return Err(ConfigError::EmptyRequired {
                field: "http.user_agent".to_string(),
            });
        }

        Self::validate_endpoint("serp.endpoint", &self.serp.endpoint)?;
        Self::validate_endpoint("notify.endpoint", &self.notify.endpoint)?;
        Self::validate_endpoint("subscribe.endpoint", &self.subscribe.endpoint)?;

        for (field, value) in [
            ("serp.engine", &self.serp.engine),
            ("notify.from", &self.notify.from),
            ("notify.to", &self.notify.to),
        ] {
            if value.is_empty() {
                return Err(ConfigError::EmptyRequired {
                    field: field.to_string(),
                });
            }
        }

        for (field, secs) in [
            ("serp.request_timeout_secs", self.serp.request_timeout_secs),
            ("notify.request_timeout_secs", self.notify.request_timeout_secs),
            ("subscribe.request_timeout_secs", self.subscribe.request_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::EmptyRequired {
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }

    fn validate_endpoint(field: &str, url: &str) -> Result<(), ConfigError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl {
                field: field.to_string(),
                url: url.to_string(),
            });
        }
        Ok(())
    }

    /// Create default configuration file at the standard location
    pub fn create_default_config() -> Result<PathBuf, ConfigError> {
        let path = Path::new(CONFIG_PATH);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(path)?;
        file.write_all(DEFAULT_CONFIG.as_bytes())?;

        Ok(path.to_path_buf())
    }

    /// Check if stdin is a TTY (interactive terminal)
    pub fn is_interactive() -> bool {
        io::stdin().is_terminal()
    }

    /// Interactively offer to create the default config file.
    /// Returns Ok(Some(path)) if created, Ok(None) if declined or
    /// non-interactive.
    pub fn prompt_create_config() -> Result<Option<PathBuf>, ConfigError> {
        if !Self::is_interactive() {
            return Ok(None);
        }

        print!(
            "Configuration file not found. Create a default one at {}? [Y/n] ",
            CONFIG_PATH
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();

        if answer.is_empty() || answer == "y" || answer == "yes" {
            Ok(Some(Self::create_default_config()?))
        } else {
            Ok(None)
        }
    }
}

/// API secrets resolved from the environment at startup.
///
/// Which variables are required depends on which side channels the run uses:
/// the search key is always needed, the notify/subscribe credentials only
/// when those channels are not skipped.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub serp_api_key: String,
    pub notify_api_key: Option<String>,
    pub subscribe_auth_token: Option<String>,
    pub subscribe_list_id: Option<String>,
}

impl Credentials {
    pub fn from_env(need_notify: bool, need_subscribe: bool) -> Result<Self, ConfigError> {
        let serp_api_key = Self::required(SERP_API_KEY_VAR, "search provider API key")?;

        let notify_api_key = if need_notify {
            Some(Self::required(NOTIFY_API_KEY_VAR, "transactional email API key")?)
        } else {
            None
        };

        let (subscribe_auth_token, subscribe_list_id) = if need_subscribe {
            (
                Some(Self::required(SUBSCRIBE_AUTH_TOKEN_VAR, "mailing list API token")?),
                Some(Self::required(SUBSCRIBE_LIST_ID_VAR, "mailing list id")?),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            serp_api_key,
            notify_api_key,
            subscribe_auth_token,
            subscribe_list_id,
        })
    }

    fn required(var: &'static str, purpose: &'static str) -> Result<String, ConfigError> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::MissingCredential { var, purpose }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        toml::from_str(DEFAULT_CONFIG).expect("default config must parse")
    }

    #[test]
    fn test_default_config_parses_and_validates() {
        let config = valid_config();
        config.validate().expect("default config must validate");
        assert_eq!(config.serp.engine, "google");
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = valid_config();
        config.http.user_agent = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRequired { .. })
        ));
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let mut config = valid_config();
        config.serp.endpoint = "ftp://serpapi.com".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.notify.request_timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRequired { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_file_not_found() {
        let err = AppConfig::load_from_path(Path::new("./does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
