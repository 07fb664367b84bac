//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://...` or `sqlite:...`
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

// Default value functions
fn default_app_name() -> String {
    "memos".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    1
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match var("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidValue("LOG_FORMAT", other.to_string())),
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
                log_format,
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var(&var, "DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var(&var, "DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
        })
    }
}

fn parse_var<F>(var: &F, key: &'static str) -> Result<Option<u32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|s| s.parse().map_err(|_| ConfigError::InvalidValue(key, s)))
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
