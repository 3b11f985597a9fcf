//! Environment-based configuration.
//!
//! Values are resolved in priority order:
//! 1. Environment variables
//! 2. .env file (loaded explicitly via `load_from_file`)
//! 3. Defaults

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::{env, fs};

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// From APP_ENV, defaulting to Development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// Full terminal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub app_name: String,
    pub version: String,
    pub api: ApiConfig,
    pub inventory: InventoryConfig,
    pub logging: LoggingConfig,
}

/// Remote Catalog/Sales service endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base path of the HTTP API, e.g. http://localhost:8000/api
    pub base_url: String,

    /// Bearer token attached as `Authorization: Token <value>`. Lifecycle is
    /// external to the terminal core.
    pub token: Option<String>,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Stock below this count is flagged as low (display only)
    pub low_stock_threshold: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,

    /// Log to a daily file under the data directory
    pub log_to_file: bool,

    /// Log to stdout/stderr
    pub log_to_stdout: bool,

    /// JSON format (true in production)
    pub json_format: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::from_env();

        Self {
            environment,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "pos-terminal".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),

            api: ApiConfig {
                base_url: env::var("POS_API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
                token: env::var("POS_API_TOKEN").ok(),
                request_timeout_secs: env::var("POS_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(15),
                connect_timeout_secs: env::var("POS_API_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            },

            inventory: InventoryConfig {
                low_stock_threshold: env::var("LOW_STOCK_THRESHOLD")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            },

            logging: LoggingConfig {
                level: env::var("RUST_LOG").unwrap_or_else(|_| {
                    if environment.is_production() {
                        "warn".to_string()
                    } else {
                        "debug".to_string()
                    }
                }),
                log_to_file: env::var("LOG_TO_FILE").map(|s| s == "true").unwrap_or(false),
                log_to_stdout: env::var("LOG_TO_STDOUT")
                    .map(|s| s == "true")
                    .unwrap_or(true),
                json_format: environment.is_production(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::default()
    }

    /// Load a .env file (key=value lines) into the process environment, then
    /// resolve the configuration as usual.
    pub fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = fs::read_to_string(path).ok()?;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                env::set_var(key, value);
            }
        }

        Some(Self::default())
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    /// Sanity checks before the terminal talks to a production backend.
    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err("POS_API_BASE_URL must not be empty".to_string());
        }

        if self.is_production() {
            if self.api.token.is_none() {
                return Err(
                    "POS_API_TOKEN must be set in production; the API rejects \
                     unauthenticated requests."
                        .to_string(),
                );
            }

            if self.api.base_url.contains("localhost") {
                eprintln!("WARNING: production terminal pointed at a localhost API");
            }
        }

        Ok(())
    }
}

/// Global configuration instance
static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn init_config() -> &'static AppConfig {
    GLOBAL_CONFIG.get_or_init(AppConfig::load)
}

pub fn get_config() -> &'static AppConfig {
    GLOBAL_CONFIG
        .get()
        .expect("Configuration not initialized. Call init_config() first.")
}
