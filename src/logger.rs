//! Structured logging for the terminal core.
//!
//! - Levels follow RFC 5424, resolved from RUST_LOG
//! - JSON lines in production, human-readable lines in development
//! - Optional daily log file next to stdout
//! - Redaction of sensitive keys (token/key/secret/password) in log data

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use crate::config::LoggingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "TRACE" => LogLevel::Trace,
            "DEBUG" => LogLevel::Debug,
            "INFO" => LogLevel::Info,
            "WARN" => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    pub fn from_env() -> Self {
        std::env::var("RUST_LOG")
            .map(|s| Self::parse(&s))
            .unwrap_or(LogLevel::Info)
    }
}

/// One structured log line
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub target: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct Logger {
    level: LogLevel,
    log_to_stdout: bool,
    json_format: bool,
    log_dir: Option<PathBuf>,
}

impl Logger {
    pub fn init(config: &LoggingConfig, data_dir: Option<&Path>) -> Result<Self, String> {
        let log_dir = if config.log_to_file {
            let dir = data_dir
                .ok_or_else(|| "log_to_file requires a data directory".to_string())?
                .join("logs");
            std::fs::create_dir_all(&dir)
                .map_err(|e| format!("Failed to create log directory: {}", e))?;
            Some(dir)
        } else {
            None
        };

        Ok(Self {
            level: LogLevel::parse(&config.level),
            log_to_stdout: config.log_to_stdout,
            json_format: config.json_format,
            log_dir,
        })
    }

    fn log_file_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("pos-{}.log", Local::now().format("%Y-%m-%d")))
    }

    fn write(&self, entry: &LogEntry) {
        if entry.level > self.level {
            return;
        }

        let line = if self.json_format {
            serde_json::to_string(entry).unwrap_or_else(|_| "{}".to_string())
        } else {
            format!(
                "{} [{}] [{}] {}{}{}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
                entry.level.as_str(),
                entry.target,
                entry.message,
                entry
                    .data
                    .as_ref()
                    .map(|d| format!(" | {}", d))
                    .unwrap_or_default(),
                entry
                    .error
                    .as_ref()
                    .map(|e| format!(" | error: {}", e))
                    .unwrap_or_default(),
            )
        };

        if self.log_to_stdout {
            match entry.level {
                LogLevel::Error | LogLevel::Warn => eprintln!("{}", line),
                _ => println!("{}", line),
            }
        }

        if let Some(ref dir) = self.log_dir {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.log_file_path(dir))
            {
                let _ = writeln!(file, "{}", line);
            }
        }
    }

    pub fn error(&self, target: &'static str, message: &str, error: Option<&str>) {
        self.write(&LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Error,
            target,
            message: message.to_string(),
            data: None,
            error: error.map(String::from),
        });
    }

    pub fn warn(&self, target: &'static str, message: &str) {
        self.write(&LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Warn,
            target,
            message: message.to_string(),
            data: None,
            error: None,
        });
    }

    pub fn info(&self, target: &'static str, message: &str, data: Option<serde_json::Value>) {
        self.write(&LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Info,
            target,
            message: message.to_string(),
            data: data.map(redact_sensitive_data),
            error: None,
        });
    }

    pub fn debug(&self, target: &'static str, message: &str, data: Option<serde_json::Value>) {
        self.write(&LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Debug,
            target,
            message: message.to_string(),
            data: data.map(redact_sensitive_data),
            error: None,
        });
    }
}

/// Replace values under token/key/secret/password keys, recursively.
pub fn redact_sensitive_data(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut map) => {
            for (key, val) in map.iter_mut() {
                let lower = key.to_lowercase();
                if lower.contains("token")
                    || lower.contains("key")
                    || lower.contains("secret")
                    || lower.contains("password")
                {
                    *val = serde_json::Value::String("***REDACTED***".to_string());
                } else {
                    *val = redact_sensitive_data(val.clone());
                }
            }
            serde_json::Value::Object(map)
        }
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(redact_sensitive_data).collect())
        }
        _ => value,
    }
}

/// Global logger instance
static GLOBAL_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

pub fn init_global_logger(config: &LoggingConfig, data_dir: Option<&Path>) -> Result<(), String> {
    let logger = Logger::init(config, data_dir)?;
    GLOBAL_LOGGER
        .set(Mutex::new(logger))
        .map_err(|_| "Logger already initialized".to_string())
}

pub fn get_logger() -> Option<&'static Mutex<Logger>> {
    GLOBAL_LOGGER.get()
}

#[macro_export]
macro_rules! log_error {
    ($target:expr, $msg:expr) => {
        if let Some(logger) = $crate::logger::get_logger() {
            if let Ok(l) = logger.lock() {
                l.error($target, $msg, None);
            }
        }
    };
    ($target:expr, $msg:expr, $err:expr) => {
        if let Some(logger) = $crate::logger::get_logger() {
            if let Ok(l) = logger.lock() {
                l.error($target, $msg, Some(&$err));
            }
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($target:expr, $msg:expr) => {
        if let Some(logger) = $crate::logger::get_logger() {
            if let Ok(l) = logger.lock() {
                l.warn($target, $msg);
            }
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($target:expr, $msg:expr) => {
        if let Some(logger) = $crate::logger::get_logger() {
            if let Ok(l) = logger.lock() {
                l.info($target, $msg, None);
            }
        }
    };
    ($target:expr, $msg:expr, $data:expr) => {
        if let Some(logger) = $crate::logger::get_logger() {
            if let Ok(l) = logger.lock() {
                l.info($target, $msg, Some($data));
            }
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($target:expr, $msg:expr) => {
        if let Some(logger) = $crate::logger::get_logger() {
            if let Ok(l) = logger.lock() {
                l.debug($target, $msg, None);
            }
        }
    };
    ($target:expr, $msg:expr, $data:expr) => {
        if let Some(logger) = $crate::logger::get_logger() {
            if let Ok(l) = logger.lock() {
                l.debug($target, $msg, Some($data));
            }
        }
    };
}
