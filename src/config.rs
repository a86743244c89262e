use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub error_log: String,
    pub debug: bool,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            error_log: env::var("ERROR_LOG")
                .unwrap_or_else(|_| "error.log".to_string()),
            debug: env::var("APP_DEBUG")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string()),
        })
    }

    /// Error log path, or `None` when running in debug mode.
    pub fn error_log_path(&self) -> Option<&str> {
        (!self.debug).then_some(self.error_log.as_str())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" TRUE "));
        assert!(is_truthy("on"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("nope"));
    }

    #[test]
    fn test_error_log_disabled_in_debug() {
        let mut config = Config {
            database_url: "sqlite::memory:".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            error_log: "error.log".to_string(),
            debug: false,
            static_dir: "static".to_string(),
        };
        assert_eq!(config.error_log_path(), Some("error.log"));

        config.debug = true;
        assert_eq!(config.error_log_path(), None);
    }
}
