//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PORT` - Listening port, used when `LISTEN` is not set (default: `3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            log_level,
            log_format,
        }
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable (full `host:port`)
    /// 2. Constructed from `PORT` on all interfaces
    /// 3. Default `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        format!("0.0.0.0:{port}")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };

        assert!(config.validate().is_ok());

        // Invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_listen_addr_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("PORT");
        }

        assert_eq!(Config::load_listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_listen_addr_from_port() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::set_var("PORT", "8080");
        }

        assert_eq!(Config::load_listen_addr(), "0.0.0.0:8080");

        // Cleanup
        unsafe {
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_listen_addr_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:4000");
            env::set_var("PORT", "8080");
        }

        // LISTEN should take priority over PORT.
        assert_eq!(Config::load_listen_addr(), "127.0.0.1:4000");

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("PORT");
        }
    }
}
