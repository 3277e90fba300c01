//! Gateway configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! server starts. The security policy itself (route lists, window sizes,
//! cookie parameters) is static data in [`crate::policy`]; only runtime
//! wiring lives here.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `APP_ENV` - `production` enables the `Secure` CSRF cookie attribute
//! - `AUTH_SESSION_URL` - Auth provider session endpoint; when unset the
//!   gateway falls back to a deny-all verifier and every protected route
//!   redirects to sign-in
//! - `AUTH_VERIFY_TIMEOUT_MS` - Upper bound on one verifier call
//!   (default: 3000)
//! - `RATE_LIMIT_EXACT_RETRY_AFTER` - Report the window's actual
//!   remaining time in `Retry-After` instead of the fixed 900s

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Adds `Secure` to the CSRF cookie. Set via `APP_ENV=production`.
    pub production: bool,
    /// Auth provider session endpoint. `None` falls back to deny-all.
    pub auth_session_url: Option<String>,
    /// Timeout for one session verification call, in milliseconds.
    pub auth_verify_timeout_ms: u64,
    /// Accurate `Retry-After` mode; off for parity with the deployed
    /// fixed-900s behavior.
    pub rate_limit_exact_retry_after: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let production = env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let auth_session_url = env::var("AUTH_SESSION_URL").ok().filter(|v| !v.is_empty());

        let auth_verify_timeout_ms = env::var("AUTH_VERIFY_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let rate_limit_exact_retry_after = env::var("RATE_LIMIT_EXACT_RETRY_AFTER")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            listen_addr,
            log_level,
            log_format,
            production,
            auth_session_url,
            auth_verify_timeout_ms,
            rate_limit_exact_retry_after,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `AUTH_SESSION_URL` is set but not an HTTP(S) URL
    /// - `AUTH_VERIFY_TIMEOUT_MS` is zero or above 60000
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

        if let Some(ref url) = self.auth_session_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            anyhow::bail!(
                "AUTH_SESSION_URL must start with 'http://' or 'https://', got '{}'",
                url
            );
        }

        if self.auth_verify_timeout_ms == 0 || self.auth_verify_timeout_ms > 60_000 {
            anyhow::bail!(
                "AUTH_VERIFY_TIMEOUT_MS must be between 1 and 60000, got {}",
                self.auth_verify_timeout_ms
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
        tracing::info!(
            "  Environment: {}",
            if self.production {
                "production"
            } else {
                "development"
            }
        );

        if let Some(ref url) = self.auth_session_url {
            tracing::info!(
                "  Session verifier: {} (timeout {}ms)",
                url,
                self.auth_verify_timeout_ms
            );
        } else {
            tracing::warn!("  Session verifier: not configured, protected routes deny all");
        }

        tracing::info!(
            "  Retry-After mode: {}",
            if self.rate_limit_exact_retry_after {
                "exact remaining time"
            } else {
                "fixed window length"
            }
        );
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
