//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TOYSHOP_ORDER_RECIPIENT` - Messaging recipient for checkout (international
//!   phone number; `+`, spaces and dashes are stripped)
//!
//! ## Optional
//! - `TOYSHOP_HOST` - Bind address (default: 127.0.0.1)
//! - `TOYSHOP_PORT` - Listen port (default: 3000)
//! - `TOYSHOP_CATALOG` - Catalog URL or file path (default: crates/storefront/data/products.json)
//! - `TOYSHOP_DATA_DIR` - Directory for the persisted cart (default: .toyshop)
//! - `TOYSHOP_MESSAGING_BASE` - Messaging link base (default: <https://wa.me>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::catalog::CatalogSource;

const DEFAULT_CATALOG: &str = "crates/storefront/data/products.json";
const DEFAULT_MESSAGING_BASE: &str = "https://wa.me";
const MIN_RECIPIENT_DIGITS: usize = 8;
const MAX_RECIPIENT_DIGITS: usize = 15;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Where the product catalog is read from
    pub catalog: CatalogSource,
    /// Directory holding the persisted cart document
    pub data_dir: PathBuf,
    /// Checkout handoff target
    pub checkout: CheckoutConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Checkout handoff configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Base URL of the messaging service (e.g., <https://wa.me>)
    pub messaging_base: Url,
    /// Normalized recipient identifier (digits only)
    pub recipient: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TOYSHOP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TOYSHOP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("TOYSHOP_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TOYSHOP_PORT".to_string(), e.to_string()))?;
        let catalog = CatalogSource::parse(&get_env_or_default(
            "TOYSHOP_CATALOG",
            DEFAULT_CATALOG,
        ))
        .map_err(|e| ConfigError::InvalidEnvVar("TOYSHOP_CATALOG".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("TOYSHOP_DATA_DIR", ".toyshop"));
        let checkout = CheckoutConfig::from_env()?;

        Ok(Self {
            host,
            port,
            catalog,
            data_dir,
            checkout,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CheckoutConfig {
    /// Build a checkout configuration from raw values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the base is not an http(s) URL
    /// or the recipient is not a plausible international number.
    pub fn new(messaging_base: &str, recipient: &str) -> Result<Self, ConfigError> {
        let messaging_base = parse_messaging_base(messaging_base)?;
        let recipient = normalize_recipient(recipient)?;
        Ok(Self {
            messaging_base,
            recipient,
        })
    }

    fn from_env() -> Result<Self, ConfigError> {
        let base = get_env_or_default("TOYSHOP_MESSAGING_BASE", DEFAULT_MESSAGING_BASE);
        let recipient = get_required_env("TOYSHOP_ORDER_RECIPIENT")?;
        Self::new(&base, &recipient)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_messaging_base(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |msg: String| ConfigError::InvalidEnvVar("TOYSHOP_MESSAGING_BASE".to_string(), msg);

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment".to_string()));
    }
    Ok(url)
}

/// Strip formatting from a phone-style recipient and check its length.
fn normalize_recipient(raw: &str) -> Result<String, ConfigError> {
    let invalid = |msg: String| ConfigError::InvalidEnvVar("TOYSHOP_ORDER_RECIPIENT".to_string(), msg);

    let digits: String = raw
        .trim()
        .trim_start_matches('+')
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(invalid(format!("unexpected character '{bad}'")));
    }
    if !(MIN_RECIPIENT_DIGITS..=MAX_RECIPIENT_DIGITS).contains(&digits.len()) {
        return Err(invalid(format!(
            "expected {MIN_RECIPIENT_DIGITS}-{MAX_RECIPIENT_DIGITS} digits (got {})",
            digits.len()
        )));
    }
    Ok(digits)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_recipient_strips_formatting() {
        assert_eq!(normalize_recipient("+525629404518").unwrap(), "525629404518");
        assert_eq!(normalize_recipient(" +52 56-2940-4518 ").unwrap(), "525629404518");
    }

    #[test]
    fn test_normalize_recipient_rejects_letters() {
        let err = normalize_recipient("52-CALL-NOW").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_normalize_recipient_rejects_bad_length() {
        assert!(normalize_recipient("12345").is_err());
        assert!(normalize_recipient("1234567890123456").is_err());
        assert!(normalize_recipient("").is_err());
    }

    #[test]
    fn test_messaging_base_requires_http() {
        assert!(parse_messaging_base("https://wa.me").is_ok());
        assert!(parse_messaging_base("ftp://wa.me").is_err());
        assert!(parse_messaging_base("not a url").is_err());
        assert!(parse_messaging_base("https://wa.me/?x=1").is_err());
    }

    #[test]
    fn test_checkout_config_new() {
        let config = CheckoutConfig::new("https://wa.me", "+52 5512345678").unwrap();
        assert_eq!(config.recipient, "525512345678");
        assert_eq!(config.messaging_base.host_str(), Some("wa.me"));
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            catalog: CatalogSource::parse("data/products.json").unwrap(),
            data_dir: PathBuf::from(".toyshop"),
            checkout: CheckoutConfig::new(DEFAULT_MESSAGING_BASE, "525512345678").unwrap(),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
