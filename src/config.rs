//! Relay configuration
//!
//! The webhook URL is an explicit configuration value passed into the relay
//! rather than a literal consulted at call sites, so tests can substitute a
//! mock endpoint. The placeholder default is meant to be hand-edited or
//! overridden per deployment.

use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

/// Placeholder webhook URL; edit or override via `WEBHOOK_URL` / `--url`
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/your-webhook-id";

/// Default timeout for the outbound request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Webhook endpoint to POST the query to
    pub webhook_url: Url,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Working directory hint supplied by the host; captured but not
    /// consulted by the relay logic
    pub workspace: Option<PathBuf>,
}

impl RelayConfig {
    /// Create a config for an explicit webhook URL
    pub fn new(webhook_url: &str) -> Result<Self> {
        let webhook_url = Url::parse(webhook_url)
            .map_err(|e| Error::Config(format!("Invalid webhook URL '{}': {}", webhook_url, e)))?;

        let config = RelayConfig {
            webhook_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            workspace: std::env::var("WORKSPACE").ok().map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    /// Create config from environment variables, falling back to the
    /// placeholder URL
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());
        Self::new(&url)
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.webhook_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::Config(format!(
                    "Unsupported webhook URL scheme '{}' (expected http or https)",
                    other
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(Error::Config("Timeout must be non-zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_is_valid() {
        let config = RelayConfig::new(DEFAULT_WEBHOOK_URL).unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = RelayConfig::new("ftp://example.com/webhook");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let result = RelayConfig::new("not a url");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_timeout_fails_validation() {
        let config = RelayConfig::new(DEFAULT_WEBHOOK_URL)
            .unwrap()
            .with_timeout(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_timeout_override() {
        let config = RelayConfig::new("http://localhost:5678/webhook/abc")
            .unwrap()
            .with_timeout(5);
        assert_eq!(config.timeout_secs, 5);
    }
}
