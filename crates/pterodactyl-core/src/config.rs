//! Configuration structures for panel clients.
//!
//! This module provides the target descriptor that identifies a panel and its credential,
//! and the configuration of the backup-completion wait loop.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use validator::Validate;

/// Default interval between backup status polls, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// A panel instance together with the bearer credential used to talk to it.
///
/// The descriptor is immutable and passed to every operation; nothing about it is cached by
/// the client between calls.
#[derive(Validate)]
pub struct PanelTarget {
    /// Panel base URL (e.g. `https://panel.example.com`)
    #[validate(url)]
    url: String,

    /// Client API key sent as a bearer token
    api_key: SecretString,
}

impl PanelTarget {
    /// Create a new target descriptor.
    ///
    /// # Arguments
    ///
    /// * `url` - The panel base URL
    /// * `api_key` - The client API key for that panel
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        let target = Self {
            url: url.into(),
            api_key: SecretString::from(api_key.into()),
        };

        target
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid panel target: {e}")))?;

        Ok(target)
    }

    /// The base URL without any trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// The bearer credential.
    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

impl Clone for PanelTarget {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            api_key: SecretString::from(self.api_key.expose_secret().to_owned()),
        }
    }
}

impl fmt::Debug for PanelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelTarget")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Configuration of the backup-completion wait loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BackupWaitConfig {
    /// Fixed delay between two status polls, in milliseconds
    #[validate(range(min = 1))]
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

const fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS * 1000
}

impl BackupWaitConfig {
    /// Create a wait configuration with the default five second interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }

    /// Set the poll interval, rounded up to whole milliseconds (at least one).
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        let millis = interval.as_micros().div_ceil(1000).max(1);
        self.poll_interval_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    /// Check the configuration before it drives a wait loop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the poll interval is zero.
    pub fn ensure_valid(&self) -> Result<(), Error> {
        self.validate()?;
        Ok(())
    }

    /// Get the poll interval as a Duration.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for BackupWaitConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_target_new() {
        let target = PanelTarget::new("https://panel.example.com/", "ptlc_secret").unwrap();
        assert_eq!(target.base_url(), "https://panel.example.com");
        assert_eq!(target.api_key().expose_secret(), "ptlc_secret");
    }

    #[test]
    fn test_panel_target_invalid_url() {
        let result = PanelTarget::new("not a url", "key");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_panel_target_debug_redacts_key() {
        let target = PanelTarget::new("https://panel.example.com", "ptlc_secret").unwrap();
        let debug = format!("{target:?}");
        assert!(debug.contains("panel.example.com"));
        assert!(!debug.contains("ptlc_secret"));
    }

    #[test]
    fn test_panel_target_clone() {
        let target = PanelTarget::new("https://panel.example.com", "ptlc_secret").unwrap();
        let cloned = target.clone();
        assert_eq!(cloned.base_url(), target.base_url());
        assert_eq!(cloned.api_key().expose_secret(), "ptlc_secret");
    }

    #[test]
    fn test_wait_config_default() {
        let config = BackupWaitConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wait_config_with_poll_interval() {
        let config = BackupWaitConfig::new().with_poll_interval(Duration::from_millis(250));
        assert_eq!(config.poll_interval_ms, 250);
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_wait_config_rejects_zero_interval() {
        let config = BackupWaitConfig { poll_interval_ms: 0 };
        assert!(matches!(
            config.ensure_valid(),
            Err(Error::ValidationError(_))
        ));
    }

    #[test]
    fn test_wait_config_rounds_sub_millisecond_interval_up() {
        let config = BackupWaitConfig::new().with_poll_interval(Duration::from_micros(500));
        assert_eq!(config.poll_interval(), Duration::from_millis(1));
        assert!(config.ensure_valid().is_ok());

        let config = BackupWaitConfig::new().with_poll_interval(Duration::ZERO);
        assert_eq!(config.poll_interval_ms, 1);

        let config = BackupWaitConfig::new().with_poll_interval(Duration::from_micros(2500));
        assert_eq!(config.poll_interval_ms, 3);
    }

    #[test]
    fn test_wait_config_deserialize_defaults() {
        let config: BackupWaitConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BackupWaitConfig::new());

        let config: BackupWaitConfig =
            serde_json::from_str(r#"{"poll_interval_ms": 1500}"#).unwrap();
        assert_eq!(config.poll_interval(), Duration::from_millis(1500));
    }
}
