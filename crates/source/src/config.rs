//! Source configuration.
//!
//! Resolved once at process startup and passed into the client. The intent
//! is to avoid reading process-wide environment variables after startup,
//! which can lead to inconsistent behaviour in multi-threaded runtimes and
//! test harnesses.

use crate::error::{SourceError, SourceResult};
use std::time::Duration;

/// Where the bundled mock server serves the directory by default.
pub const DEFAULT_SOURCE_URL: &str = "http://127.0.0.1:3000/practitioners";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the directory source client.
#[derive(Clone, Debug)]
pub struct SourceConfig {
    source_url: String,
    request_timeout: Duration,
}

impl SourceConfig {
    /// Create a new `SourceConfig`.
    pub fn new(source_url: impl Into<String>, request_timeout: Duration) -> SourceResult<Self> {
        let source_url = source_url.into();
        if source_url.trim().is_empty() {
            return Err(SourceError::InvalidConfig(
                "source_url cannot be empty".into(),
            ));
        }

        Ok(Self {
            source_url,
            request_timeout,
        })
    }

    /// Build a config from an optional environment value
    /// (`HEALNET_SOURCE_URL`). `None` or an empty/whitespace value falls
    /// back to [`DEFAULT_SOURCE_URL`].
    pub fn from_env_value(value: Option<String>) -> SourceResult<Self> {
        let url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE_URL.into());

        Self::new(url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn empty_url_is_rejected() {
        let err = SourceConfig::new("  ", DEFAULT_REQUEST_TIMEOUT);
        assert!(matches!(err, Err(SourceError::InvalidConfig(_))));
    }

    #[test]
    fn env_value_falls_back_to_the_default() {
        let cfg = SourceConfig::from_env_value(None).expect("valid config");
        assert_eq!(cfg.source_url(), DEFAULT_SOURCE_URL);

        let cfg = SourceConfig::from_env_value(Some("   ".into())).expect("valid config");
        assert_eq!(cfg.source_url(), DEFAULT_SOURCE_URL);
    }

    #[test]
    fn env_value_overrides_the_default() {
        let cfg = SourceConfig::from_env_value(Some("https://example.test/dir.json".into()))
            .expect("valid config");
        assert_eq!(cfg.source_url(), "https://example.test/dir.json");
    }
}
