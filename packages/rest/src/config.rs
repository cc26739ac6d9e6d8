//! Builder for endpoint client configuration.
//!
//! A `ClientConfig` is what endpoint configuration callbacks receive: a
//! builder carrying the base URL, request defaults, and transport settings
//! that a [`RestClient`](crate::RestClient) is constructed from.

use std::time::Duration;

use crate::types::RequestDefaults;

/// Configuration for constructing a REST client.
///
/// # Example
///
/// ```ignore
/// use resthub_rest::{ClientConfig, RestClient};
///
/// let config = ClientConfig::new()
///     .with_base_url("https://api.example.com")
///     .with_default_header("Authorization", "Bearer token")
///     .with_timeout(Duration::from_secs(10));
///
/// let client = RestClient::from_config("api", config)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    base_url: Option<String>,
    defaults: RequestDefaults,
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL requests are resolved against.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Merge request defaults into the configuration. Keys already present
    /// are overwritten by `defaults`.
    pub fn with_defaults(mut self, defaults: RequestDefaults) -> Self {
        self.defaults = self.defaults.merge(&defaults);
        self
    }

    /// Add a single default header.
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.defaults.headers.insert(name.into(), value.into());
        self
    }

    /// Set the transport-level request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn defaults(&self) -> &RequestDefaults {
        &self.defaults
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accumulates() {
        let config = ClientConfig::new()
            .with_base_url("https://api.example.com")
            .with_default_header("X-Api-Key", "secret")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url(), Some("https://api.example.com"));
        assert_eq!(
            config.defaults().headers.get("X-Api-Key"),
            Some(&"secret".to_string())
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn with_defaults_merges_instead_of_replacing() {
        let config = ClientConfig::new()
            .with_default_header("X-Api-Key", "secret")
            .with_defaults(RequestDefaults::new().with_header("Accept", "application/json"));

        assert_eq!(
            config.defaults().headers.get("X-Api-Key"),
            Some(&"secret".to_string())
        );
        assert_eq!(
            config.defaults().headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn later_defaults_win() {
        let config = ClientConfig::new()
            .with_defaults(RequestDefaults::new().with_header("Authorization", "Bearer a"))
            .with_defaults(RequestDefaults::new().with_header("Authorization", "Bearer b"));

        assert_eq!(
            config.defaults().headers.get("Authorization"),
            Some(&"Bearer b".to_string())
        );
    }
}
