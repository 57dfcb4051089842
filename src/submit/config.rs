//! Where and how long to submit.

use crate::error::BuildError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default bound on one endpoint call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the endpoint URL.
pub const ENDPOINT_VAR: &str = "FORMFLOW_ENDPOINT";

/// Environment variable holding the timeout in milliseconds; `0` disables it.
pub const TIMEOUT_VAR: &str = "FORMFLOW_TIMEOUT_MS";

fn default_timeout_ms() -> Option<u64> {
    Some(millis(DEFAULT_TIMEOUT))
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Submission settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConfig {
    pub endpoint: String,
    /// `None` waits for the endpoint indefinitely.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: Option<u64>,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SubmitConfig {
    pub fn builder() -> SubmitConfigBuilder {
        SubmitConfigBuilder::new()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Parsed endpoint URL; only `http` and `https` are accepted.
    pub fn endpoint_url(&self) -> Result<Url, BuildError> {
        let url = Url::parse(&self.endpoint).map_err(|e| BuildError::InvalidEndpoint {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(BuildError::InvalidEndpoint {
                url: self.endpoint.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    /// Read `FORMFLOW_ENDPOINT` and `FORMFLOW_TIMEOUT_MS`, falling back to
    /// the defaults for unset variables.
    pub fn from_env() -> Result<Self, BuildError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BuildError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = SubmitConfigBuilder::new()
            .endpoint(lookup(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()));

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|_| BuildError::InvalidTimeout { value: raw.clone() })?;
            builder = if ms == 0 {
                builder.no_timeout()
            } else {
                builder.timeout(Duration::from_millis(ms))
            };
        }

        builder.build()
    }
}

/// Builder for [`SubmitConfig`].
#[derive(Debug, Default)]
pub struct SubmitConfigBuilder {
    endpoint: Option<String>,
    timeout: Option<Option<Duration>>,
}

impl SubmitConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL (required).
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Bound each endpoint call.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(Some(duration));
        self
    }

    /// Wait for the endpoint indefinitely.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = Some(None);
        self
    }

    pub fn build(self) -> Result<SubmitConfig, BuildError> {
        let endpoint = self.endpoint.ok_or(BuildError::MissingEndpoint)?;
        let timeout_ms = match self.timeout {
            Some(timeout) => timeout.map(millis),
            None => default_timeout_ms(),
        };
        let config = SubmitConfig {
            endpoint,
            timeout_ms,
        };
        config.endpoint_url()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_the_test_endpoint() {
        let config = SubmitConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn builder_requires_endpoint() {
        assert!(matches!(
            SubmitConfig::builder().build(),
            Err(BuildError::MissingEndpoint)
        ));
    }

    #[test]
    fn builder_rejects_bad_urls() {
        assert!(matches!(
            SubmitConfig::builder().endpoint("not a url").build(),
            Err(BuildError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            SubmitConfig::builder().endpoint("ftp://example.com/x").build(),
            Err(BuildError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn builder_timeouts() {
        let bounded = SubmitConfig::builder()
            .endpoint("http://localhost:8080/forms")
            .timeout(Duration::from_millis(1500))
            .build()
            .unwrap();
        assert_eq!(bounded.timeout(), Some(Duration::from_millis(1500)));

        let unbounded = SubmitConfig::builder()
            .endpoint("http://localhost:8080/forms")
            .no_timeout()
            .build()
            .unwrap();
        assert_eq!(unbounded.timeout(), None);
    }

    #[test]
    fn huge_timeout_saturates() {
        let config = SubmitConfig::builder()
            .endpoint("http://localhost:8080/forms")
            .timeout(Duration::MAX)
            .build()
            .unwrap();
        assert_eq!(config.timeout_ms, Some(u64::MAX));
        assert_eq!(config.timeout(), Some(Duration::from_millis(u64::MAX)));
    }

    #[test]
    fn lookup_falls_back_to_defaults() {
        let config = SubmitConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SubmitConfig::default());
    }

    #[test]
    fn lookup_reads_both_variables() {
        let config = SubmitConfig::from_lookup(lookup(&[
            (ENDPOINT_VAR, "https://api.example.com/signup"),
            (TIMEOUT_VAR, "2500"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "https://api.example.com/signup");
        assert_eq!(config.timeout(), Some(Duration::from_millis(2500)));

        let config = SubmitConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])).unwrap();
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn lookup_rejects_garbage_timeout() {
        assert!(matches!(
            SubmitConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])),
            Err(BuildError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn deserializes_with_default_timeout() {
        let config: SubmitConfig =
            serde_json::from_str(r#"{ "endpoint": "http://localhost/forms" }"#).unwrap();
        assert_eq!(config.timeout(), Some(DEFAULT_TIMEOUT));

        let config: SubmitConfig =
            serde_json::from_str(r#"{ "endpoint": "http://localhost/forms", "timeout_ms": null }"#)
                .unwrap();
        assert_eq!(config.timeout(), None);
    }
}
