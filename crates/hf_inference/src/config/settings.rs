//! Client settings for the hosted inference API

use std::env;
use std::time::Duration;

/// Base URL that model identifiers are appended to
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Bearer token, sent as-is (empty when unset)
pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

/// Override for [`DEFAULT_BASE_URL`]
pub const BASE_URL_ENV: &str = "HF_INFERENCE_BASE_URL";

/// Total request timeout in seconds (fractional values allowed)
pub const TIMEOUT_SECS_ENV: &str = "HF_INFERENCE_TIMEOUT_SECS";

/// Parse a positive, finite number of seconds; anything else is `None`
pub fn parse_timeout_secs(value: &str) -> Option<Duration> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
}

/// Configuration for [`crate::InferenceClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    /// Total request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at a custom base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            base_url: lookup(BASE_URL_ENV)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            api_key: lookup(API_KEY_ENV).unwrap_or_default(),
            timeout: lookup(TIMEOUT_SECS_ENV).and_then(|v| parse_timeout_secs(&v)),
            connect_timeout: defaults.connect_timeout,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the total request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the TCP connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}
