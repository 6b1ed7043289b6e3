//! Backend endpoint configuration.

use std::env;
use std::time::Duration;

/// Scrapes can take a long while; the dispatcher abandons the call after
/// this ceiling and records a transport failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const ENV_BACKEND_URL: &str = "HARVESTER_BACKEND_URL";
const ENV_API_KEY: &str = "HARVESTER_API_KEY";
const ENV_TIMEOUT_SECS: &str = "HARVESTER_TIMEOUT_SECS";

/// Where and how to reach the scraping backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Full URL of the scrape-process endpoint.
    pub endpoint: String,

    /// Shared secret sent as the `x-api-key` header.
    pub api_key: String,

    /// Hard upper bound on one backend call.
    pub timeout: Duration,
}

/// Configuration errors are wiring-time failures, kept separate from the
/// runtime taxonomy in `domain::errors`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

impl BackendConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `HARVESTER_BACKEND_URL`, `HARVESTER_API_KEY` and optional
    /// `HARVESTER_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = get(ENV_BACKEND_URL)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(ENV_BACKEND_URL))?;
        let api_key = get(ENV_API_KEY)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(ENV_API_KEY))?;

        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidVar(ENV_TIMEOUT_SECS, raw.clone()))?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            endpoint,
            api_key,
            timeout,
        })
    }
}
