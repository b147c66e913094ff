//! Endpoint paths and client settings.

use std::time::Duration;

/// Yearly monthly-averages endpoint.
pub const YEARLY_SUMMARY_PATH: &str = "/api/v1/yearly-summary";

/// Daily aggregates for one month of the summary year.
pub const MONTHLY_TREND_PATH: &str = "/api/v1/monthly-trend";

pub const HEALTH_PATH: &str = "/api/v1/health";

/// Where the backend listens during local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the native [`SummaryClient`](crate::client::SummaryClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend, without the `/api/v1` prefix
    pub base_url: String,
    /// Upper bound on a whole request, connect through body
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join `path` onto the base URL, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
