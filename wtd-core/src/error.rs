/// Error types for talking to the weather backend
use thiserror::Error;

/// Number of body characters kept on an `Http` error.
const BODY_SNIPPET_LEN: usize = 200;

/// Why a request to the weather backend failed.
///
/// Callers are not expected to branch on the variant; at the page boundary
/// every variant collapses into its `Display` message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The transport could not complete the request (DNS, refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("Request failed with HTTP status {status}")]
    Http { status: u16, body: String },

    /// The body could not be parsed into the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A month query parameter outside 1-12
    #[error("Month must be between 1 and 12 (got {0})")]
    InvalidMonth(u32),
}

/// Discriminant of a [`FetchError`], handy for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Network,
    Http,
    Decode,
    InvalidMonth,
}

impl FetchError {
    /// Build an `Http` error, keeping only the head of the response body.
    pub fn http(status: u16, body: &str) -> Self {
        FetchError::Http {
            status,
            body: body.chars().take(BODY_SNIPPET_LEN).collect(),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Http { .. } => FetchErrorKind::Http,
            FetchError::Decode(_) => FetchErrorKind::Decode,
            FetchError::InvalidMonth(_) => FetchErrorKind::InvalidMonth,
        }
    }
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_truncates_body() {
        let body = "x".repeat(1_000);
        match FetchError::http(502, &body) {
            FetchError::Http { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body.len(), BODY_SNIPPET_LEN);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(
            FetchError::http(404, "missing").to_string(),
            "Request failed with HTTP status 404"
        );
        assert_eq!(
            FetchError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            FetchError::InvalidMonth(13).to_string(),
            "Month must be between 1 and 12 (got 13)"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(FetchError::Decode("eof".into()).kind(), FetchErrorKind::Decode);
        assert_eq!(FetchError::http(500, "").kind(), FetchErrorKind::Http);
    }
}
