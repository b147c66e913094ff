//! Turn an HTTP status and body into a typed payload or a [`FetchError`].
//!
//! Both the browser bridge and the native client funnel their responses
//! through [`decode_json`], so a given status/body pair always produces the
//! same outcome regardless of transport.

use crate::error::{FetchError, Result};
use serde::de::DeserializeOwned;

/// Classify a completed response.
///
/// Non-2xx statuses become `Http` errors before the body is looked at; a 2xx
/// body that does not deserialize into `T` becomes a `Decode` error.
pub fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(FetchError::http(status, body));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use crate::summary::YearlySummary;

    #[test]
    fn test_success_body_is_decoded() {
        let summary: YearlySummary = decode_json(
            200,
            r#"{"year":2024,"months":[{"month":3,"avg_temperature":10.5,"avg_humidity":null,"observation_count":4}]}"#,
        )
        .unwrap();
        assert_eq!(summary.year, Some(2024));
        assert_eq!(summary.months[0].avg_humidity, None);
    }

    #[test]
    fn test_error_status_wins_over_valid_body() {
        let result: Result<YearlySummary> = decode_json(503, r#"{"year":null,"months":[]}"#);
        assert_eq!(result.unwrap_err().kind(), FetchErrorKind::Http);
    }

    #[test]
    fn test_malformed_body() {
        let result: Result<YearlySummary> = decode_json(200, "<html>oops</html>");
        assert_eq!(result.unwrap_err().kind(), FetchErrorKind::Decode);

        let wrong_shape: Result<YearlySummary> = decode_json(200, r#"{"year":"2024"}"#);
        assert_eq!(wrong_shape.unwrap_err().kind(), FetchErrorKind::Decode);
    }
}
