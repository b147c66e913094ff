//! Payloads of the backend's secondary endpoints.

use serde::{Deserialize, Serialize};

/// Averages for a single day within a [`MonthlyTrend`].
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Day of month, 1-31
    pub day: u32,
    pub avg_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub observation_count: u32,
}

/// Response of `GET /api/v1/monthly-trend?month=N`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub year: i32,
    pub month: u32,
    pub daily_aggregates: Vec<DailyAggregate>,
    /// Most frequent condition label, ties broken alphabetically by the backend
    pub most_common_condition: Option<String>,
}

impl MonthlyTrend {
    /// Days that had at least one observation.
    pub fn observed_days(&self) -> impl Iterator<Item = &DailyAggregate> {
        self.daily_aggregates
            .iter()
            .filter(|d| d.observation_count > 0)
    }
}

/// Response of `GET /api/v1/health`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_monthly_trend() {
        let body = r#"{
            "year": 2024,
            "month": 2,
            "daily_aggregates": [
                {"day": 1, "avg_temperature": 4.5, "avg_humidity": 71.0, "observation_count": 2},
                {"day": 2, "avg_temperature": null, "avg_humidity": null, "observation_count": 0}
            ],
            "most_common_condition": "Cloudy"
        }"#;
        let trend: MonthlyTrend = serde_json::from_str(body).unwrap();
        assert_eq!(trend.month, 2);
        assert_eq!(trend.most_common_condition.as_deref(), Some("Cloudy"));
        assert_eq!(trend.observed_days().count(), 1);
    }

    #[test]
    fn test_health() {
        let health: HealthStatus = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(health.is_ok());
    }
}
