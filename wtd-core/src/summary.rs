use serde::{Deserialize, Serialize};

/// Aggregated readings for one calendar month of the summary year.
///
/// The averages are `None` when the backend had no observations for the
/// month, which is distinct from an average of `0.0`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// Calendar month, 1 = January. Passed through unvalidated; the chart
    /// lookup skips anything outside 1-12.
    pub month: i32,
    /// Average temperature in degrees Celsius
    pub avg_temperature: Option<f64>,
    /// Average relative humidity in percent
    pub avg_humidity: Option<f64>,
    /// Number of raw observations behind the averages
    pub observation_count: u32,
}

/// Response of `GET /api/v1/yearly-summary`.
///
/// `year: None` with empty `months` means the backend has no data at all.
/// `months` is passed through as served: it may be unsorted or sparse.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: Option<i32>,
    pub months: Vec<MonthlyAggregate>,
}

impl YearlySummary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when there is nothing worth charting.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() || self.months.is_empty()
    }

    /// Sum of observations across all months.
    pub fn total_observations(&self) -> u64 {
        self.months
            .iter()
            .map(|m| u64::from(m.observation_count))
            .sum()
    }
}
