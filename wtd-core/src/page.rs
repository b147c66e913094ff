//! Fetch lifecycle of the dashboard page.
//!
//! A page starts in `Loading`, performs a single fetch, and settles in either
//! `Loaded` or `Failed`. There is no way back to `Loading` and no retry.

use crate::error::FetchError;
use crate::series::YearlyChartView;
use crate::summary::YearlySummary;

pub const PAGE_TITLE: &str = "Weather Trends Dashboard";
pub const LOADING_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageState {
    #[default]
    Loading,
    Loaded(YearlySummary),
    /// Human-readable reason the fetch failed
    Failed(String),
}

impl PageState {
    /// Settle the page from the outcome of its one fetch.
    pub fn from_result(result: Result<YearlySummary, FetchError>) -> Self {
        match result {
            Ok(summary) => {
                log::info!(
                    "Loaded yearly summary for {:?} ({} months, {} observations)",
                    summary.year,
                    summary.months.len(),
                    summary.total_observations()
                );
                PageState::Loaded(summary)
            }
            Err(e) => {
                log::error!("Yearly summary fetch failed ({:?}): {}", e.kind(), e);
                PageState::Failed(e.to_string())
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&YearlySummary> {
        match self {
            PageState::Loaded(summary) => Some(summary),
            _ => None,
        }
    }

    /// The chart section to render, if the page has reached `Loaded`.
    ///
    /// `Loading` and `Failed` never produce a chart view, not even the
    /// no-data placeholder.
    pub fn chart_view(&self) -> Option<YearlyChartView> {
        self.summary().map(YearlyChartView::from_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::MonthlyAggregate;

    #[test]
    fn test_initial_state_is_loading() {
        let state = PageState::default();
        assert_eq!(state, PageState::Loading);
        assert!(state.chart_view().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_failure_suppresses_charts() {
        let state = PageState::from_result(Err(FetchError::Network("connection refused".into())));
        assert_eq!(state.error_message(), Some("Network error: connection refused"));
        assert!(state.summary().is_none());
        assert!(state.chart_view().is_none());
    }

    #[test]
    fn test_loaded_delegates_to_chart_view() {
        let summary = YearlySummary {
            year: Some(2024),
            months: vec![MonthlyAggregate {
                month: 4,
                avg_temperature: Some(14.0),
                avg_humidity: Some(55.0),
                observation_count: 60,
            }],
        };
        let state = PageState::from_result(Ok(summary.clone()));
        assert_eq!(state.summary(), Some(&summary));
        let view = state.chart_view().unwrap();
        assert_eq!(view.charts().unwrap().temperature.values[3], Some(14.0));
    }

    #[test]
    fn test_loaded_empty_is_placeholder() {
        let state = PageState::from_result(Ok(YearlySummary::empty()));
        assert!(matches!(state, PageState::Loaded(_)));
        assert_eq!(state.chart_view(), Some(YearlyChartView::NoData));
    }
}
