//! Native HTTP client for the weather backend.

use crate::config::{ClientConfig, HEALTH_PATH, MONTHLY_TREND_PATH, YEARLY_SUMMARY_PATH};
use crate::decode::decode_json;
use crate::error::{FetchError, Result};
use crate::summary::YearlySummary;
use crate::trend::{HealthStatus, MonthlyTrend};
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Issues single, unretried GET requests against the backend.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: Client,
    config: ClientConfig,
}

impl SummaryClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the monthly averages for the latest full year.
    pub async fn fetch_yearly_summary(&self) -> Result<YearlySummary> {
        let summary: YearlySummary = self.get_json(YEARLY_SUMMARY_PATH, &[]).await?;
        info!(
            "Yearly summary: year {:?}, {} months",
            summary.year,
            summary.months.len()
        );
        Ok(summary)
    }

    /// Fetch daily aggregates for `month` (1-12) of the summary year.
    pub async fn fetch_monthly_trend(&self, month: u32) -> Result<MonthlyTrend> {
        if !(1..=12).contains(&month) {
            return Err(FetchError::InvalidMonth(month));
        }
        self.get_json(MONTHLY_TREND_PATH, &[("month", month.to_string())])
            .await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json(HEALTH_PATH, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.config.endpoint(path);
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("{} -> {} ({} bytes)", url, status, body.len());

        decode_json(status.as_u16(), &body)
    }
}
