//! Map a [`YearlySummary`] onto two fixed twelve-point line chart series.
//!
//! The x-axis always has one slot per calendar month, Jan through Dec. A month
//! without an aggregate is a gap (`None`) at its slot, never a zero and never
//! dropped, so both series stay index-aligned with [`MONTH_LABELS`].

use crate::summary::{MonthlyAggregate, YearlySummary};
use serde::Serialize;

/// X-axis labels, index 0 = month 1.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Shown instead of any chart when the summary has no year or no months.
pub const NO_DATA_MESSAGE: &str = "No data available";

pub const TEMPERATURE_HEADING: &str = "Average Temperature by Month";
pub const HUMIDITY_HEADING: &str = "Average Humidity by Month";
pub const TEMPERATURE_LABEL: &str = "Avg Temperature (°C)";
pub const HUMIDITY_LABEL: &str = "Avg Humidity (%)";

/// Cosmetic line styling handed to the chart renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub border_color: &'static str,
    pub background_color: &'static str,
    /// Curve tension, 0 = straight segments
    pub tension: f64,
}

pub const TEMPERATURE_STYLE: SeriesStyle = SeriesStyle {
    border_color: "rgb(255, 99, 132)",
    background_color: "rgba(255, 99, 132, 0.5)",
    tension: 0.1,
};

pub const HUMIDITY_STYLE: SeriesStyle = SeriesStyle {
    border_color: "rgb(54, 162, 235)",
    background_color: "rgba(54, 162, 235, 0.5)",
    tension: 0.1,
};

/// Axis and legend options shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub legend_position: &'static str,
    pub begin_at_zero: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            legend_position: "top",
            begin_at_zero: true,
        }
    }
}

/// One (label, value) pair as consumed by the D3 line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: Option<f64>,
}

/// A single line: twelve values aligned to [`MONTH_LABELS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Section heading above the chart
    pub heading: &'static str,
    /// Legend / y-axis label
    pub label: &'static str,
    pub values: [Option<f64>; 12],
    pub style: SeriesStyle,
}

impl ChartSeries {
    pub fn points(&self) -> Vec<ChartPoint> {
        MONTH_LABELS
            .iter()
            .zip(self.values.iter())
            .map(|(label, value)| ChartPoint {
                label: *label,
                value: *value,
            })
            .collect()
    }

    /// Number of months that carry a value.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// Renderer configuration for one series, serialized to camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartConfig {
    pub title: String,
    pub y_axis_label: &'static str,
    #[serde(flatten)]
    pub style: SeriesStyle,
    #[serde(flatten)]
    pub options: ChartOptions,
}

/// Both charts for a year with data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyCharts {
    pub year: i32,
    pub labels: [&'static str; 12],
    pub temperature: ChartSeries,
    pub humidity: ChartSeries,
    pub options: ChartOptions,
}

impl YearlyCharts {
    /// "Yearly Averages for 2024"
    pub fn title(&self) -> String {
        format!("Yearly Averages for {}", self.year)
    }

    pub fn series(&self) -> [&ChartSeries; 2] {
        [&self.temperature, &self.humidity]
    }

    pub fn config_for(&self, series: &ChartSeries) -> LineChartConfig {
        LineChartConfig {
            title: series.heading.to_string(),
            y_axis_label: series.label,
            style: series.style,
            options: self.options,
        }
    }
}

/// What the yearly chart section should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum YearlyChartView {
    /// No year or no months: a placeholder and no chart chrome
    NoData,
    Charts(YearlyCharts),
}

impl YearlyChartView {
    /// Derive the chart view. Pure: the same summary always yields the same view.
    pub fn from_summary(summary: &YearlySummary) -> Self {
        let year = match summary.year {
            Some(year) if !summary.is_empty() => year,
            _ => return YearlyChartView::NoData,
        };

        let slots = month_slots(&summary.months);
        YearlyChartView::Charts(YearlyCharts {
            year,
            labels: MONTH_LABELS,
            temperature: ChartSeries {
                heading: TEMPERATURE_HEADING,
                label: TEMPERATURE_LABEL,
                values: slots.map(|slot| slot.and_then(|m| m.avg_temperature)),
                style: TEMPERATURE_STYLE,
            },
            humidity: ChartSeries {
                heading: HUMIDITY_HEADING,
                label: HUMIDITY_LABEL,
                values: slots.map(|slot| slot.and_then(|m| m.avg_humidity)),
                style: HUMIDITY_STYLE,
            },
            options: ChartOptions::default(),
        })
    }

    pub fn charts(&self) -> Option<&YearlyCharts> {
        match self {
            YearlyChartView::Charts(charts) => Some(charts),
            YearlyChartView::NoData => None,
        }
    }
}

/// Index aggregates by calendar month in one pass.
///
/// Months outside 1-12 have no slot and are skipped. A repeated month keeps
/// the last occurrence.
fn month_slots(months: &[MonthlyAggregate]) -> [Option<&MonthlyAggregate>; 12] {
    let mut slots: [Option<&MonthlyAggregate>; 12] = [None; 12];
    for aggregate in months {
        match aggregate
            .month
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
        {
            Some(index) if index < slots.len() => slots[index] = Some(aggregate),
            _ => log::warn!("Ignoring aggregate with month {}", aggregate.month),
        }
    }
    slots
}
