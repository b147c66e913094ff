//! `summary`: the yearly chart series as a table or CSV.

use serde::Serialize;
use std::io::Write;
use crate::format_value;
use wtd_core::client::SummaryClient;
use wtd_core::series::{YearlyCharts, YearlyChartView, MONTH_LABELS, NO_DATA_MESSAGE};

const CSV_HEADER: [&str; 3] = ["month", "avg_temperature", "avg_humidity"];

/// One x-axis position of both charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRow {
    pub month: &'static str,
    pub avg_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
}

/// Fetch the yearly summary and print it using the same derivation as the dashboard.
pub async fn run_summary<W: Write>(
    client: &SummaryClient,
    csv: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let summary = client.fetch_yearly_summary().await?;
    let view = YearlyChartView::from_summary(&summary);
    if csv {
        write_csv(&view, out)
    } else {
        write_table(&view, out)
    }
}

pub fn month_rows(charts: &YearlyCharts) -> Vec<MonthRow> {
    MONTH_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| MonthRow {
            month: *label,
            avg_temperature: charts.temperature.values[i],
            avg_humidity: charts.humidity.values[i],
        })
        .collect()
}

pub fn write_table<W: Write>(view: &YearlyChartView, out: &mut W) -> anyhow::Result<()> {
    let Some(charts) = view.charts() else {
        writeln!(out, "{}", NO_DATA_MESSAGE)?;
        return Ok(());
    };

    writeln!(out, "{}", charts.title())?;
    writeln!(out, "{:<5} {:>10} {:>13}", "Month", "Temp (°C)", "Humidity (%)")?;
    for row in month_rows(charts) {
        writeln!(
            out,
            "{:<5} {:>10} {:>13}",
            row.month,
            format_value(row.avg_temperature),
            format_value(row.avg_humidity)
        )?;
    }
    Ok(())
}

/// Gaps are written as empty fields. A summary without data yields the header only.
pub fn write_csv<W: Write>(view: &YearlyChartView, out: &mut W) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer.write_record(CSV_HEADER)?;
    if let Some(charts) = view.charts() {
        for row in month_rows(charts) {
            writer.serialize(row)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wtd_core::summary::YearlySummary;

    const FIXTURE_2024: &str = include_str!("../../fixtures/yearly_summary_2024.json");
    const FIXTURE_SPARSE: &str = include_str!("../../fixtures/yearly_summary_sparse.json");

    fn view(fixture: &str) -> YearlyChartView {
        let summary: YearlySummary = serde_json::from_str(fixture).unwrap();
        YearlyChartView::from_summary(&summary)
    }

    #[test]
    fn test_table_has_title_and_twelve_rows() {
        let mut out = Vec::new();
        write_table(&view(FIXTURE_2024), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Yearly Averages for 2024");
        assert_eq!(lines.len(), 14);
        assert!(lines[2].starts_with("Jan"));
        assert!(lines[2].contains("5.0"));
        assert!(lines[13].starts_with("Dec"));
    }

    #[test]
    fn test_table_marks_gaps() {
        let mut out = Vec::new();
        write_table(&view(FIXTURE_SPARSE), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let jan = text.lines().find(|l| l.starts_with("Jan")).unwrap();
        assert_eq!(jan.split_whitespace().collect::<Vec<_>>(), vec!["Jan", "-", "-"]);
        let jul = text.lines().find(|l| l.starts_with("Jul")).unwrap();
        assert_eq!(jul.split_whitespace().collect::<Vec<_>>(), vec!["Jul", "24.5", "-"]);
    }

    #[test]
    fn test_table_without_data() {
        let mut out = Vec::new();
        write_table(&YearlyChartView::NoData, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No data available\n");
    }

    #[test]
    fn test_csv_rows() {
        let mut out = Vec::new();
        write_csv(&view(FIXTURE_SPARSE), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "month,avg_temperature,avg_humidity");
        assert_eq!(lines[1], "Jan,,");
        assert_eq!(lines[2], "Feb,-1.25,81.0");
        assert_eq!(lines[7], "Jul,24.5,");
    }

    #[test]
    fn test_csv_without_data_is_header_only() {
        let mut out = Vec::new();
        write_csv(&YearlyChartView::NoData, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "month,avg_temperature,avg_humidity\n"
        );
    }
}
