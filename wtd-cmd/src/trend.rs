//! `trend`: daily averages for one month of the summary year.

use std::io::Write;
use crate::format_value;
use wtd_core::client::SummaryClient;
use wtd_core::trend::MonthlyTrend;

pub async fn run_trend<W: Write>(
    client: &SummaryClient,
    month: u32,
    out: &mut W,
) -> anyhow::Result<()> {
    let trend = client.fetch_monthly_trend(month).await?;
    log::info!(
        "Monthly trend {}-{:02}: {} observed days",
        trend.year,
        trend.month,
        trend.observed_days().count()
    );
    write_trend(&trend, out)
}

pub fn write_trend<W: Write>(trend: &MonthlyTrend, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Daily averages for {}-{:02}", trend.year, trend.month)?;
    writeln!(
        out,
        "{:>3} {:>10} {:>13} {:>6}",
        "Day", "Temp (°C)", "Humidity (%)", "Obs"
    )?;
    for day in &trend.daily_aggregates {
        writeln!(
            out,
            "{:>3} {:>10} {:>13} {:>6}",
            day.day,
            format_value(day.avg_temperature),
            format_value(day.avg_humidity),
            day.observation_count
        )?;
    }
    writeln!(
        out,
        "Most common condition: {}",
        trend.most_common_condition.as_deref().unwrap_or("-")
    )?;
    Ok(())
}
