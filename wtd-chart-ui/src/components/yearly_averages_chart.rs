//! Yearly averages: a temperature chart and a humidity chart, Jan through Dec.

use crate::components::{ChartPanel, NoDataPlaceholder};
use crate::js_bridge;
use dioxus::prelude::*;
use wtd_core::series::YearlyChartView;
use wtd_core::summary::YearlySummary;

/// Chart container DOM element IDs used by D3.js to render into.
pub const TEMPERATURE_CHART_ID: &str = "temperature-chart";
pub const HUMIDITY_CHART_ID: &str = "humidity-chart";

/// Container ids in the order of [`YearlyCharts::series`](wtd_core::series::YearlyCharts::series).
const CHART_IDS: [&str; 2] = [TEMPERATURE_CHART_ID, HUMIDITY_CHART_ID];

#[derive(Props, Clone, PartialEq)]
pub struct YearlyAveragesChartProps {
    pub summary: YearlySummary,
}

/// Renders both monthly series for a loaded summary, or the no-data
/// placeholder when the summary has no year or no months.
#[component]
pub fn YearlyAveragesChart(props: YearlyAveragesChartProps) -> Element {
    let view = YearlyChartView::from_summary(&props.summary);

    // Hooks must run on every render, including the placeholder path.
    let effect_view = view.clone();
    use_effect(move || {
        let Some(charts) = effect_view.charts() else {
            return;
        };
        js_bridge::init_charts();
        for (id, series) in CHART_IDS.into_iter().zip(charts.series()) {
            js_bridge::render_series(id, charts, series);
        }
    });
    use_drop(|| {
        for id in CHART_IDS {
            js_bridge::destroy_chart(id);
        }
    });

    let charts = match view {
        YearlyChartView::NoData => return rsx! { NoDataPlaceholder {} },
        YearlyChartView::Charts(charts) => charts,
    };
    let title = charts.title();

    rsx! {
        div {
            style: "padding: 16px;",
            h2 {
                style: "margin: 0 0 16px 0; font-size: 24px; font-weight: 700;",
                "{title}"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 16px;",
                for (id, series) in CHART_IDS.into_iter().zip(charts.series()) {
                    ChartPanel {
                        key: "{id}",
                        id: id.to_string(),
                        heading: series.heading.to_string(),
                        unit_description: series.label.to_string(),
                    }
                }
            }
        }
    }
}
