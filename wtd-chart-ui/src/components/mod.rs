//! Reusable Dioxus RSX components for the weather trends dashboard.

mod chart_panel;
mod error_display;
mod loading_spinner;
mod no_data;
mod yearly_averages_chart;

pub use chart_panel::ChartPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use no_data::NoDataPlaceholder;
pub use yearly_averages_chart::YearlyAveragesChart;
