//! Weather Trends Dashboard
//!
//! Fetches the backend's yearly summary once and charts average temperature
//! and humidity for each month of that year.
//!
//! Data flow:
//! 1. On mount, a single `fetch` of `/api/v1/yearly-summary` is spawned.
//! 2. The outcome settles `AppState::page` into `Loaded` or `Failed`.
//! 3. `Loading` and `Failed` render only a status line; `Loaded` renders the
//!    page chrome and hands the summary to `YearlyAveragesChart`, which draws
//!    both series through the D3.js bridge or shows the no-data placeholder.

use dioxus::prelude::*;
use wtd_chart_ui::components::{ErrorDisplay, LoadingSpinner, YearlyAveragesChart};
use wtd_chart_ui::js_bridge;
use wtd_chart_ui::state::AppState;
use wtd_core::config::YEARLY_SUMMARY_PATH;
use wtd_core::page::{PageState, PAGE_TITLE};

/// D3.js, loaded from a CDN and polled for by the chart bridge.
const D3_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One fetch per page load; nothing is read here, so the effect never re-runs.
    use_effect(move || {
        spawn(async move {
            let result = js_bridge::fetch_yearly_summary(YEARLY_SUMMARY_PATH).await;
            state.page.set(PageState::from_result(result));
        });
    });

    let page = state.page.read().clone();

    rsx! {
        document::Meta { charset: "utf-8".to_string() }
        document::Script { src: D3_SCRIPT_URL.to_string() }

        match page {
            PageState::Loading => rsx! { LoadingSpinner {} },
            PageState::Failed(message) => rsx! { ErrorDisplay { message } },
            PageState::Loaded(summary) => rsx! {
                main {
                    style: "min-height: 100vh; background: #F9FAFB; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
                    header {
                        style: "background: #FFFFFF; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);",
                        div {
                            style: "max-width: 1280px; margin: 0 auto; padding: 16px 32px;",
                            h1 {
                                style: "margin: 0; font-size: 30px; font-weight: 700; color: #111827;",
                                "{PAGE_TITLE}"
                            }
                        }
                    }
                    section {
                        YearlyAveragesChart { summary }
                    }
                }
            },
        }
    }
}
