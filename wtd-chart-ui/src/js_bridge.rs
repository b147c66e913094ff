//! Typed wrappers around browser APIs and JS interop via `js_sys::eval()`.
//!
//! The D3.js line chart lives in `assets/js/line-chart.js`. It is evaluated
//! as a global script (no ES modules) once D3 is available and exposed via
//! `window.*`. This module also performs the dashboard's single `fetch` of
//! the yearly summary through `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use wtd_core::decode::decode_json;
use wtd_core::error::{FetchError, Result};
use wtd_core::series::{ChartSeries, YearlyCharts};
use wtd_core::summary::YearlySummary;

// Embed the D3 chart JS at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WTD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// `line-chart.js` defines `renderLineChart(...)` via a `function`
/// declaration. It is evaluated at global scope through an indirect `eval()`
/// once D3 is ready, then promoted to `window.*`. Calling this more than once
/// is harmless.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__wtdChartsReady) {{ window.__wtdChartScripts = {}; }}",
        serde_json::to_string(LINE_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__wtdChartsReady || window.__wtdChartsPending) return;
            window.__wtdChartsPending = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__wtdChartScripts);
                    delete window.__wtdChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    window.__wtdChartsReady = true;
                    console.log('WTD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Quote `s` as a JS string literal. JSON string syntax is valid JS, so
/// backslashes, quotes and line breaks inside `s` survive intact.
fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Render a single line chart into `container_id`.
///
/// Uses a polling loop to wait for D3.js to load, the chart script to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    let id_literal = js_string_literal(container_id);
    let data_literal = js_string_literal(data_json);
    let config_literal = js_string_literal(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wtdChartsReady &&
                    typeof window.renderLineChart !== 'undefined' &&
                    document.getElementById({id_literal})) {{
                    clearInterval(poll);
                    try {{
                        window.renderLineChart({id_literal}, {data_literal}, {config_literal});
                    }} catch(e) {{ console.error('[WTD] renderLineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Serialize one series of `charts` and hand it to the D3 renderer.
pub fn render_series(container_id: &str, charts: &YearlyCharts, series: &ChartSeries) {
    let data_json = serde_json::to_string(&series.points()).unwrap_or_default();
    let config_json = serde_json::to_string(&charts.config_for(series)).unwrap_or_default();
    log::debug!(
        "Rendering {} ({} of 12 months) into #{}",
        series.heading,
        series.defined_count(),
        container_id
    );
    render_line_chart(container_id, &data_json, &config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string_literal(container_id)
    ));
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// GET the yearly summary from `url` with the browser's `fetch`.
///
/// A rejected `fetch` promise is a `Network` error; the status and body are
/// then classified by [`decode_json`] exactly as the native client does.
pub async fn fetch_yearly_summary(url: &str) -> Result<YearlySummary> {
    log::info!("Fetching yearly summary from {}", url);
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::Network(js_error(e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| FetchError::Network(js_error(e)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(js_error(e)))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|e| FetchError::Network(js_error(e)))?;

    let status = response.status();
    let text_promise = response
        .text()
        .map_err(|e| FetchError::Network(js_error(e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::Network(js_error(e)))?
        .as_string()
        .unwrap_or_default();

    decode_json(status, &body)
}
