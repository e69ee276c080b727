//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js and Bootstrap are loaded by the host page as plain `<script>`
//! tags. The helper functions in `assets/js/*.js` are evaluated as globals
//! once Chart.js is present and exposed via `window.*`; this module provides
//! Rust wrappers that serialize arguments and call those globals.

// Embed the helper JS files at compile time
static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");
static TOOLTIPS_JS: &str = include_str!("../assets/js/tooltips.js");

/// How many 100ms polls to wait for a library or element before giving up.
const MAX_POLLS: u32 = 100;

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Booking JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Install the chart helpers once Chart.js has loaded. Call once at app startup.
///
/// The helpers are `function` declarations; evaluating them with an indirect
/// `eval` inside the poll callback keeps them at global scope, and each one is
/// then promoted to `window` explicitly.
pub fn init_charts() {
    let store_js = format!("window.__bookingChartScripts = {};", js_string(CHART_BRIDGE_JS));
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        r#"
        (function() {{
            if (window.__bookingChartsReady || window.__bookingChartsPolling) return;
            window.__bookingChartsPolling = true;
            var attempts = 0;
            var waitForChart = setInterval(function() {{
                attempts++;
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChart);
                    (0, eval)(window.__bookingChartScripts);
                    delete window.__bookingChartScripts;
                    if (typeof renderChart !== 'undefined') window.renderChart = renderChart;
                    if (typeof destroyChart !== 'undefined') window.destroyChart = destroyChart;
                    window.__bookingChartsReady = true;
                    console.log('Booking charts initialized');
                }} else if (attempts >= {MAX_POLLS}) {{
                    clearInterval(waitForChart);
                    console.warn('Chart.js not loaded, dashboard charts skipped');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a Chart.js chart into the canvas with the given id.
///
/// Polls until the chart helpers are installed and the canvas exists. A
/// canvas that never appears is skipped without error.
pub fn render_chart(canvas_id: &str, config_json: &str) {
    let id = js_string(canvas_id);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts++;
                if (window.__bookingChartsReady &&
                    typeof window.renderChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderChart({id}, {config});
                    }} catch(e) {{ console.error('[Booking] renderChart error:', e); }}
                }} else if (attempts >= {MAX_POLLS}) {{
                    clearInterval(poll);
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart drawn into the given canvas, if any.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyChart !== 'undefined') window.destroyChart({});",
        js_string(canvas_id)
    ));
}

/// Attach Bootstrap tooltips to every `[data-bs-toggle="tooltip"]` element.
pub fn init_tooltips() {
    call_js(&format!("{}\ninitTooltips();", TOOLTIPS_JS));
}

