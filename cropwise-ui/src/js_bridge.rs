//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals once D3 has loaded. The wrappers here
//! serialize their arguments and call those globals.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static GROUPED_BAR_CHART_JS: &str = include_str!("../assets/js/grouped-bar-chart.js");
static RADAR_CHART_JS: &str = include_str!("../assets/js/radar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");

/// Global functions defined by the chart scripts.
const CHART_FUNCTIONS: [&str; 8] = [
    "initTooltip",
    "showTooltip",
    "hideTooltip",
    "renderBarChart",
    "renderGroupedBarChart",
    "renderRadarChart",
    "renderPieChart",
    "destroyChart",
];

/// Execute arbitrary JS, wrapping in try/catch so errors never reach Rust.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[CropWise] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once at startup.
///
/// The scripts are stored on `window` and evaluated at global scope with an
/// indirect eval once `d3` exists, then each function is promoted to
/// `window.*` explicitly.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        BAR_CHART_JS,
        GROUPED_BAR_CHART_JS,
        RADAR_CHART_JS,
        PIE_CHART_JS,
    ]
    .join("\n");

    let _ = js_sys::eval(&format!("window.__cropwiseChartScripts = {};", js_string(&all_js)));

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__cropwiseChartsReady) return;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined' && window.__cropwiseChartScripts) {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__cropwiseChartScripts);
                    delete window.__cropwiseChartScripts;
                    {promote}
                    window.__cropwiseChartsReady = true;
                    console.log('[CropWise] charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Poll until the charts are initialized and the container exists, then
/// call `window.<function>(container_id, data_json, config_json)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__cropwiseChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[CropWise] {function} error:', e); }}
                }} else if (attempts > 300) {{
                    clearInterval(poll);
                    console.warn('[CropWise] {function}: gave up waiting for', {id});
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Horizontal bar chart, one bar per `{label, value, color}` datum.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Grouped bar chart, one group per `{group, values: [{key, value}]}` datum.
pub fn render_grouped_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGroupedBarChart", container_id, data_json, config_json);
}

/// Radar chart, one axis per `{axis, value}` datum.
pub fn render_radar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderRadarChart", container_id, data_json, config_json);
}

/// Donut chart, one slice per `{label, value, percent, color}` datum.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Clear a chart container.
pub fn destroy_chart(container_id: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        "if (window.destroyChart) {{ window.destroyChart({id}); }} else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }}"
    ));
}
