//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time, and are evaluated as globals (no ES modules) exposed via `window.*`.
//! This module serializes chart specs and calls those globals.

use hps_data::chart::{ChartKind, ChartSpec};

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");

/// Functions promoted to `window` once the scripts are evaluated.
const EXPORTED_FUNCTIONS: [&str; 5] = [
    "renderBarChart",
    "renderPieChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// DOM id of the `index`-th chart container on the page.
pub fn chart_dom_id(index: usize) -> String {
    format!("facility-chart-{}", index)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HPS JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stashed on `window` and evaluated at global scope via an
/// indirect `eval` once D3 is present, so their `function` declarations are
/// not block-scoped inside the `setInterval` callback. Safe to call more than
/// once; later calls are no-ops.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, PIE_CHART_JS].join("\n");

    let promote: String = EXPORTED_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__hpsChartScripts !== undefined || window.__hpsChartsReady) return;
            window.__hpsChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__hpsChartScripts);
                    delete window.__hpsChartScripts;
                    {promote}
                    window.__hpsChartsReady = true;
                    console.log('HPS charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = serde_json::to_string(&all_js).unwrap_or_else(|_| "''".to_string()),
        promote = promote,
    );
    let _ = js_sys::eval(&init_js);
}

/// Poll interval while waiting for D3 and the chart container, in ms.
const POLL_INTERVAL_MS: u32 = 100;

/// Polls before a pending render is abandoned (about 10 s).
const MAX_POLLS: u32 = 100;

/// JS that calls `window.<function>(container_id, data_json, config_json)` once
/// the chart scripts are ready and the container exists in the DOM.
///
/// Each container has at most one pending poll: a newer render replaces the
/// older one, and a poll gives up after [`MAX_POLLS`] attempts.
fn render_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    // JSON-encode the payloads so they arrive as JS string literals.
    let quote = |s: &str| serde_json::to_string(s).unwrap_or_else(|_| "''".to_string());
    let id = quote(container_id);
    let data = quote(data_json);
    let config = quote(config_json);

    format!(
        r#"
        (function() {{
            var polls = window.__hpsPendingRenders = window.__hpsPendingRenders || {{}};
            if (polls[{id}] !== undefined) clearInterval(polls[{id}]);
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__hpsChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    delete polls[{id}];
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[HPS] {function} error:', e); }}
                }} else if (attempts >= {max_polls}) {{
                    clearInterval(poll);
                    if (polls[{id}] === poll) delete polls[{id}];
                    console.warn('[HPS] gave up rendering', {id});
                }}
            }}, {interval});
            polls[{id}] = poll;
        }})();
        "#,
        max_polls = MAX_POLLS,
        interval = POLL_INTERVAL_MS,
    )
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(function, container_id, data_json, config_json));
}

/// Render a (possibly stacked) bar chart of facility counts per year.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render a pie chart with percentage hover data.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Serialize `spec` and hand it to the matching D3 renderer.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    match &spec.kind {
        ChartKind::Bar {
            x_label,
            color_label,
            bars,
        } => {
            let data_json = serde_json::to_string(bars).unwrap_or_default();
            let config_json = serde_json::json!({
                "title": spec.title,
                "xLabel": x_label,
                "yLabel": spec.value_label,
                "colorLabel": color_label,
                "color": "#636EFA",
            })
            .to_string();
            render_bar_chart(container_id, &data_json, &config_json);
        }
        ChartKind::Pie { name_label, slices } => {
            let data_json = serde_json::to_string(slices).unwrap_or_default();
            let config_json = serde_json::json!({
                "title": spec.title,
                "nameLabel": name_label,
                "valueLabel": spec.value_label,
            })
            .to_string();
            render_pie_chart(container_id, &data_json, &config_json);
        }
    }
}

/// Destroy/clean up a chart in the given container, cancelling any pending render.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

fn destroy_script(container_id: &str) -> String {
    let id = serde_json::to_string(container_id).unwrap_or_else(|_| "''".to_string());
    format!(
        "var polls = window.__hpsPendingRenders; \
         if (polls && polls[{id}] !== undefined) {{ clearInterval(polls[{id}]); delete polls[{id}]; }} \
         var el = document.getElementById({id}); if (el) el.innerHTML = '';"
    )
}
