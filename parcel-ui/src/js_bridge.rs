//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map and the D3.js trend chart live in `assets/js/*.js` and are
//! evaluated as globals (no ES modules) once both libraries have loaded.
//! This module serializes payloads and calls those globals.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the JS files at compile time
static MAP_JS: &str = include_str!("../assets/js/parcel-map.js");
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");

/// Global the map script calls with the catalog index of a clicked boundary.
pub const PARCEL_SELECT_HOOK: &str = "__parcelSelect";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Parcel JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON document for embedding in a single-quoted JS string.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize the map and chart scripts with a wait-for-libraries polling loop.
///
/// The scripts are evaluated at global scope via indirect eval once both
/// Leaflet (`L`) and D3 (`d3`) are defined, and their entry points are
/// promoted to `window.*`.
pub fn init_scripts() {
    let all_js = [MAP_JS, TREND_CHART_JS].join("\n");

    let store_js = format!(
        "window.__parcelScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' && typeof d3 !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__parcelScripts);
                    delete window.__parcelScripts;
                    if (typeof renderParcelMap !== 'undefined') window.renderParcelMap = renderParcelMap;
                    if (typeof destroyParcelMap !== 'undefined') window.destroyParcelMap = destroyParcelMap;
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    window.__parcelScriptsReady = true;
                    console.log('Parcel map and chart scripts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until the scripts are ready and `container_id` exists, then call
/// `window.<function>(container_id, ...args)`.
fn render_when_ready(function: &str, container_id: &str, args: &[&str]) {
    let args: String = args
        .iter()
        .map(|arg| format!(", '{}'", escape_for_js(arg)))
        .collect();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__parcelScriptsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}'{args});
                    }} catch(e) {{ console.error('[parcel] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render or update the parcel map in `container_id`.
///
/// `payload_json` is built by [`crate::payload::map_payload`]. An existing
/// map in the same container is updated in place, keeping custom markers.
pub fn render_parcel_map(container_id: &str, payload_json: &str) {
    render_when_ready("renderParcelMap", container_id, &[payload_json]);
}

/// Render the price trend line chart built by [`crate::payload::trend_payload`].
pub fn render_trend_chart(container_id: &str, payload_json: &str, config_json: &str) {
    render_when_ready("renderTrendChart", container_id, &[payload_json, config_json]);
}

/// Tear down the Leaflet map bound to `container_id`, if any.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyParcelMap) window.destroyParcelMap('{}');",
        container_id
    ));
}

/// Clear a chart container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Install `handler` as `window.__parcelSelect`, called by the map script
/// with the catalog index of a clicked boundary polygon.
///
/// The closure is leaked; call once at startup.
pub fn register_parcel_select<F>(handler: F)
where
    F: FnMut(u32) + 'static,
{
    let closure = Closure::<dyn FnMut(u32)>::new(handler);
    match web_sys::window() {
        Some(window) => {
            let key = JsValue::from_str(PARCEL_SELECT_HOOK);
            if js_sys::Reflect::set(&window, &key, closure.as_ref()).is_err() {
                log::warn!("could not install {}", PARCEL_SELECT_HOOK);
            }
        }
        None => log::warn!("no window; map clicks will not select parcels"),
    }
    closure.forget();
}

/// Resolve after `ms` milliseconds, using `setTimeout`.
///
/// Resolves immediately when there is no window or the timer cannot be set.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        schedule_or_resolve(
            web_sys::window(),
            |window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                    .is_ok()
            },
            || {
                let _ = resolve.call0(&JsValue::UNDEFINED);
            },
        );
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Run `schedule` on the window if there is one; call `resolve_now` when
/// there is none or scheduling failed.
fn schedule_or_resolve<W>(
    window: Option<W>,
    schedule: impl FnOnce(W) -> bool,
    resolve_now: impl FnOnce(),
) {
    let scheduled = window.map(schedule).unwrap_or(false);
    if !scheduled {
        resolve_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping_keeps_json_inside_single_quotes() {
        let json = r#"{"address":"Ngõ 5 'A'","note":"a\nb"}"#;
        let escaped = escape_for_js(json);
        assert!(escaped.contains(r"\'A\'"));
        assert!(escaped.contains(r"a\\nb"));
        assert!(!escaped.contains('\n'));
    }

    #[test]
    fn timer_without_window_resolves_at_once() {
        let mut resolved = false;
        schedule_or_resolve(None::<()>, |_| true, || resolved = true);
        assert!(resolved);

        let mut resolved = false;
        schedule_or_resolve(Some(()), |_| false, || resolved = true);
        assert!(resolved);

        let mut resolved = false;
        schedule_or_resolve(Some(()), |_| true, || resolved = true);
        assert!(!resolved);
    }
}
