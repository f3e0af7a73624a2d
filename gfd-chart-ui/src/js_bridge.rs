//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is loaded as a global from its CDN bundle (no ES modules).
//! This module provides safe Rust wrappers that inject the script tag once,
//! serialize figure descriptions, and call `window.Plotly.*` with a polling
//! loop so rendering waits for the library and the container element.

/// CDN URL of the Plotly.js bundle the bridge injects.
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GFD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Plotly.js script tag once. Call at app startup.
///
/// Sets `window.__gfdPlotlyReady` when the bundle has loaded; the render
/// wrappers poll that flag before touching `window.Plotly`.
pub fn init_charts() {
    call_js(&format!(
        r#"
        (function() {{
            if (document.getElementById('gfd-plotly-script')) return;
            var s = document.createElement('script');
            s.id = 'gfd-plotly-script';
            s.src = '{PLOTLY_CDN}';
            s.onload = function() {{
                window.__gfdPlotlyReady = true;
                console.log('GFD charts initialized');
            }};
            document.head.appendChild(s);
        }})();
        "#,
    ));
}

/// Render a figure (data, layout, and optional frames) into a container.
///
/// `figure_json` is the serialized `Figure`; animation frames are registered
/// via `Plotly.addFrames` after the initial plot so the slider and Play
/// button can find them by name.
///
/// Uses a polling loop to wait for Plotly.js to load and the container DOM
/// element to exist before rendering.
pub fn render_figure(container_id: &str, figure_json: &str) {
    let escaped = escape_single_quoted(figure_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gfdPlotlyReady &&
                    typeof window.Plotly !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        var fig = JSON.parse('{escaped}');
                        Plotly.react('{container_id}', fig.data, fig.layout, {{responsive: true}});
                        if (fig.frames && fig.frames.length) {{
                            Plotly.addFrames('{container_id}', fig.frames);
                        }}
                    }} catch(e) {{ console.error('[GFD] render_figure error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Escape a string for embedding in a single-quoted JS literal.
///
/// Backslashes must be doubled before quotes are escaped, otherwise the
/// added quote escapes get re-escaped. Serialized JSON is compact (no raw
/// newlines), so these two characters are the whole problem space.
fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
