//! Compiled dashboard defaults and endpoint derivation.
//!
//! There is no runtime configuration surface: the dashboard is served from
//! the same origin as its stream and history endpoints, so everything is
//! derived from the page location.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Timings used by the stream client, repaint loop and gesture handling.
/// Provided as context by `app::App`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Fixed delay before reconnecting a closed stream.
    pub reconnect_delay_ms: u32,
    /// Cadence of the freshness repaint.
    pub repaint_interval_ms: u32,
    /// Touch hold required before a tile becomes draggable.
    pub long_press_ms: u32,
    /// Delay before a touch-armed tile is disarmed again.
    pub drag_disarm_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { reconnect_delay_ms: 4_000, repaint_interval_ms: 30_000, long_press_ms: 400, drag_disarm_ms: 50 }
    }
}

/// Path of the telemetry stream on the page's host.
pub const STREAM_PATH: &str = "/ws";

/// Websocket URL for a page served with `protocol` (as reported by
/// `location.protocol`, with or without the trailing colon) from `host`.
#[must_use]
pub fn stream_url(protocol: &str, host: &str) -> String {
    let scheme = if protocol.trim_end_matches(':').eq_ignore_ascii_case("https") { "wss" } else { "ws" };
    format!("{scheme}://{host}{STREAM_PATH}")
}

/// Stream URL for the current page, or `None` outside the browser.
pub fn stream_url_from_location() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let location = web_sys::window()?.location();
        let protocol = location.protocol().ok()?;
        let host = location.host().ok()?;
        Some(stream_url(&protocol, &host))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
