use super::*;

#[test]
fn defaults() {
    let config = DashboardConfig::default();
    assert_eq!(config.reconnect_delay_ms, 4_000);
    assert_eq!(config.repaint_interval_ms, 30_000);
    assert_eq!(config.long_press_ms, 400);
    assert_eq!(config.drag_disarm_ms, 50);
}

#[test]
fn https_pages_use_wss() {
    assert_eq!(stream_url("https:", "dash.example:8443"), "wss://dash.example:8443/ws");
    assert_eq!(stream_url("https", "dash.example"), "wss://dash.example/ws");
}

#[test]
fn http_pages_use_ws() {
    assert_eq!(stream_url("http:", "192.168.1.20:8000"), "ws://192.168.1.20:8000/ws");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn location_is_unavailable_natively() {
    assert!(stream_url_from_location().is_none());
}
