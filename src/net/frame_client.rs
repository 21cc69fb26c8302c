//! WebSocket stream client for live telemetry.
//!
//! The stream client manages the websocket lifecycle: connection, fixed-delay
//! reconnection, frame decoding, and signal updates. It is the bridge between
//! the telemetry server's frame protocol and the dashboard state.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment. Frame application is plain state mutation
//! and is tested natively.
//!
//! ERROR HANDLING
//! ==============
//! Malformed frames are logged and dropped without touching the connection.
//! Transport failures surface only as the status-bar label and a reconnect.

#[cfg(test)]
#[path = "frame_client_test.rs"]
mod frame_client_test;

use frames::{Key, StreamFrame};

use crate::state::registry::TileRegistry;
use crate::state::tiles::TileView;

/// Fold one decoded frame into the registry and tile view.
///
/// A snapshot upserts every point, projects each key and sorts once at the
/// end; an update upserts, projects and sorts its single point. Returns the
/// key of an `update` frame, which bound chart panels refresh against.
pub fn apply_stream_frame(frame: StreamFrame, registry: &mut TileRegistry, tiles: &mut TileView, now_ms: f64) -> Option<Key> {
    match frame {
        StreamFrame::Snapshot(points) => {
            for point in points {
                let key = registry.upsert(point, now_ms);
                tiles.project(registry, &key, now_ms);
            }
            tiles.sort();
            None
        }
        StreamFrame::Update(point) => {
            let key = registry.upsert(point, now_ms);
            tiles.project(registry, &key, now_ms);
            tiles.sort();
            Some(key)
        }
    }
}

/// Decode a binary websocket message as UTF-8 frame text.
///
/// # Errors
///
/// Returns the UTF-8 error for non-text payloads.
pub fn binary_frame_text(bytes: Vec<u8>) -> Result<String, std::string::FromUtf8Error> {
    String::from_utf8(bytes)
}

#[cfg(feature = "hydrate")]
pub use self::browser::spawn_stream_client;

#[cfg(feature = "hydrate")]
mod browser {
    use futures::StreamExt;
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, WebSocketError};
    use leptos::logging::{log, warn};
    use leptos::prelude::*;

    use super::{apply_stream_frame, binary_frame_text};
    use crate::config::{DashboardConfig, stream_url_from_location};
    use crate::net::api::request_all;
    use crate::state::chart::ChartPanels;
    use crate::state::connection::ConnectionState;
    use crate::state::registry::TileRegistry;
    use crate::state::tiles::TileView;
    use crate::util::clock::now_ms;

    /// Signals the stream client writes to.
    #[derive(Clone, Copy)]
    struct Targets {
        registry: RwSignal<TileRegistry>,
        tiles: RwSignal<TileView>,
        panels: RwSignal<ChartPanels>,
        connection: RwSignal<ConnectionState>,
    }

    /// Spawn the websocket lifecycle as a local async task.
    ///
    /// Connects to `/ws` on the page host, applies incoming frames, and
    /// reconnects after a fixed delay whenever the socket closes.
    pub fn spawn_stream_client(
        registry: RwSignal<TileRegistry>,
        tiles: RwSignal<TileView>,
        panels: RwSignal<ChartPanels>,
        connection: RwSignal<ConnectionState>,
        config: DashboardConfig,
    ) {
        let targets = Targets { registry, tiles, panels, connection };
        leptos::task::spawn_local(stream_loop(targets, config));
    }

    /// Connection loop. Exits only when another reconnect is already pending.
    async fn stream_loop(targets: Targets, config: DashboardConfig) {
        let delay = std::time::Duration::from_millis(u64::from(config.reconnect_delay_ms));
        loop {
            let attempt = targets
                .connection
                .try_update(|c| {
                    c.begin_connect();
                    c.attempts()
                })
                .unwrap_or_default();
            log!("stream connect attempt {attempt}");

            match stream_url_from_location() {
                Some(url) => match connect_and_run(&url, targets).await {
                    Ok(()) => log!("stream closed"),
                    Err(e) => {
                        warn!("stream error: {e}");
                        targets.connection.update(ConnectionState::on_error);
                    }
                },
                None => warn!("stream url unavailable"),
            }

            let schedule = targets.connection.try_update(ConnectionState::on_closed).unwrap_or(false);
            if !schedule {
                break;
            }
            gloo_timers::future::sleep(delay).await;
            if !targets.connection.try_update(ConnectionState::on_reconnect_due).unwrap_or(false) {
                break;
            }
        }
    }

    /// Connect and process messages until the socket closes.
    async fn connect_and_run(url: &str, targets: Targets) -> Result<(), String> {
        let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;
        targets.connection.update(ConnectionState::on_open);
        log!("stream connected: {url}");

        while let Some(msg) = ws.next().await {
            match msg {
                Ok(Message::Text(text)) => handle_text(&text, targets),
                Ok(Message::Bytes(bytes)) => match binary_frame_text(bytes) {
                    Ok(text) => handle_text(&text, targets),
                    Err(e) => warn!("discarding binary frame: {e}"),
                },
                Err(WebSocketError::ConnectionClose(event)) => {
                    log!("stream close: code {} clean {}", event.code, event.was_clean);
                    return Ok(());
                }
                Err(e) => return Err(e.to_string()),
            }
        }
        Ok(())
    }

    fn handle_text(text: &str, targets: Targets) {
        let frame = match frames::decode_frame(text) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("discarding malformed frame: {e}");
                return;
            }
        };

        let now = now_ms();
        let mut live_key = None;
        targets.registry.update(|registry| {
            targets.tiles.update(|tiles| live_key = apply_stream_frame(frame, registry, tiles, now));
        });

        if let Some(key) = live_key {
            let tickets = targets.panels.try_update(|p| p.on_live_update(&key)).unwrap_or_default();
            request_all(targets.panels, tickets);
        }
    }
}
