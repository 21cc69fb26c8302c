//! # sensor-dashboard
//!
//! Leptos + WASM dashboard for live sensor telemetry. Readings stream in over
//! a websocket and are shown as tiles colored by freshness; two fixed chart
//! panels show the history of whichever tile is dropped on them.
//!
//! | Module | Role |
//! |--------|------|
//! | `state` | Browser-free state machines: registry, tile view, drag, charts, connection |
//! | `net` | Websocket stream client and history HTTP client |
//! | `components` | Tile strip, chart panels, trash target, status bar |
//! | `pages` | Dashboard composition, repaint loop, stream startup |
//! | `util` | Formatting, pointer detection, drop handling, clock |
//! | `config` | Compiled timings and stream URL derivation |
//!
//! The wire model lives in the `frames` crate and chart drawing in the
//! `canvas` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    log::info!("sensor dashboard starting");
    leptos::mount::hydrate_body(app::App);
}
