//! Dashboard page: chart panels, tile strip, trash and status bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it starts the stream client and the
//! freshness repaint loop; both run for the lifetime of the page.

use leptos::prelude::*;

use crate::components::chart_panel::GraphPanel;
use crate::components::status_bar::StatusBar;
use crate::components::tile_strip::TileStrip;
use crate::components::trash::Trash;
use crate::config::DashboardConfig;
use crate::state::chart::{ChartPanels, PanelId};
use crate::state::connection::ConnectionState;
use crate::state::registry::TileRegistry;
use crate::state::tiles::TileView;

/// Dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let registry = expect_context::<RwSignal<TileRegistry>>();
    let tiles = expect_context::<RwSignal<TileView>>();
    let panels = expect_context::<RwSignal<ChartPanels>>();
    let connection = expect_context::<RwSignal<ConnectionState>>();
    let config = expect_context::<DashboardConfig>();

    #[cfg(feature = "hydrate")]
    {
        crate::net::frame_client::spawn_stream_client(registry, tiles, panels, connection, config);

        let repaint_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let repaint_alive_task = repaint_alive.clone();
        let interval = std::time::Duration::from_millis(u64::from(config.repaint_interval_ms));
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(interval).await;
                if !repaint_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let now = crate::util::clock::now_ms();
                registry.with_untracked(|r| tiles.update(|t| t.repaint(r, now)));
            }
        });
        on_cleanup(move || repaint_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (registry, tiles, panels, connection, config);
    }

    view! {
        <div class="dashboard-page">
            <section class="dashboard-page__graphs">
                <GraphPanel id=PanelId::One/>
                <GraphPanel id=PanelId::Two/>
            </section>
            <TileStrip/>
            <Trash/>
            <StatusBar/>
        </div>
    }
}
