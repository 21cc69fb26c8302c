//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::DashboardConfig;
use crate::pages::dashboard::DashboardPage;
use crate::state::{
    chart::ChartPanels, connection::ConnectionState, drag::DragController, registry::TileRegistry, tiles::TileView,
};
use crate::util::pointer::detect_pointer_kind;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides one signal per state domain plus the compiled configuration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let registry = RwSignal::new(TileRegistry::new());
    let tiles = RwSignal::new(TileView::new());
    let panels = RwSignal::new(ChartPanels::new());
    let drag = RwSignal::new(DragController::new(detect_pointer_kind()));
    let connection = RwSignal::new(ConnectionState::new());

    provide_context(registry);
    provide_context(tiles);
    provide_context(panels);
    provide_context(drag);
    provide_context(connection);
    provide_context(DashboardConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/sensor-dashboard.css"/>
        <Title text="Sensor dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
