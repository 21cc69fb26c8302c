//! Bottom status bar showing stream connection state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transport failures never raise dialogs; this label is the only place a
//! dropped stream or pending reconnect is visible to the operator.

use leptos::prelude::*;

use crate::state::connection::ConnectionState;
use crate::state::registry::TileRegistry;

/// Status bar at the bottom of the dashboard.
#[component]
pub fn StatusBar() -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionState>>();
    let registry = expect_context::<RwSignal<TileRegistry>>();

    let status = move || connection.with(|c| c.status);
    let attempts = move || connection.with(ConnectionState::attempts_label);
    let sensor_count = move || registry.with(TileRegistry::len);

    view! {
        <div class="status-bar">
            <span class="status-bar__item" title=attempts>
                <span class=move || format!("status-bar__dot {}", status().css_class())></span>
                <span id="status">{move || status().label()}</span>
            </span>
            <span class="status-bar__divider" aria-hidden="true"></span>
            <span class="status-bar__item">{move || format!("{} sensors", sensor_count())}</span>
        </div>
    }
}
