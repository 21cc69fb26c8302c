//! Trash drop target: hides a tile until its next reading.

use leptos::prelude::*;

use crate::state::chart::ChartPanels;
use crate::state::drag::{DragController, DropTarget};
use crate::state::registry::TileRegistry;
use crate::state::tiles::TileView;
use crate::util::drop_actions::{drop_on, leave_stays_inside};

/// Shown only while a tile is being dragged.
#[component]
pub fn Trash() -> impl IntoView {
    let drag = expect_context::<RwSignal<DragController>>();
    let registry = expect_context::<RwSignal<TileRegistry>>();
    let tiles = expect_context::<RwSignal<TileView>>();
    let panels = expect_context::<RwSignal<ChartPanels>>();

    let visible = move || drag.with(DragController::trash_visible);
    let hovered = move || drag.with(|d| d.is_hovered(DropTarget::Trash));

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        if drag.try_update(|d| d.drag_over(DropTarget::Trash)).unwrap_or(false) {
            ev.prevent_default();
        }
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        let inside = leave_stays_inside(&ev);
        drag.update(|d| d.drag_leave(DropTarget::Trash, inside));
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drop_on(DropTarget::Trash, drag, registry, tiles, panels);
    };

    view! {
        <div
            id="trash"
            class="trash"
            class:trash--visible=visible
            class:over=hovered
            title="Drop a tile here to hide it until its next reading"
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            "🗑"
        </div>
    }
}
