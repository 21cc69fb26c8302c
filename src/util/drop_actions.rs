//! Drop handling shared by the trash and chart panel targets.
//!
//! A drop is resolved in two phases:
//!
//! 1. **Resolve**: the drag controller consumes its session and names the
//!    outcome (`state::drag::DropOutcome`).
//! 2. **Apply**: the outcome is written into the registry, tile view and
//!    chart panels, and any resulting history request is issued.

#[cfg(test)]
#[path = "drop_actions_test.rs"]
mod drop_actions_test;

use leptos::prelude::*;

use crate::net::api::request_history;
use crate::state::chart::{ChartPanels, FetchTicket};
use crate::state::drag::{DragController, DropOutcome, DropTarget};
use crate::state::registry::TileRegistry;
use crate::state::tiles::TileView;

/// Apply a resolved drop. Returns the history request a bind needs.
///
/// Muting an unknown key, or a key that is already muted, only re-asserts
/// the hidden state.
pub fn apply_drop(
    outcome: DropOutcome,
    registry: &mut TileRegistry,
    tiles: &mut TileView,
    panels: &mut ChartPanels,
) -> Option<FetchTicket> {
    match outcome {
        DropOutcome::Mute(key) => {
            if registry.mute(&key) {
                tiles.set_hidden(&key, true);
            }
            None
        }
        DropOutcome::Bind { panel, key } => Some(panels.bind(panel, key)),
    }
}

/// Complete a drop on `target` against the context signals.
pub fn drop_on(
    target: DropTarget,
    drag: RwSignal<DragController>,
    registry: RwSignal<TileRegistry>,
    tiles: RwSignal<TileView>,
    panels: RwSignal<ChartPanels>,
) {
    let Some(outcome) = drag.try_update(|d| d.drop(target)).flatten() else {
        return;
    };
    let mut ticket = None;
    registry.update(|r| {
        tiles.update(|t| {
            panels.update(|p| ticket = apply_drop(outcome, r, t, p));
        });
    });
    if let Some(ticket) = ticket {
        request_history(panels, ticket);
    }
}

/// Whether a `dragleave` moved the pointer onto a descendant of the element
/// that fired it, rather than out of it.
pub fn leave_stays_inside(ev: &leptos::ev::DragEvent) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let as_node = |t: web_sys::EventTarget| t.dyn_into::<web_sys::Node>().ok();
        let Some(current) = ev.current_target().and_then(as_node) else {
            return false;
        };
        let related = ev.related_target().and_then(as_node);
        related.is_some() && current.contains(related.as_ref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        false
    }
}
