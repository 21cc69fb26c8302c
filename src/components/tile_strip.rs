//! Tile strip: one element per stream key, in sorted key order.
//!
//! DESIGN
//! ======
//! The strip renders `TileView::order` through a keyed `<For>`, so a tile's
//! DOM node (and the drag/touch listeners attached here) survives reorders.
//! Each tile reads its own content through a memo and only re-renders when
//! that content changes.

use frames::Key;
use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::state::drag::DragController;
use crate::state::tiles::TileView;

/// Sorted strip of every tile seen this session.
#[component]
pub fn TileStrip() -> impl IntoView {
    let tiles = expect_context::<RwSignal<TileView>>();

    view! {
        <div class="tiles" id="tiles">
            <For
                each=move || tiles.with(|t| t.order().to_vec())
                key=|k: &Key| k.clone()
                children=move |k: Key| view! { <Tile stream_key=k/> }
            />
        </div>
    }
}

/// Run `f` once the given delay has elapsed.
#[cfg(feature = "hydrate")]
fn after_ms(ms: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(ms, f).forget();
}

/// A single sensor tile.
#[component]
fn Tile(stream_key: Key) -> impl IntoView {
    let tiles = expect_context::<RwSignal<TileView>>();
    let drag = expect_context::<RwSignal<DragController>>();
    let config = expect_context::<DashboardConfig>();

    let content = {
        let k = stream_key.clone();
        Memo::new(move |_| tiles.with(|t| t.get(&k).cloned()))
    };
    let entering = RwSignal::new(true);
    #[cfg(feature = "hydrate")]
    request_animation_frame(move || entering.set(false));

    let draggable = {
        let k = stream_key.clone();
        move || if drag.with(|d| d.is_draggable(&k)) { "true" } else { "false" }
    };
    let armed = {
        let k = stream_key.clone();
        move || drag.with(|d| d.is_armed(&k))
    };
    let dragging = {
        let k = stream_key.clone();
        move || drag.with(|d| d.dragging() == Some(&k))
    };

    let on_drag_start = {
        let k = stream_key.clone();
        move |ev: leptos::ev::DragEvent| {
            #[cfg(feature = "hydrate")]
            {
                if let Some(transfer) = ev.data_transfer() {
                    if let Err(e) = transfer.set_data("text/plain", k.as_str()) {
                        leptos::logging::warn!("drag payload rejected: {e:?}");
                    }
                }
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &ev;
            drag.update(|d| d.begin(k.clone()));
        }
    };

    let disarm_later = {
        let k = stream_key.clone();
        move || {
            #[cfg(feature = "hydrate")]
            {
                let k = k.clone();
                after_ms(config.drag_disarm_ms, move || {
                    drag.update(|d| {
                        d.disarm_if_idle(&k);
                    });
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&k, config);
            }
        }
    };

    let on_drag_end = {
        let disarm_later = disarm_later.clone();
        move |_ev: leptos::ev::DragEvent| {
            drag.update(DragController::end);
            disarm_later();
        }
    };

    let on_touch_start = {
        let k = stream_key.clone();
        move |_ev: leptos::ev::TouchEvent| {
            let Some(generation) = drag.try_update(|d| d.press_start(k.clone())).flatten() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let k = k.clone();
                after_ms(config.long_press_ms, move || {
                    drag.update(|d| {
                        d.press_elapsed(&k, generation);
                    });
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = generation;
        }
    };

    let on_touch_move = {
        let k = stream_key.clone();
        move |_ev: leptos::ev::TouchEvent| drag.update(|d| d.press_cancel(&k))
    };

    let on_touch_end = move |_ev: leptos::ev::TouchEvent| disarm_later();

    let field = move |f: fn(&crate::state::tiles::TileContent) -> String| {
        move || content.with(|c| c.as_ref().map(f).unwrap_or_default())
    };
    let hidden = move || content.with(|c| c.as_ref().is_some_and(|c| c.hidden));
    let freshness_class = move || content.with(|c| c.as_ref().map_or("tile--unknown", |c| c.freshness.css_class()));
    let class = move || {
        let mut class = format!("tile {}", freshness_class());
        for (name, on) in [
            ("tile--entering", entering.get()),
            ("drag-ready", armed()),
            ("dragging", dragging()),
            ("tile--hidden", hidden()),
        ] {
            if on {
                class.push(' ');
                class.push_str(name);
            }
        }
        class
    };
    let element_id = move || content.with(|c| c.as_ref().map(|c| c.id.to_string()));
    let dot_color = move || content.with(|c| c.as_ref().map_or("#bbb", |c| c.freshness.color()));

    view! {
        <div
            class=class
            style:display=move || if hidden() { "none" } else { "" }
            data-k=stream_key.as_str().to_owned()
            data-id=element_id
            draggable=draggable
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
        >
            <div class="tile__header">
                <span class="tile__dot" style:background-color=dot_color></span>
                <span class="tile__title">{field(|c| c.title.clone())}</span>
            </div>
            <div class="tile__value">{field(|c| c.value.clone())}</div>
            <div class="tile__meta">
                <span class="tile__node">{field(|c| c.node.clone())}</span>
                <span class="tile__ts">{field(|c| c.ts.clone())}</span>
            </div>
        </div>
    }
}
