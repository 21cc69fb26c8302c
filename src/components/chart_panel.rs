//! One fixed history chart panel: drop target, period controls and canvas.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panel state lives in `state::chart`; this component only forwards drag
//! events and period clicks, and mirrors the panel's current series onto a
//! `canvas::Chart`. The chart keeps the last series itself so container
//! resizes redraw without another fetch.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::{Chart, canvas_height};
use frames::Period;

use crate::net::api::request_history;
use crate::state::chart::{ChartPanels, PanelId};
use crate::state::drag::{DragController, DropTarget};
use crate::state::registry::TileRegistry;
use crate::state::tiles::TileView;
use crate::util::drop_actions::{drop_on, leave_stays_inside};

/// Size the chart to the panel body minus the hint line below the canvas.
#[cfg(feature = "hydrate")]
fn fit_to_container(chart: &mut Chart, container: &web_sys::HtmlElement, hint: &web_sys::HtmlElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = f64::from(container.client_width());
    let height = canvas_height(f64::from(container.client_height()), f64::from(hint.offset_height()));
    if let Err(e) = chart.resize(width, height, window.device_pixel_ratio()) {
        leptos::logging::warn!("chart resize failed: {e:?}");
    }
}

#[cfg(feature = "hydrate")]
fn observe_resize(chart: &Rc<RefCell<Option<Chart>>>, container: web_sys::HtmlElement, hint: web_sys::HtmlElement) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let chart = Rc::clone(chart);
    let target = container.clone();
    let on_resize = Closure::<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>::wrap(Box::new(
        move |_entries: js_sys::Array, _observer: web_sys::ResizeObserver| {
            if let Some(chart) = chart.borrow_mut().as_mut() {
                fit_to_container(chart, &target, &hint);
            }
        },
    ));
    match web_sys::ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
        Ok(observer) => observer.observe(&container),
        Err(e) => leptos::logging::warn!("resize observer unavailable: {e:?}"),
    }
    on_resize.forget();
}

/// History chart bound by dropping a tile on it.
#[component]
pub fn GraphPanel(id: PanelId) -> impl IntoView {
    let panels = expect_context::<RwSignal<ChartPanels>>();
    let drag = expect_context::<RwSignal<DragController>>();
    let registry = expect_context::<RwSignal<TileRegistry>>();
    let tiles = expect_context::<RwSignal<TileView>>();
    let target = DropTarget::Panel(id);

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let body_ref = NodeRef::<leptos::html::Div>::new();
    let hint_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "hydrate")]
    {
        let series = Memo::new(move |_| panels.with(|p| p.panel(id).series.clone()));
        let chart = Rc::new(RefCell::new(None::<Chart>));

        let chart_mount = Rc::clone(&chart);
        Effect::new(move || {
            let (Some(canvas), Some(body), Some(hint)) = (canvas_ref.get(), body_ref.get(), hint_ref.get()) else {
                return;
            };
            if chart_mount.borrow().is_some() {
                return;
            }
            let body: web_sys::HtmlElement = body.into();
            let hint: web_sys::HtmlElement = hint.into();
            let mut instance = Chart::new(canvas);
            instance.core.show(series.get_untracked());
            fit_to_container(&mut instance, &body, &hint);
            *chart_mount.borrow_mut() = Some(instance);
            observe_resize(&chart_mount, body, hint);
        });

        let chart_draw = Rc::clone(&chart);
        Effect::new(move || {
            let next = series.get();
            if let Some(chart) = chart_draw.borrow_mut().as_mut() {
                if let Err(e) = chart.show(next) {
                    leptos::logging::warn!("chart draw failed: {e:?}");
                }
            }
        });
    }

    let title = move || panels.with(|p| p.panel(id).title());
    let hint = move || panels.with(|p| p.panel(id).hint.text());
    let loading = move || panels.with(|p| p.panel(id).is_loading());
    let hovered = move || drag.with(|d| d.is_hovered(target));

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        if drag.try_update(|d| d.drag_over(target)).unwrap_or(false) {
            ev.prevent_default();
        }
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        let inside = leave_stays_inside(&ev);
        drag.update(|d| d.drag_leave(target, inside));
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drop_on(target, drag, registry, tiles, panels);
    };

    let period_button = move |period: Period| {
        let on_click = move |_| {
            if let Some(ticket) = panels.try_update(|p| p.select_period(id, period)).flatten() {
                request_history(panels, ticket);
            }
        };
        view! {
            <button
                class="graph__period"
                class:active=move || panels.with(|p| p.panel(id).period == period)
                data-p=period.as_str()
                on:click=on_click
            >
                {period.as_str()}
            </button>
        }
    };

    view! {
        <section
            class="graph"
            id=id.dom_id()
            class:over=hovered
            class:graph--loading=loading
            draggable="false"
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <header class="graph__header">
                <span class="graph__title">{title}</span>
                <span class="graph__periods">
                    {Period::ALL.into_iter().map(period_button).collect_view()}
                </span>
            </header>
            <div class="graph__body" node_ref=body_ref>
                <canvas class="graph__canvas" style:display="block" node_ref=canvas_ref></canvas>
                <span class="graph__hint" node_ref=hint_ref>{hint}</span>
            </div>
        </section>
    }
}
