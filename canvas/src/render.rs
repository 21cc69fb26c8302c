//! Rendering: draws a resolved chart layout to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only layout data and produces pixels; it does not mutate
//! any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Chart::redraw`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    FONT, GRID_ALPHA, GRID_LABEL_BASELINE, GRID_LABEL_X, INK, LINE_WIDTH, MARKER_LABEL_OFFSET, MARKER_RADIUS,
};
use crate::layout::{ChartLayout, Viewport};

/// Clear the surface and, when a layout is given, draw the full chart.
///
/// `viewport` is in CSS pixels; the backing store is assumed to be
/// `viewport * dpr` so the transform below keeps strokes crisp.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, layout: Option<&ChartLayout>, viewport: Viewport) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    let Some(layout) = layout else {
        return Ok(());
    };

    ctx.set_line_width(LINE_WIDTH);
    ctx.set_stroke_style_str(INK);
    ctx.set_fill_style_str(INK);
    ctx.set_font(FONT);

    draw_axes(ctx, layout);
    draw_gridlines(ctx, layout)?;
    draw_polyline(ctx, layout);
    draw_marker(ctx, layout)
}

fn draw_axes(ctx: &CanvasRenderingContext2d, layout: &ChartLayout) {
    let plot = layout.plot;
    ctx.begin_path();
    ctx.move_to(plot.left, plot.top);
    ctx.line_to(plot.left, plot.bottom);
    ctx.line_to(plot.right, plot.bottom);
    ctx.stroke();
}

fn draw_gridlines(ctx: &CanvasRenderingContext2d, layout: &ChartLayout) -> Result<(), JsValue> {
    let plot = layout.plot;
    for line in &layout.gridlines {
        ctx.fill_text(&line.label, GRID_LABEL_X, line.y + GRID_LABEL_BASELINE)?;

        ctx.save();
        ctx.set_global_alpha(GRID_ALPHA);
        ctx.begin_path();
        ctx.move_to(plot.left, line.y);
        ctx.line_to(plot.right, line.y);
        ctx.stroke();
        ctx.restore();
    }
    Ok(())
}

fn draw_polyline(ctx: &CanvasRenderingContext2d, layout: &ChartLayout) {
    let mut points = layout.line.iter();
    let Some(first) = points.next() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in points {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
}

fn draw_marker(ctx: &CanvasRenderingContext2d, layout: &ChartLayout) -> Result<(), JsValue> {
    let at = layout.marker.at;
    ctx.begin_path();
    ctx.arc(at.x, at.y, MARKER_RADIUS, 0.0, 2.0 * PI)?;
    ctx.fill();
    ctx.fill_text(&layout.marker.label, at.x + MARKER_LABEL_OFFSET, at.y - MARKER_LABEL_OFFSET)
}
