use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::layout::{ChartLayout, Series, Viewport, layout};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// CSS height left for the canvas in a container that also holds
/// `reserved_css` pixels of sibling content. Never negative.
#[must_use]
pub fn canvas_height(container_css: f64, reserved_css: f64) -> f64 {
    (container_css - reserved_css.max(0.0)).max(0.0)
}

/// Core chart state: everything that doesn't depend on the canvas element.
///
/// Separated from `Chart` so it can be tested without WASM/browser dependencies.
/// It keeps the last series shown so a resize can redraw without refetching.
#[derive(Debug, Clone, Default)]
pub struct ChartCore {
    pub viewport: Viewport,
    series: Option<Series>,
}

impl ChartCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the CSS size and device pixel ratio. Sizes are floored and
    /// clamped to at least one pixel; the ratio is clamped to at least 1.
    ///
    /// Returns `true` if anything changed.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> bool {
        let next = Viewport {
            width: width_css.floor().max(1.0),
            height: height_css.floor().max(1.0),
            dpr: if dpr.is_finite() { dpr.max(1.0) } else { 1.0 },
        };
        if next == self.viewport {
            return false;
        }
        self.viewport = next;
        true
    }

    /// Backing-store size in device pixels for the current viewport.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        let v = self.viewport;
        ((v.width * v.dpr).round() as u32, (v.height * v.dpr).round() as u32)
    }

    /// Replace the series to draw. `None` (or an empty series) leaves the
    /// surface blank.
    pub fn show(&mut self, series: Option<Series>) {
        self.series = series.filter(|s| !s.is_empty());
    }

    /// Layout of the current series in the current viewport.
    #[must_use]
    pub fn layout(&self) -> Option<ChartLayout> {
        self.series.as_ref().and_then(|s| layout(s, self.viewport))
    }
}

/// The full chart. Wraps `ChartCore` and owns the browser canvas element.
pub struct Chart {
    canvas: HtmlCanvasElement,
    pub core: ChartCore,
}

impl Chart {
    /// Create a chart bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: ChartCore::new() }
    }

    /// Resize the backing store for a new container size and redraw the last
    /// series from memory.
    ///
    /// # Errors
    ///
    /// Returns `Err` if styling the element or drawing fails.
    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        if !self.core.set_viewport(width_css, height_css, dpr) {
            return Ok(());
        }
        let (backing_w, backing_h) = self.core.backing_size();
        self.canvas.set_width(backing_w);
        self.canvas.set_height(backing_h);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", self.core.viewport.width))?;
        style.set_property("height", &format!("{}px", self.core.viewport.height))?;
        self.redraw()
    }

    /// Show a new series (or clear with `None`) and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn show(&mut self, series: Option<Series>) -> Result<(), JsValue> {
        self.core.show(series);
        self.redraw()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn redraw(&self) -> Result<(), JsValue> {
        let ctx = self.context()?;
        render::draw(&ctx, self.core.layout().as_ref(), self.core.viewport)
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }
}
