//! Chart geometry: everything the renderer draws, computed as plain data.
//!
//! Keeping the math here (and out of [`crate::render`]) means scaling,
//! extents and labels are unit-tested without a browser.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{GRID_DIVISIONS, PAD_BOTTOM, PAD_LEFT, PAD_RIGHT, PAD_TOP};

/// One sample of a time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Milliseconds since the Unix epoch.
    pub t_ms: f64,
    pub value: f64,
}

/// An ordered series plus the unit label shown next to the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub unit: String,
    pub samples: Vec<Sample>,
}

impl Series {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Drawing surface size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1.0, height: 1.0, dpr: 1.0 }
    }
}

/// A point in CSS pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed range `[min, max]` over one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Smallest extent covering every value, or `None` when there are none.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(e) => Some(Self { min: e.min.min(v), max: e.max.max(v) }),
        })
    }

    /// Width used for scaling. A zero-width extent scales over a unit span.
    #[must_use]
    pub fn span(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 { span } else { 1.0 }
    }

    /// Position of `v` within the extent, 0.0 at `min`.
    #[must_use]
    pub fn fraction(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}

/// The rectangle inside the padding where data is plotted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    #[must_use]
    pub fn within(viewport: Viewport) -> Self {
        Self {
            left: PAD_LEFT,
            top: PAD_TOP,
            right: viewport.width - PAD_RIGHT,
            bottom: viewport.height - PAD_BOTTOM,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A labelled horizontal gridline.
#[derive(Debug, Clone, PartialEq)]
pub struct Gridline {
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// The filled dot on the most recent sample and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub at: Point,
    pub label: String,
}

/// Fully resolved chart geometry for one series in one viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotRect,
    pub time: Extent,
    pub values: Extent,
    /// Bottom-to-top, one per band boundary of the value extent.
    pub gridlines: Vec<Gridline>,
    /// Polyline vertices in series order.
    pub line: Vec<Point>,
    pub marker: Marker,
}

/// Compute the layout of `series` in `viewport`. Returns `None` for an empty
/// series, which renders as a blank surface.
#[must_use]
pub fn layout(series: &Series, viewport: Viewport) -> Option<ChartLayout> {
    let last = series.samples.last()?;
    let time = Extent::of(series.samples.iter().map(|s| s.t_ms))?;
    let values = Extent::of(series.samples.iter().map(|s| s.value))?;
    let plot = PlotRect::within(viewport);

    let project = |s: &Sample| {
        Point::new(
            plot.left + time.fraction(s.t_ms) * plot.width(),
            plot.bottom - values.fraction(s.value) * plot.height(),
        )
    };

    let divisions = f64::from(GRID_DIVISIONS);
    let gridlines = (0..=GRID_DIVISIONS)
        .map(|i| {
            let step = f64::from(i) / divisions;
            let value = values.min + values.span() * step;
            Gridline { y: plot.bottom - plot.height() * step, value, label: format_value(value) }
        })
        .collect();

    Some(ChartLayout {
        plot,
        time,
        values,
        gridlines,
        line: series.samples.iter().map(project).collect(),
        marker: Marker { at: project(last), label: marker_label(last.value, &series.unit) },
    })
}

/// Two-decimal rendering shared by gridline and marker labels.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Label for the last-point marker, e.g. `"21.50 C"`.
#[must_use]
pub fn marker_label(value: f64, unit: &str) -> String {
    let unit = unit.trim();
    if unit.is_empty() {
        format_value(value)
    } else {
        format!("{} {unit}", format_value(value))
    }
}
