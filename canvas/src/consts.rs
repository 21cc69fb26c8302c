//! Shared numeric and style constants for the chart crate.

// ── Plot padding (CSS pixels) ───────────────────────────────────

/// Space left of the plot for gridline value labels.
pub const PAD_LEFT: f64 = 50.0;
pub const PAD_RIGHT: f64 = 12.0;
pub const PAD_TOP: f64 = 12.0;
pub const PAD_BOTTOM: f64 = 24.0;

// ── Gridlines ───────────────────────────────────────────────────

/// The value extent is split into this many equal bands; a gridline sits on
/// every band boundary, so there are `GRID_DIVISIONS + 1` lines.
pub const GRID_DIVISIONS: u32 = 4;

/// Horizontal offset of gridline labels from the canvas edge.
pub const GRID_LABEL_X: f64 = 6.0;

/// Baseline nudge so labels sit centred on their gridline.
pub const GRID_LABEL_BASELINE: f64 = 4.0;

pub const GRID_ALPHA: f64 = 0.12;

// ── Last-point marker ───────────────────────────────────────────

pub const MARKER_RADIUS: f64 = 3.0;

/// Offset of the marker label from the marker centre (right and up).
pub const MARKER_LABEL_OFFSET: f64 = 6.0;

// ── Style ───────────────────────────────────────────────────────

pub const LINE_WIDTH: f64 = 1.0;
pub const INK: &str = "#2c3e50";
pub const FONT: &str = "12px system-ui";
