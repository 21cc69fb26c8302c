//! Chart rendering engine for the telemetry dashboard panels.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It turns an
//! ordered time series into pixels on a `<canvas>`: the [`layout`] module
//! computes every coordinate and label as plain data, and [`render`] replays
//! that layout through the 2D context. [`engine::ChartCore`] remembers the
//! last series and viewport so a resize can redraw without a new fetch.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser [`engine::Chart`] and testable [`engine::ChartCore`] |
//! | [`layout`] | Series types, extents, gridlines, polyline and marker geometry |
//! | [`render`] | Draws a [`layout::ChartLayout`] to a 2D context |
//! | [`consts`] | Padding, marker size, colors and fonts |

pub mod consts;
pub mod engine;
pub mod layout;
pub mod render;
