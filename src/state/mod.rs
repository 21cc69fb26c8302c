//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each domain is a plain struct wrapped in one `RwSignal` by `app::App` and
//! provided as context. Everything here is browser-free and unit-tested
//! natively; components mutate state only through these operations.

pub mod chart;
pub mod connection;
pub mod drag;
pub mod registry;
pub mod tiles;
