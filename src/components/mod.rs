//! UI components for the dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the context signals provided by `app::App` and
//! delegate every state change to the operations in `state`.

pub mod chart_panel;
pub mod status_bar;
pub mod tile_strip;
pub mod trash;
