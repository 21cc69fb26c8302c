//! Networking: the telemetry websocket and the history HTTP endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `frame_client` manages the websocket lifecycle and applies stream frames,
//! `api` fetches chart history. The wire schema lives in the `frames` crate.

pub mod api;
pub mod frame_client;
