//! Stream connection lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `net::frame_client` drives the websocket and reports each transport event
//! here. This module decides the status shown in the status bar and whether
//! a reconnect must be scheduled, guaranteeing at most one is pending.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Websocket connection lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No socket; a reconnect may be pending.
    #[default]
    Disconnected,
    /// Socket opened, waiting for the handshake.
    Connecting,
    /// Handshake complete; frames are flowing.
    Live,
    /// Transport reported an error; a close follows.
    Error,
}

impl ConnectionStatus {
    /// Text shown in the status bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting…",
            Self::Live => "live",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Disconnected => "status-bar__dot--disconnected",
            Self::Connecting => "status-bar__dot--connecting",
            Self::Live => "status-bar__dot--live",
            Self::Error => "status-bar__dot--error",
        }
    }
}

/// Connection status plus the reconnect guard.
#[derive(Clone, Debug, Default)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    reconnect_pending: bool,
    attempts: u32,
}

impl ConnectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new socket is being opened.
    pub fn begin_connect(&mut self) {
        self.status = ConnectionStatus::Connecting;
        self.reconnect_pending = false;
        self.attempts = self.attempts.saturating_add(1);
    }

    pub fn on_open(&mut self) {
        self.status = ConnectionStatus::Live;
    }

    pub fn on_error(&mut self) {
        self.status = ConnectionStatus::Error;
    }

    /// The socket closed. Returns `true` exactly when the caller must
    /// schedule a reconnect; `false` if one is already pending.
    pub fn on_closed(&mut self) -> bool {
        self.status = ConnectionStatus::Disconnected;
        if self.reconnect_pending {
            return false;
        }
        self.reconnect_pending = true;
        true
    }

    /// The reconnect delay elapsed. Returns `true` if the caller should
    /// connect now.
    pub fn on_reconnect_due(&mut self) -> bool {
        std::mem::take(&mut self.reconnect_pending)
    }

    /// Number of connection attempts so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Hover text for the status bar.
    #[must_use]
    pub fn attempts_label(&self) -> String {
        match self.attempts {
            1 => "1 connection attempt".to_owned(),
            n => format!("{n} connection attempts"),
        }
    }
}
