//! History API client for the chart panels.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `fetch_history` reports
//! `HistoryError::Unavailable` since the endpoint is only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode maps to a `HistoryError` variant; the panel shows one
//! generic hint for all of them and the detail goes to the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use frames::{HistoryResponse, Key, Period};
use leptos::prelude::*;

use crate::state::chart::{ChartPanels, FetchTicket};

/// Why a history request produced no data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("history request failed: {0}")]
    Transport(String),
    #[error("history request returned HTTP {0}")]
    Status(u16),
    #[error("history response could not be decoded: {0}")]
    Decode(String),
    #[error("history is only available in the browser")]
    Unavailable,
}

/// Relative URL for the history of `key` over `period`.
#[must_use]
pub fn history_endpoint(key: &Key, period: Period) -> String {
    format!(
        "/history?key={}&period={}",
        urlencoding::encode(key.as_str()),
        urlencoding::encode(period.as_str())
    )
}

/// Fetch `GET /history` for `key` over `period`.
///
/// # Errors
///
/// Returns `Transport` when the request cannot be sent, `Status` for a
/// non-success response, `Decode` for a body that is not a history document,
/// and `Unavailable` outside the browser.
pub async fn fetch_history(key: &Key, period: Period) -> Result<HistoryResponse, HistoryError> {
    #[cfg(feature = "hydrate")]
    {
        let url = history_endpoint(key, period);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| HistoryError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(HistoryError::Status(resp.status()));
        }
        resp.json::<HistoryResponse>()
            .await
            .map_err(|e| HistoryError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, period);
        Err(HistoryError::Unavailable)
    }
}

/// Run one fetch for `ticket` and resolve it into the panel store.
/// Completions for superseded tickets are dropped by `ChartPanels::resolve`.
pub fn request_history(panels: RwSignal<ChartPanels>, ticket: FetchTicket) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = fetch_history(&ticket.key, ticket.period).await;
            if let Err(e) = &result {
                leptos::logging::warn!("history {} ({}): {e}", ticket.key, ticket.period);
            }
            let applied = panels.try_update(|p| p.resolve(&ticket, result)).unwrap_or(false);
            if !applied {
                leptos::logging::log!("discarded stale history for {} ({})", ticket.key, ticket.period);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        panels.update(|p| {
            p.resolve(&ticket, Err(HistoryError::Unavailable));
        });
    }
}

/// Issue every ticket in `tickets`.
pub fn request_all(panels: RwSignal<ChartPanels>, tickets: impl IntoIterator<Item = FetchTicket>) {
    for ticket in tickets {
        request_history(panels, ticket);
    }
}
