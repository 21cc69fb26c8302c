//! State for the two fixed history chart panels.
//!
//! DESIGN
//! ======
//! A panel goes from unbound to bound on its first drop and never goes back.
//! Every transition that needs data hands out a `FetchTicket` stamped with
//! the panel's generation; a completion is only applied while its generation
//! is still current, so a slow response for an old binding or period can
//! never overwrite a newer one.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use canvas::layout::{Sample, Series};
use frames::{HistoryResponse, Key, Period};

use crate::net::api::HistoryError;
use crate::util::format::PLACEHOLDER;

/// Which of the two panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    One,
    Two,
}

impl PanelId {
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// DOM id of the panel root.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::One => "graph-1",
            Self::Two => "graph-2",
        }
    }
}

/// Message shown over the chart surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelHint {
    /// Nothing bound yet.
    Unbound,
    /// History came back without usable samples.
    NoData,
    /// History request failed.
    Failed,
    /// A series is on screen.
    Clear,
}

impl PanelHint {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Unbound => "Drag a tile here to view its history",
            Self::NoData => "No data",
            Self::Failed => "Failed to load data",
            Self::Clear => "",
        }
    }
}

/// One outstanding history request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub panel: PanelId,
    pub key: Key,
    pub period: Period,
    pub generation: u64,
}

/// Binding, hint and last rendered series of one panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPanel {
    pub id: PanelId,
    pub bound: Option<Key>,
    pub period: Period,
    pub hint: PanelHint,
    /// Last successfully fetched series; `None` leaves the canvas blank.
    pub series: Option<Series>,
    generation: u64,
    in_flight: bool,
}

impl ChartPanel {
    #[must_use]
    pub fn new(id: PanelId) -> Self {
        Self {
            id,
            bound: None,
            period: Period::default(),
            hint: PanelHint::Unbound,
            series: None,
            generation: 0,
            in_flight: false,
        }
    }

    /// Bind to `key`, keeping the current period.
    pub fn bind(&mut self, key: Key) -> FetchTicket {
        self.bound = Some(key.clone());
        if self.hint == PanelHint::Unbound {
            self.hint = PanelHint::Clear;
        }
        self.issue(key)
    }

    /// Store `period`; fetch only if a key is bound.
    pub fn select_period(&mut self, period: Period) -> Option<FetchTicket> {
        self.period = period;
        self.refresh()
    }

    /// Re-fetch the current binding.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        let key = self.bound.clone()?;
        Some(self.issue(key))
    }

    fn issue(&mut self, key: Key) -> FetchTicket {
        self.generation += 1;
        self.in_flight = true;
        FetchTicket {
            panel: self.id,
            key,
            period: self.period,
            generation: self.generation,
        }
    }

    /// Apply a completed fetch. Returns `false` (and changes nothing) if a
    /// newer request has been issued since `ticket`.
    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<HistoryResponse, HistoryError>) -> bool {
        if ticket.panel != self.id || ticket.generation != self.generation {
            return false;
        }
        self.in_flight = false;
        match result {
            Ok(history) => {
                let series = series_from_history(&history);
                if series.is_empty() {
                    self.series = None;
                    self.hint = PanelHint::NoData;
                } else {
                    self.series = Some(series);
                    self.hint = PanelHint::Clear;
                }
            }
            Err(_) => {
                self.series = None;
                self.hint = PanelHint::Failed;
            }
        }
        true
    }

    /// [`PLACEHOLDER`] until bound, then `<key> (<period>)`.
    #[must_use]
    pub fn title(&self) -> String {
        match &self.bound {
            Some(key) => format!("{key} ({})", self.period),
            None => PLACEHOLDER.to_owned(),
        }
    }

    /// Whether a request issued for the current generation has not completed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }
}

/// Both panels.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPanels {
    one: ChartPanel,
    two: ChartPanel,
}

impl Default for ChartPanels {
    fn default() -> Self {
        Self { one: ChartPanel::new(PanelId::One), two: ChartPanel::new(PanelId::Two) }
    }
}

impl ChartPanels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn panel(&self, id: PanelId) -> &ChartPanel {
        match id {
            PanelId::One => &self.one,
            PanelId::Two => &self.two,
        }
    }

    pub fn panel_mut(&mut self, id: PanelId) -> &mut ChartPanel {
        match id {
            PanelId::One => &mut self.one,
            PanelId::Two => &mut self.two,
        }
    }

    pub fn bind(&mut self, id: PanelId, key: Key) -> FetchTicket {
        self.panel_mut(id).bind(key)
    }

    pub fn select_period(&mut self, id: PanelId, period: Period) -> Option<FetchTicket> {
        self.panel_mut(id).select_period(period)
    }

    pub fn refresh(&mut self, id: PanelId) -> Option<FetchTicket> {
        self.panel_mut(id).refresh()
    }

    /// A live reading for `key` arrived: re-fetch every panel bound to it.
    pub fn on_live_update(&mut self, key: &Key) -> Vec<FetchTicket> {
        let bound: Vec<PanelId> = PanelId::ALL
            .into_iter()
            .filter(|id| self.panel(*id).bound.as_ref() == Some(key))
            .collect();
        bound.into_iter().filter_map(|id| self.refresh(id)).collect()
    }

    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<HistoryResponse, HistoryError>) -> bool {
        self.panel_mut(ticket.panel).resolve(ticket, result)
    }
}

/// Convert a history body into a drawable series, skipping samples with a
/// null value or an unparseable timestamp. Source order is kept.
#[must_use]
pub fn series_from_history(history: &HistoryResponse) -> Series {
    let samples = history
        .data
        .iter()
        .filter_map(|p| Some(Sample { t_ms: p.epoch_ms()?, value: p.value? }))
        .filter(|s| s.value.is_finite())
        .collect();
    Series { unit: history.unit.clone().unwrap_or_default(), samples }
}
