//! Keyed store of the latest reading per sensor, plus the freshness model.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every inbound reading lands here first. The registry is the single source
//! of truth for "when did we last hear from this key"; the tile view only
//! projects it. Records are created on first sighting and never removed for
//! the lifetime of the page.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;

use frames::{Key, TelemetryPoint};

/// Readings younger than this are fresh.
pub const FRESH_MAX_MS: f64 = 3.0 * 60.0 * 1000.0;
/// Readings at least this old are stale.
pub const STALE_MIN_MS: f64 = 60.0 * 60.0 * 1000.0;

/// Display classification of a key's age.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    /// Heard from within the last three minutes.
    Fresh,
    /// Between three and sixty minutes old.
    Aging,
    /// Silent for an hour or more.
    Stale,
    /// Never heard from.
    Unknown,
}

impl Freshness {
    /// Classify an age in milliseconds; `None` means never seen.
    #[must_use]
    pub fn classify(age_ms: Option<f64>) -> Self {
        match age_ms {
            None => Self::Unknown,
            Some(age) if age < FRESH_MAX_MS => Self::Fresh,
            Some(age) if age >= STALE_MIN_MS => Self::Stale,
            Some(_) => Self::Aging,
        }
    }

    /// Indicator color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Fresh => "#2ecc71",
            Self::Aging => "#f1c40f",
            Self::Stale => "#e74c3c",
            Self::Unknown => "#bbb",
        }
    }

    /// BEM modifier applied to the tile element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Fresh => "tile--fresh",
            Self::Aging => "tile--aging",
            Self::Stale => "tile--stale",
            Self::Unknown => "tile--unknown",
        }
    }
}

/// Everything known about one key.
#[derive(Clone, Debug, PartialEq)]
pub struct TileRecord {
    pub key: Key,
    pub last_payload: TelemetryPoint,
    /// Local receipt time, not the source `ts`.
    pub last_seen_ms: f64,
    /// Hidden by a trash drop until the next reading arrives.
    pub muted: bool,
}

/// Latest reading per key.
#[derive(Clone, Debug, Default)]
pub struct TileRegistry {
    records: BTreeMap<Key, TileRecord>,
}

impl TileRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading received at `now_ms`, creating the entry if needed.
    ///
    /// Always refreshes `last_seen_ms` and clears `muted`.
    pub fn upsert(&mut self, point: TelemetryPoint, now_ms: f64) -> Key {
        let key = point.key();
        match self.records.get_mut(&key) {
            Some(record) => {
                record.last_payload = point;
                record.last_seen_ms = now_ms;
                record.muted = false;
            }
            None => {
                self.records.insert(
                    key.clone(),
                    TileRecord { key: key.clone(), last_payload: point, last_seen_ms: now_ms, muted: false },
                );
            }
        }
        key
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&TileRecord> {
        self.records.get(key)
    }

    /// Milliseconds since `key` was last heard from, or `None` if never.
    #[must_use]
    pub fn age_ms(&self, key: &Key, now_ms: f64) -> Option<f64> {
        self.records.get(key).map(|r| (now_ms - r.last_seen_ms).max(0.0))
    }

    #[must_use]
    pub fn freshness(&self, key: &Key, now_ms: f64) -> Freshness {
        Freshness::classify(self.age_ms(key, now_ms))
    }

    /// Hide `key` until its next reading. Returns `false` for unknown keys.
    pub fn mute(&mut self, key: &Key) -> bool {
        match self.records.get_mut(key) {
            Some(record) => {
                record.muted = true;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_muted(&self, key: &Key) -> bool {
        self.records.get(key).is_some_and(|r| r.muted)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
