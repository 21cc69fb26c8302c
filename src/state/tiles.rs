//! Projection of the registry into ordered, stable tile elements.
//!
//! DESIGN
//! ======
//! A tile's element id is allocated once per key and never recycled, so the
//! keyed `<For>` in `components::tile_strip` keeps the same DOM node (and its
//! gesture listeners) across reorders and content updates. Muted tiles are
//! hidden, never removed.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use std::collections::HashMap;

use frames::{Key, TelemetryPoint};

use crate::state::registry::{Freshness, TileRegistry};
use crate::util::format::{reading_text, tile_title};

/// Identity of one rendered tile element, assigned once per key and
/// rendered as the tile's `data-id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

/// Text and styling currently shown by one tile.
#[derive(Clone, Debug, PartialEq)]
pub struct TileContent {
    pub id: ElementId,
    pub key: Key,
    /// `cluster / sensor`.
    pub title: String,
    pub node: String,
    /// Formatted value plus unit, or the placeholder glyph.
    pub value: String,
    /// Source timestamp label, shown verbatim.
    pub ts: String,
    pub hidden: bool,
    pub freshness: Freshness,
}

/// Ordered tile elements keyed by stream key.
#[derive(Clone, Debug, Default)]
pub struct TileView {
    tiles: HashMap<Key, TileContent>,
    order: Vec<Key>,
    next_id: u64,
}

impl TileView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the element for `key`, creating it at the end of the display
    /// order if this is the first sighting.
    pub fn ensure(&mut self, key: &Key) -> ElementId {
        if let Some(tile) = self.tiles.get(key) {
            return tile.id;
        }
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.tiles.insert(
            key.clone(),
            TileContent {
                id,
                key: key.clone(),
                title: String::new(),
                node: String::new(),
                value: String::new(),
                ts: String::new(),
                hidden: false,
                freshness: Freshness::Unknown,
            },
        );
        self.order.push(key.clone());
        id
    }

    /// Overwrite the text fields of the tile for `point`'s key. No-op when the
    /// element does not exist yet.
    pub fn update(&mut self, point: &TelemetryPoint) {
        let Some(tile) = self.tiles.get_mut(&point.key()) else {
            return;
        };
        tile.title = tile_title(point);
        tile.node.clone_from(&point.node);
        tile.value = reading_text(point.value.as_ref(), point.unit.as_deref());
        tile.ts = point.ts.clone().unwrap_or_default();
    }

    /// Reorder to lexicographic key order. Element ids are untouched.
    pub fn sort(&mut self) {
        self.order.sort();
    }

    pub fn set_hidden(&mut self, key: &Key, hidden: bool) {
        if let Some(tile) = self.tiles.get_mut(key) {
            tile.hidden = hidden;
        }
    }

    pub fn paint(&mut self, key: &Key, freshness: Freshness) {
        if let Some(tile) = self.tiles.get_mut(key) {
            tile.freshness = freshness;
        }
    }

    /// Re-evaluate every tile's freshness against the registry.
    pub fn repaint(&mut self, registry: &TileRegistry, now_ms: f64) {
        for (key, tile) in &mut self.tiles {
            tile.freshness = registry.freshness(key, now_ms);
        }
    }

    /// Bring the tile for `key` in line with its registry record: create,
    /// update text, apply the mute, and paint. Unknown keys are ignored.
    pub fn project(&mut self, registry: &TileRegistry, key: &Key, now_ms: f64) -> Option<ElementId> {
        let record = registry.get(key)?;
        let id = self.ensure(key);
        self.update(&record.last_payload);
        self.set_hidden(key, registry.is_muted(key));
        self.paint(key, registry.freshness(key, now_ms));
        Some(id)
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&TileContent> {
        self.tiles.get(key)
    }

    /// Keys in display order.
    #[must_use]
    pub fn order(&self) -> &[Key] {
        &self.order
    }
}
