//! Drag-and-drop protocol binding tiles to chart panels or the trash.
//!
//! DESIGN
//! ======
//! The browser's drag events are translated into the operations below by
//! `components::tile_strip`, `components::chart_panel` and
//! `components::trash`. At most one session exists; its source key is the
//! only data carried from a tile to a drop target.
//!
//! Coarse pointers (touch) must long-press before a tile becomes draggable
//! so ordinary scrolling is never hijacked. Each press is tagged with a
//! generation so a timer from an abandoned press cannot arm a later one.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use frames::Key;

use crate::state::chart::PanelId;

/// Primary input precision, from the `(pointer: coarse)` media query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse or pen: tiles are draggable immediately.
    #[default]
    Fine,
    /// Touch: tiles become draggable only after a long press.
    Coarse,
}

/// An in-progress drag of one tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub source: Key,
}

/// Something a tile can be dropped on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropTarget {
    Trash,
    Panel(PanelId),
}

/// What a completed drop asks the rest of the dashboard to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Hide the tile until its next reading.
    Mute(Key),
    /// Show the tile's history in a panel.
    Bind { panel: PanelId, key: Key },
}

/// Resolve a session dropped on `target`.
#[must_use]
pub fn resolve_drop(session: &DragSession, target: DropTarget) -> DropOutcome {
    match target {
        DropTarget::Trash => DropOutcome::Mute(session.source.clone()),
        DropTarget::Panel(panel) => DropOutcome::Bind { panel, key: session.source.clone() },
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Press {
    key: Key,
    generation: u64,
}

/// Session, hover affordance and touch arming state.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    pub pointer: PointerKind,
    session: Option<DragSession>,
    hover: Option<DropTarget>,
    press: Option<Press>,
    press_generation: u64,
    armed: Option<Key>,
}

impl DragController {
    #[must_use]
    pub fn new(pointer: PointerKind) -> Self {
        Self { pointer, ..Self::default() }
    }

    /// Start dragging `key`. A leftover session whose end event never
    /// arrived is replaced.
    pub fn begin(&mut self, key: Key) {
        self.session = Some(DragSession { source: key });
        self.hover = None;
    }

    /// End the drag whatever its outcome, clearing every hover affordance.
    pub fn end(&mut self) {
        self.session = None;
        self.hover = None;
    }

    /// Source key of the current session.
    #[must_use]
    pub fn dragging(&self) -> Option<&Key> {
        self.session.as_ref().map(|s| &s.source)
    }

    /// A session is hovering `target`. Returns whether a drop is accepted.
    pub fn drag_over(&mut self, target: DropTarget) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.hover = Some(target);
        true
    }

    /// The pointer left `target`. Moving onto one of the target's own
    /// children (`still_inside`) keeps the affordance.
    pub fn drag_leave(&mut self, target: DropTarget, still_inside: bool) {
        if !still_inside && self.hover == Some(target) {
            self.hover = None;
        }
    }

    /// Drop the current session on `target`. The affordance is cleared even
    /// when there is nothing to drop.
    pub fn drop(&mut self, target: DropTarget) -> Option<DropOutcome> {
        self.drag_leave(target, false);
        let session = self.session.take()?;
        Some(resolve_drop(&session, target))
    }

    #[must_use]
    pub fn is_hovered(&self, target: DropTarget) -> bool {
        self.hover == Some(target)
    }

    /// The trash is only offered while something is being dragged.
    #[must_use]
    pub fn trash_visible(&self) -> bool {
        self.session.is_some()
    }

    // --- touch arming ---

    /// A touch press began on `key`. Returns the press generation to hand
    /// back to [`Self::press_elapsed`] once the long-press delay has passed,
    /// or `None` for fine pointers, which never need arming.
    pub fn press_start(&mut self, key: Key) -> Option<u64> {
        if self.pointer == PointerKind::Fine {
            return None;
        }
        self.press_generation += 1;
        self.press = Some(Press { key, generation: self.press_generation });
        Some(self.press_generation)
    }

    /// The long-press delay elapsed. Arms `key` if that press is still the
    /// current, uncancelled one.
    pub fn press_elapsed(&mut self, key: &Key, generation: u64) -> bool {
        let current = self
            .press
            .as_ref()
            .is_some_and(|p| &p.key == key && p.generation == generation);
        if current {
            self.armed = Some(key.clone());
        }
        current
    }

    /// The finger moved: treat it as a scroll and forget the press.
    pub fn press_cancel(&mut self, key: &Key) {
        if self.press.as_ref().is_some_and(|p| &p.key == key) {
            self.press = None;
        }
    }

    /// Turn arming off again for `key` unless it is being dragged right now.
    /// Returns whether anything was disarmed.
    pub fn disarm_if_idle(&mut self, key: &Key) -> bool {
        if self.dragging() == Some(key) {
            return false;
        }
        if self.press.as_ref().is_some_and(|p| &p.key == key) {
            self.press = None;
        }
        if self.armed.as_ref() == Some(key) {
            self.armed = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_armed(&self, key: &Key) -> bool {
        self.armed.as_ref() == Some(key)
    }

    /// Whether the tile for `key` should carry `draggable="true"`.
    #[must_use]
    pub fn is_draggable(&self, key: &Key) -> bool {
        match self.pointer {
            PointerKind::Fine => true,
            PointerKind::Coarse => self.is_armed(key),
        }
    }
}
