//! Pointer handling for `FastGrid`.
//!
//! A press is hit-tested against the main cells, the column-header band, the
//! row-header band and the corner, in that order, and fixes the interaction
//! mode until release. Modifiers are captured at press time.
//!
//! Two drag behaviours coexist on purpose:
//! - shift or ctrl held: the rectangle between the anchor and the pointer
//!   replaces the previous rectangle, whose cells are first restored from a
//!   snapshot taken before they were overwritten;
//! - no modifier: the rectangle between the press cell and the pointer is
//!   selected on top of a fresh single-cell selection.

use serde::{Deserialize, Serialize};

use super::{FastGrid, HostRequest};
use crate::layout::HeaderHit;
use crate::types::{CellPos, CellRect};

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        shift: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Buttons held down while the event happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl PointerButtons {
    pub const LEFT: PointerButtons = PointerButtons {
        left: true,
        right: false,
        middle: false,
    };

    pub fn none(&self) -> bool {
        !(self.left || self.right || self.middle)
    }
}

/// A pointer event in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    /// Button that changed state; `None` for plain motion
    #[serde(default)]
    pub button: Option<PointerButton>,
    #[serde(default)]
    pub buttons: PointerButtons,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Left-button press.
    pub fn press(x: i32, y: i32, modifiers: Modifiers) -> Self {
        Self {
            x,
            y,
            button: Some(PointerButton::Left),
            buttons: PointerButtons::LEFT,
            modifiers,
        }
    }

    /// Motion with the left button held.
    pub fn drag(x: i32, y: i32, modifiers: Modifiers) -> Self {
        Self {
            x,
            y,
            button: None,
            buttons: PointerButtons::LEFT,
            modifiers,
        }
    }

    /// Motion with no button held.
    pub fn hover(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            button: None,
            buttons: PointerButtons::default(),
            modifiers: Modifiers::NONE,
        }
    }

    /// Left-button release.
    pub fn release(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            button: Some(PointerButton::Left),
            buttons: PointerButtons::default(),
            modifiers: Modifiers::NONE,
        }
    }
}

/// Where the current press started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionMode {
    #[default]
    Idle,
    PressedInCell,
    /// Press in the column-header band above the grid.
    PressedInHeaderRow,
    /// Press in the row-header band left of the grid.
    PressedInHeaderColumn,
    PressedInCorner,
}

/// Selection state of a rectangle before a range extension overwrote it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    rect: Option<CellRect>,
    states: Vec<bool>,
}

impl SelectionSnapshot {
    /// Record `state(cell)` for every cell of `rect`.
    pub fn capture(rect: CellRect, state: impl Fn(CellPos) -> bool) -> Self {
        Self {
            rect: Some(rect),
            states: rect.cells().map(state).collect(),
        }
    }

    /// Snapshot of `rect` where only `pos` keeps its state and the rest is unselected.
    pub fn seeded(rect: CellRect, pos: CellPos, selected: bool) -> Self {
        Self::capture(rect, |cell| cell == pos && selected)
    }

    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    pub fn rect(&self) -> Option<CellRect> {
        self.rect
    }

    /// Recorded state of `pos`, if the snapshot covers it.
    pub fn get(&self, pos: CellPos) -> Option<bool> {
        let rect = self.rect?;
        if !rect.contains(pos) {
            return None;
        }
        let index = (pos.row - rect.top) * rect.width() + (pos.column - rect.left);
        self.states.get(index).copied()
    }

    pub fn clear(&mut self) {
        self.rect = None;
        self.states.clear();
    }
}

/// Transient pointer state between press and release.
#[derive(Debug, Clone, Default)]
pub(crate) struct Interaction {
    pub(crate) mode: InteractionMode,
    pub(crate) pressed: bool,
    pub(crate) modifiers: Modifiers,
    /// Cell (or header cell) where the press or last extension started
    pub(crate) last: Option<CellPos>,
    pub(crate) anchor: Option<CellPos>,
    pub(crate) snapshot: SelectionSnapshot,
    pub(crate) hovered: Option<HeaderHit>,
    pub(crate) pressed_header: Option<HeaderHit>,
    /// Event re-delivered by autoscroll ticks
    pub(crate) held_event: Option<PointerEvent>,
    pub(crate) autoscroll_armed: bool,
}

impl Interaction {
    /// Forget the shift anchor and its snapshot.
    pub(crate) fn reset_extension(&mut self) {
        self.anchor = None;
        self.snapshot.clear();
    }
}

impl FastGrid {
    /// Handle a button press.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        let (x, y) = (event.x, event.y);
        let left = event.button == Some(PointerButton::Left);

        if let Some(pos) = self.visible.cell_at(&self.geometry, &self.viewport, x, y) {
            self.interaction.pressed = true;
            self.interaction.mode = InteractionMode::PressedInCell;
            self.interaction.modifiers = event.modifiers;
            if event.modifiers.shift && left {
                self.press_shift(pos);
            } else {
                self.press_cell(pos, event.modifiers.ctrl && left);
            }
            return;
        }

        let Some(hit) = self
            .visible
            .header_hit_at(&self.geometry, &self.viewport, x, y)
        else {
            return;
        };
        // Header and corner presses only highlight; the selection is untouched.
        self.interaction.pressed = true;
        self.interaction.modifiers = event.modifiers;
        self.interaction.pressed_header = Some(hit);
        let (mode, last) = match hit {
            HeaderHit::ColumnHeader(pos) => (InteractionMode::PressedInHeaderRow, pos),
            HeaderHit::RowHeader(pos) => (InteractionMode::PressedInHeaderColumn, pos),
            HeaderHit::Corner => (InteractionMode::PressedInCorner, CellPos::default()),
        };
        self.interaction.mode = mode;
        self.interaction.last = Some(last);
        tracing::debug!(target: "fastgrid::events", ?hit, "header pressed");
        self.request_repaint();
    }

    /// Plain or ctrl press on a body cell.
    fn press_cell(&mut self, pos: CellPos, toggle: bool) {
        self.interaction.snapshot.clear();
        self.interaction.last = Some(pos);
        self.interaction.anchor = Some(pos);

        if toggle {
            self.selection.set_current(Some(pos), true);
            let selected = !self.selection.is_selected(pos);
            self.selection.set_selected(pos, selected);
            self.interaction.snapshot =
                SelectionSnapshot::seeded(CellRect::single(pos), pos, selected);
        } else {
            self.selection.set_current(Some(pos), false);
        }
        self.request_repaint();
    }

    /// Shift press: extend from the anchor, creating it if needed.
    fn press_shift(&mut self, pos: CellPos) {
        // an anchor without a current cell cannot be extended from
        if self.selection.current().is_none() {
            self.interaction.reset_extension();
        }
        if self.interaction.anchor.is_none() {
            self.interaction.snapshot.clear();
            if self.selection.current().is_none() {
                self.selection.set_current(Some(CellPos::default()), false);
            }
            self.interaction.anchor = self.selection.current();
        }
        let (Some(anchor), Some(current)) = (self.interaction.anchor, self.selection.current())
        else {
            return;
        };
        self.interaction.last = Some(anchor);

        if self.interaction.snapshot.is_empty() {
            let rect = CellRect::spanning(current, anchor);
            self.interaction.snapshot =
                SelectionSnapshot::seeded(rect, anchor, self.selection.is_selected(anchor));
        }

        self.extend_selection(pos);
        self.request_repaint();
    }

    /// Replace the rectangle between the current cell and `last` with the
    /// rectangle between `target` and `last`.
    ///
    /// Cells of the old rectangle get their snapshot state back; every cell
    /// of the new one takes the selection state of `last`, after its own
    /// state is recorded in the new snapshot.
    fn extend_selection(&mut self, target: CellPos) {
        let Some(last) = self.interaction.last else {
            return;
        };

        if let Some(current) = self.selection.current() {
            let previous = CellRect::spanning(current, last);
            for cell in previous.cells() {
                if let Some(state) = self.interaction.snapshot.get(cell) {
                    self.selection.set_selected(cell, state);
                }
            }
        }

        self.selection.set_current(Some(target), true);
        let fill = self.selection.is_selected(last);

        let rect = CellRect::spanning(target, last);
        self.interaction.snapshot =
            SelectionSnapshot::capture(rect, |cell| self.selection.is_selected(cell));
        for cell in rect.cells() {
            self.selection.set_selected(cell, fill);
        }
    }

    /// Handle pointer motion.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        if self.interaction.pressed && event.buttons.left {
            self.drag(event);
        } else if event.buttons.none() {
            self.hover(event.x, event.y);
        }
    }

    fn drag(&mut self, event: PointerEvent) {
        let needs_hold = self.autoscroll_nudge(event.x, event.y);
        if needs_hold {
            self.interaction.held_event = Some(event);
            if !self.interaction.autoscroll_armed {
                self.interaction.autoscroll_armed = true;
                self.push_request(HostRequest::StartAutoscroll {
                    interval_ms: self.config.autoscroll_interval_ms,
                });
            }
        } else {
            self.stop_autoscroll();
        }

        if self.interaction.mode != InteractionMode::PressedInCell {
            return;
        }
        self.interaction.modifiers = event.modifiers;
        let Some(current) = self.selection.current() else {
            return;
        };
        let Some(target) = self.cell_toward(current, event.x, event.y) else {
            return;
        };
        if target == current {
            return;
        }

        let modifiers = self.interaction.modifiers;
        if modifiers.ctrl || modifiers.shift {
            self.extend_selection(target);
        } else if let Some(last) = self.interaction.last {
            self.selection.set_current(Some(target), false);
            for cell in CellRect::spanning(target, last).cells() {
                self.selection.set_selected(cell, true);
            }
        }
        self.request_repaint();
    }

    /// Cell under a viewport point, walking from `seed` instead of scanning.
    ///
    /// Points outside the content clamp to the nearest edge line.
    fn cell_toward(&self, seed: CellPos, x: i32, y: i32) -> Option<CellPos> {
        let column = self
            .geometry
            .columns()
            .first_covering(seed.column, x + self.viewport.scroll_x)?;
        let row = self
            .geometry
            .rows()
            .first_covering(seed.row, y + self.viewport.scroll_y)?;
        Some(CellPos::new(row, column))
    }

    fn hover(&mut self, x: i32, y: i32) {
        let hit = self
            .visible
            .header_hit_at(&self.geometry, &self.viewport, x, y);
        if hit != self.interaction.hovered {
            self.interaction.hovered = hit;
            self.request_repaint();
        }
    }

    /// Handle a button release. Always returns to idle.
    pub fn pointer_up(&mut self, _event: PointerEvent) {
        let had_header = self.interaction.pressed_header.is_some();
        self.interaction.pressed = false;
        self.interaction.modifiers = Modifiers::NONE;
        self.interaction.mode = InteractionMode::Idle;
        self.interaction.last = None;
        self.interaction.pressed_header = None;
        self.stop_autoscroll();
        if had_header {
            self.request_repaint();
        }
    }

    /// Re-deliver the held drag event; called by the host's autoscroll timer.
    pub fn autoscroll_tick(&mut self) {
        let Some(event) = self.interaction.held_event else {
            return;
        };
        if !self.interaction.pressed {
            self.stop_autoscroll();
            return;
        }
        tracing::trace!(target: "fastgrid::events", x = event.x, y = event.y, "autoscroll tick");
        self.pointer_move(event);
    }

    fn stop_autoscroll(&mut self) {
        self.interaction.held_event = None;
        if self.interaction.autoscroll_armed {
            self.interaction.autoscroll_armed = false;
            self.push_request(HostRequest::StopAutoscroll);
        }
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode
    }

    /// Header element currently under the pointer, if any.
    pub fn hovered_header(&self) -> Option<HeaderHit> {
        self.interaction.hovered
    }

    /// Anchor of shift extensions, kept across releases.
    pub fn shift_anchor(&self) -> Option<CellPos> {
        self.interaction.anchor
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_lookup() {
        let rect = CellRect::spanning(CellPos::new(1, 1), CellPos::new(2, 3));
        let snap = SelectionSnapshot::capture(rect, |cell| cell.column == 3);
        assert_eq!(snap.get(CellPos::new(2, 3)), Some(true));
        assert_eq!(snap.get(CellPos::new(2, 2)), Some(false));
        assert_eq!(snap.get(CellPos::new(0, 0)), None);
    }

    #[test]
    fn test_seeded_snapshot() {
        let rect = CellRect::spanning(CellPos::new(0, 0), CellPos::new(1, 1));
        let snap = SelectionSnapshot::seeded(rect, CellPos::new(1, 1), true);
        assert_eq!(snap.get(CellPos::new(1, 1)), Some(true));
        assert_eq!(snap.get(CellPos::new(0, 0)), Some(false));

        let mut snap = snap;
        snap.clear();
        assert!(snap.is_empty());
        assert_eq!(snap.get(CellPos::new(1, 1)), None);
    }

    #[test]
    fn test_pointer_event_json() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"x": 5, "y": 7, "modifiers": {"shift": true}}"#).unwrap();
        assert_eq!(event.button, None);
        assert!(event.buttons.none());
        assert_eq!(event.modifiers, Modifiers::SHIFT);
    }
}
