//! Click-versus-drag classification for a single driving pointer.
//!
//! A pointer-down opens a `Potential` gesture. Moving at least 4 px from the
//! start promotes it to `Dragging` for the rest of its lifetime, and the
//! click the browser fires after release is then suppressed. While one
//! pointer owns the gesture, other pointers are ignored.

use super::view::ViewState;

/// 4 px, squared.
pub const DRAG_THRESHOLD_SQ: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Potential,
    Dragging,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub pointer_id: i32,
    pub phase: GesturePhase,
    pub start: (f64, f64),
    pub last: (f64, f64),
    pub view_at_start: ViewState,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Active(Gesture),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickGate {
    Allow,
    Suppress,
}

#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    state: GestureState,
    /// Raised when a gesture crosses into dragging; cleared by the next pointer-down.
    suppress_click: bool,
    last_pointer: Option<i32>,
}

impl GestureTracker {
    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(
            self.state,
            GestureState::Active(Gesture {
                phase: GesturePhase::Dragging,
                ..
            })
        )
    }

    /// Returns false when another pointer already owns the gesture.
    pub fn begin(&mut self, pointer_id: i32, point: (f64, f64), view: ViewState) -> bool {
        if let GestureState::Active(g) = self.state {
            if g.pointer_id != pointer_id {
                return false;
            }
        }
        self.state = GestureState::Active(Gesture {
            pointer_id,
            phase: GesturePhase::Potential,
            start: point,
            last: point,
            view_at_start: view,
        });
        self.suppress_click = false;
        self.last_pointer = Some(pointer_id);
        true
    }

    /// Feed a move. Returns the client-space delta to pan by, or `None` while
    /// the pointer is still within the click threshold (or not the owner).
    pub fn update(&mut self, pointer_id: i32, point: (f64, f64)) -> Option<(f64, f64)> {
        let GestureState::Active(g) = &mut self.state else {
            return None;
        };
        if g.pointer_id != pointer_id {
            return None;
        }
        if g.phase == GesturePhase::Potential {
            let dx = point.0 - g.start.0;
            let dy = point.1 - g.start.1;
            if dx * dx + dy * dy < DRAG_THRESHOLD_SQ {
                return None;
            }
            g.phase = GesturePhase::Dragging;
            self.suppress_click = true;
        }
        // `last` only advances while dragging, so the first pan step covers the whole way from `start`.
        let delta = (point.0 - g.last.0, point.1 - g.last.1);
        g.last = point;
        Some(delta)
    }

    /// Returns true if this pointer owned the gesture.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        match self.state {
            GestureState::Active(g) if g.pointer_id == pointer_id => {
                self.state = GestureState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Decide whether the click that follows a gesture should go through.
    /// `pointer_id` is `None` when the click event carries no usable id.
    pub fn resolve_click(&self, pointer_id: Option<i32>) -> ClickGate {
        if let Some(id) = pointer_id {
            if self.last_pointer != Some(id) {
                return ClickGate::Allow;
            }
        }
        if self.suppress_click {
            ClickGate::Suppress
        } else {
            ClickGate::Allow
        }
    }

    pub fn clear(&mut self) {
        *self = GestureTracker::default();
    }
}
