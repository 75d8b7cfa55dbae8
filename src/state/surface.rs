use std::collections::BTreeSet;

use super::gesture::{ClickGate, GestureState, GestureTracker};
use super::view::{ViewState, ZoomDirection};

/// Interaction state owned by one visible map: the pan/zoom transform, the
/// gesture tracker, and the rules deciding which input reaches regions.
#[derive(Clone, Debug, Default)]
pub struct MapSurface {
    view: ViewState,
    gestures: GestureTracker,
    /// Pan/zoom enabled for this page. When off, clicks go straight to regions.
    enabled: bool,
    excluded: BTreeSet<String>,
}

impl MapSurface {
    pub fn new<I, S>(enabled: bool, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            view: ViewState::default(),
            gestures: GestureTracker::default(),
            enabled,
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn zoom_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    /// New geometry: back to identity, any in-flight gesture dropped.
    pub fn reset_on_load(&mut self) {
        self.view.reset();
        self.gestures.clear();
    }

    /// Returns true when the event was consumed (caller should prevent default and redraw).
    pub fn wheel(&mut self, cx: f64, cy: f64, delta_y: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.view
            .zoom_at(cx, cy, ZoomDirection::from_wheel_delta(delta_y));
        true
    }

    pub fn pointer_down(&mut self, pointer_id: i32, button: i16, client: (f64, f64)) -> bool {
        if !self.enabled || button != 0 {
            return false;
        }
        self.gestures.begin(pointer_id, client, self.view)
    }

    /// Returns true when the view moved.
    pub fn pointer_move(&mut self, pointer_id: i32, client: (f64, f64)) -> bool {
        if !self.enabled {
            return false;
        }
        match self.gestures.update(pointer_id, client) {
            Some((dx, dy)) => {
                self.view.pan_by(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Ends the gesture owned by `pointer_id` if the primary button is no longer
    /// held, which happens when the release landed outside the map. Returns true
    /// when a gesture was dropped.
    pub fn release_if_unpressed(&mut self, pointer_id: i32, buttons: u16) -> bool {
        if !self.enabled || buttons & 1 != 0 {
            return false;
        }
        match self.gestures.state() {
            GestureState::Active(g) if g.pointer_id == pointer_id => self.gestures.end(pointer_id),
            _ => false,
        }
    }

    pub fn pointer_up(&mut self, pointer_id: i32) -> bool {
        if !self.enabled {
            return false;
        }
        self.gestures.end(pointer_id)
    }

    pub fn is_interactive(&self, region_id: &str) -> bool {
        !self.excluded.contains(region_id)
    }

    /// Whether a click on `region_id` should advance its assignment.
    pub fn accept_click(&self, region_id: &str, pointer_id: Option<i32>) -> bool {
        if !self.is_interactive(region_id) {
            return false;
        }
        if !self.enabled {
            return true;
        }
        self.gestures.resolve_click(pointer_id) == ClickGate::Allow
    }

    pub fn zoom_in(&mut self) -> ViewState {
        if self.enabled {
            self.view.zoom_in_step();
        }
        self.view
    }

    pub fn zoom_out(&mut self) -> ViewState {
        if self.enabled {
            self.view.zoom_out_step();
        }
        self.view
    }

    pub fn reset_view(&mut self) -> ViewState {
        self.view.reset()
    }

    pub fn cursor(&self) -> &'static str {
        match (self.enabled, self.is_dragging()) {
            (false, _) => "pointer",
            (true, true) => "grabbing",
            (true, false) => "grab",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoomable() -> MapSurface {
        MapSurface::new(true, ["50110", "50130"])
    }

    #[test]
    fn drag_pans_by_accumulated_delta_over_scale() {
        let mut s = zoomable();
        s.zoom_in();
        s.zoom_in(); // 1.5625
        let k = s.view().scale;
        assert!(s.pointer_down(1, 0, (100.0, 100.0)));
        assert!(!s.pointer_move(1, (102.0, 101.0)));
        assert!(s.pointer_move(1, (110.0, 95.0)));
        assert!(s.pointer_move(1, (130.0, 80.0)));
        assert!(s.pointer_up(1));
        let v = s.view();
        assert!((v.tx - 30.0 / k).abs() < 1e-9);
        assert!((v.ty - -20.0 / k).abs() < 1e-9);
        assert!(!s.accept_click("11010", Some(1)));
    }

    #[test]
    fn small_jitter_still_clicks() {
        let mut s = zoomable();
        s.pointer_down(1, 0, (10.0, 10.0));
        s.pointer_move(1, (12.0, 12.0));
        s.pointer_up(1);
        assert_eq!(s.view(), ViewState::default());
        assert!(s.accept_click("11010", Some(1)));
    }

    #[test]
    fn excluded_regions_never_accept_clicks() {
        let s = zoomable();
        assert!(!s.is_interactive("50110"));
        assert!(!s.accept_click("50110", None));
        assert!(!s.accept_click("50130", Some(1)));
        assert!(s.accept_click("50120", Some(1)));
    }

    #[test]
    fn disabled_surface_ignores_navigation_but_clicks_pass() {
        let mut s = MapSurface::new(false, Vec::<String>::new());
        assert!(!s.wheel(100.0, 100.0, -100.0));
        assert!(!s.pointer_down(1, 0, (0.0, 0.0)));
        assert!(!s.pointer_move(1, (50.0, 50.0)));
        assert!(!s.pointer_up(1));
        s.zoom_in();
        assert_eq!(s.view(), ViewState::default());
        assert!(s.accept_click("11", Some(1)));
        assert_eq!(s.cursor(), "pointer");
    }

    #[test]
    fn only_primary_button_starts_gesture() {
        let mut s = zoomable();
        assert!(!s.pointer_down(1, 2, (0.0, 0.0)));
        assert!(!s.pointer_move(1, (40.0, 0.0)));
        assert_eq!(s.view(), ViewState::default());
    }

    #[test]
    fn wheel_zooms_and_reset_on_load_restores() {
        let mut s = zoomable();
        assert!(s.wheel(100.0, 100.0, -1.0));
        assert!((s.view().scale - 1.12).abs() < 1e-12);
        s.pointer_down(1, 0, (0.0, 0.0));
        s.pointer_move(1, (20.0, 0.0));
        assert_eq!(s.cursor(), "grabbing");
        s.reset_on_load();
        assert_eq!(s.view(), ViewState::default());
        assert!(!s.is_dragging());
        assert_eq!(s.cursor(), "grab");
    }

    #[test]
    fn zoom_out_button_to_one_recenters() {
        let mut s = zoomable();
        s.zoom_in();
        s.pointer_down(1, 0, (0.0, 0.0));
        s.pointer_move(1, (40.0, 40.0));
        s.pointer_up(1);
        assert!(s.view().tx != 0.0);
        assert_eq!(s.zoom_out(), ViewState::default());
    }

    #[test]
    fn release_outside_map_ends_pending_gesture() {
        let mut s = zoomable();
        s.zoom_in();
        let before = s.view();
        assert!(s.pointer_down(1, 0, (100.0, 100.0)));
        assert!(!s.pointer_move(1, (102.0, 100.0)));
        // pointer comes back with no button held
        assert!(s.release_if_unpressed(1, 0));
        assert!(!s.pointer_move(1, (160.0, 100.0)));
        assert_eq!(s.view(), before);
        assert!(!s.is_dragging());
        assert_eq!(s.cursor(), "grab");
        assert!(s.accept_click("11010", Some(1)));
    }

    #[test]
    fn held_button_or_other_pointer_keeps_gesture() {
        let mut s = zoomable();
        s.pointer_down(1, 0, (0.0, 0.0));
        assert!(!s.release_if_unpressed(1, 1));
        assert!(!s.release_if_unpressed(2, 0));
        assert!(s.pointer_move(1, (20.0, 0.0)));
        assert!(s.is_dragging());
    }
}
