//! Pan/zoom transform applied to the projected map paths.
//!
//! Screen (viewBox) coordinates relate to world coordinates by
//! `screen = scale * (world + translation)`, i.e. the translation lives in
//! pre-scale world units. The SVG group is rendered with
//! `scale(k) translate(tx ty)` to match.

pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 16.0;
/// Per wheel tick. Zooming out uses the exact reciprocal.
pub const WHEEL_ZOOM_FACTOR: f64 = 1.12;
/// Per +/- button press.
pub const STEP_ZOOM_FACTOR: f64 = 1.25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Wheel up (negative `deltaY`) zooms in; anything else zooms out.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if -delta_y > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        }
    }

    fn factor(self) -> f64 {
        match self {
            ZoomDirection::In => WHEEL_ZOOM_FACTOR,
            ZoomDirection::Out => 1.0 / WHEEL_ZOOM_FACTOR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

fn clamp_scale(k: f64) -> f64 {
    k.clamp(MIN_SCALE, MAX_SCALE)
}

impl ViewState {
    /// Zoom by one wheel tick keeping the point under `(cx, cy)` fixed.
    pub fn zoom_at(&mut self, cx: f64, cy: f64, dir: ZoomDirection) -> ViewState {
        let k0 = self.scale;
        let k1 = clamp_scale(k0 * dir.factor());
        let d = 1.0 / k1 - 1.0 / k0;
        self.tx += cx * d;
        self.ty += cy * d;
        self.scale = k1;
        *self
    }

    /// Pan by a client-space delta; divided by scale so the map follows the pointer 1:1.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> ViewState {
        self.tx += dx / self.scale;
        self.ty += dy / self.scale;
        *self
    }

    pub fn zoom_in_step(&mut self) -> ViewState {
        self.scale = clamp_scale(self.scale * STEP_ZOOM_FACTOR);
        *self
    }

    pub fn zoom_out_step(&mut self) -> ViewState {
        self.scale = clamp_scale(self.scale / STEP_ZOOM_FACTOR);
        // at scale 1 any leftover pan is meaningless
        if self.scale == MIN_SCALE {
            self.tx = 0.0;
            self.ty = 0.0;
        }
        *self
    }

    pub fn reset(&mut self) -> ViewState {
        *self = ViewState::default();
        *self
    }

    #[cfg(test)]
    pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (self.scale * (x + self.tx), self.scale * (y + self.ty))
    }

    #[cfg(test)]
    pub fn screen_to_world(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.scale - self.tx, y / self.scale - self.ty)
    }

    /// Value for the SVG `transform` attribute of the map group.
    pub fn svg_transform(&self) -> String {
        format!("scale({}) translate({} {})", self.scale, self.tx, self.ty)
    }

    /// Short zoom badge, e.g. `x1.3`.
    pub fn scale_label(&self) -> String {
        let rounded = (self.scale * 10.0).round() / 10.0;
        format!("x{}", rounded)
    }
}

/// ViewBox size for a container `width` px wide: at least 420 wide, height
/// 72% of the width kept within 520..=760.
pub fn layout_size(width: f64) -> (f64, f64) {
    let w = width.max(420.0);
    let h = (width * 0.72).clamp(520.0, 760.0);
    (w, h)
}

/// Screen-space rectangle of the rendered `<svg>` element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a client (page) point into viewBox coordinates, assuming the default
/// `xMidYMid meet` aspect handling.
pub fn client_to_viewbox(
    client_x: f64,
    client_y: f64,
    rect: ClientRect,
    viewbox_w: f64,
    viewbox_h: f64,
) -> (f64, f64) {
    if viewbox_w <= 0.0 || viewbox_h <= 0.0 {
        return (0.0, 0.0);
    }
    let s = (rect.width / viewbox_w).min(rect.height / viewbox_h);
    if !(s > 0.0) {
        return (0.0, 0.0);
    }
    let off_x = (rect.width - viewbox_w * s) * 0.5;
    let off_y = (rect.height - viewbox_h * s) * 0.5;
    (
        (client_x - rect.left - off_x) / s,
        (client_y - rect.top - off_y) / s,
    )
}
