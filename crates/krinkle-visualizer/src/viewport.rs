//! Viewport state and coordinate transformation for the tiling canvas.
//!
//! World coordinates map to screen pixels by scaling first, then translating
//! by the view offset:
//!
//! ```text
//! screen_x = world_x * scale + offset_x
//! screen_y = world_y * scale + offset_y
//! ```
//!
//! Screen Y grows downward and world Y is not flipped, so the rendered
//! tiling matches the canvas convention the generator was designed against.

use std::fmt;

use krinkle_core::constants::{
    AUTO_CENTER_MAX_SCALE, AUTO_CENTER_PADDING, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
    MAX_SCALE, MIN_SCALE, ZOOM_SENSITIVITY,
};
use krinkle_tiling::{Point, TilePolygon};
use tracing::trace;

use crate::bounds::Bounds;

/// Affine world-to-screen transform: uniform scale followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn apply(&self, p: Point) -> (f64, f64) {
        (
            p.x * self.scale + self.offset_x,
            p.y * self.scale + self.offset_y,
        )
    }

    pub fn invert(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.offset_x) / self.scale,
            (screen_y - self.offset_y) / self.scale,
        )
    }
}

/// Pan/zoom state owned by the renderer.
#[derive(Debug, Clone)]
pub struct ViewportState {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    is_dragging: bool,
    last_x: f64,
    last_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    zoom_sensitivity: f64,
}

impl ViewportState {
    /// Creates a viewport with the world origin at the canvas center.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            scale: 1.0,
            offset_x: canvas_width / 2.0,
            offset_y: canvas_height / 2.0,
            is_dragging: false,
            last_x: 0.0,
            last_y: 0.0,
            canvas_width,
            canvas_height,
            zoom_sensitivity: ZOOM_SENSITIVITY,
        }
    }

    pub fn with_zoom_sensitivity(mut self, sensitivity: f64) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
        }
    }

    /// Starts a drag at the given screen position.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.is_dragging = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Pans by the pointer delta while dragging. Returns `true` if the view moved.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.is_dragging {
            return false;
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.offset_x += dx;
        self.offset_y += dy;
        self.last_x = x;
        self.last_y = y;
        trace!("Pan by ({:.1}, {:.1}) -> offset ({:.1}, {:.1})", dx, dy, self.offset_x, self.offset_y);
        true
    }

    pub fn pointer_up(&mut self) {
        self.is_dragging = false;
    }

    /// Applies a wheel step. The world point at the viewport center stays fixed.
    ///
    /// Returns `true` if the scale changed.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        let new_scale = (self.scale - delta_y * self.zoom_sensitivity).clamp(MIN_SCALE, MAX_SCALE);
        if new_scale == self.scale {
            return false;
        }

        let (cx, cy) = (self.canvas_width / 2.0, self.canvas_height / 2.0);
        let anchor = self.screen_to_world(cx, cy);
        self.scale = new_scale;
        self.offset_x = cx - anchor.x * new_scale;
        self.offset_y = cy - anchor.y * new_scale;
        trace!("Zoom to {:.3}", new_scale);
        true
    }

    /// Stores the new canvas size and recenters the origin; scale is kept.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
        self.offset_x = width / 2.0;
        self.offset_y = height / 2.0;
    }

    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> Point {
        self.transform().invert(screen_x, screen_y)
    }

    pub fn world_to_screen(&self, p: Point) -> (f64, f64) {
        self.transform().apply(p)
    }

    /// Centers the viewport on a world coordinate at the current scale.
    pub fn center_on(&mut self, p: Point) {
        self.offset_x = self.canvas_width / 2.0 - p.x * self.scale;
        self.offset_y = self.canvas_height / 2.0 - p.y * self.scale;
    }

    /// Frames `polygons`: their bounding box plus padding is fitted to the
    /// canvas, with the scale held between [`MIN_SCALE`] and [`AUTO_CENTER_MAX_SCALE`].
    ///
    /// Returns `false` (state untouched) when there is nothing to frame.
    pub fn auto_center<'a>(&mut self, polygons: impl IntoIterator<Item = &'a TilePolygon>) -> bool {
        let bounds = Bounds::from_polygons(polygons);
        if !bounds.is_valid() {
            return false;
        }

        let target_w = bounds.width() + AUTO_CENTER_PADDING * 2.0;
        let target_h = bounds.height() + AUTO_CENTER_PADDING * 2.0;
        let scale_x = self.canvas_width / target_w;
        let scale_y = self.canvas_height / target_h;

        self.scale = scale_x.min(scale_y).clamp(MIN_SCALE, AUTO_CENTER_MAX_SCALE);
        self.center_on(bounds.center());
        trace!("Auto-center: scale {:.3}, offset ({:.1}, {:.1})", self.scale, self.offset_x, self.offset_y);
        true
    }
}

impl fmt::Display for ViewportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Offset: ({:.1}, {:.1})",
            self.scale, self.offset_x, self.offset_y
        )
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH as f64, DEFAULT_CANVAS_HEIGHT as f64)
    }
}
