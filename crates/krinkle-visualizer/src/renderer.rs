//! Stateful tiling renderer.
//!
//! Owns the polygon list, the viewport and the hover identity. Drawing goes
//! through a [`DrawSurface`] in three passes:
//!
//! - base: background, guide axes, polygon fills and strokes
//! - highlight: hovered depth, then hovered wedge (tiling mode only)
//! - overlay: edge indices and start/end markers (prototile mode), tile and
//!   wedge labels (wedge and tiling modes)

use std::collections::BTreeMap;

use krinkle_core::constants::{AXIS_EXTENT, COPY_WEDGE_OFFSET};
use krinkle_core::TilingMode;
use krinkle_tiling::{Point, TilePolygon};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::style;
use crate::surface::DrawSurface;
use crate::viewport::ViewportState;

/// Overlay visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Edge indices and start/end markers (prototile mode)
    pub show_edges: bool,
    pub show_wedge_labels: bool,
    pub show_tile_labels: bool,
    /// Fill short-period polygons with the warning color
    pub warn_short_period: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_edges: true,
            show_wedge_labels: false,
            show_tile_labels: false,
            warn_short_period: true,
        }
    }
}

/// Identity of the polygon under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTarget {
    pub wedge_index: Option<i64>,
    /// Depth within the wedge
    pub row: Option<usize>,
}

impl HoverTarget {
    fn of(poly: &TilePolygon) -> Self {
        Self {
            wedge_index: poly.meta.wedge_index,
            row: poly.meta.row,
        }
    }
}

/// Pointer and window input, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    Wheel { delta_y: f64 },
    Resize { width: f64, height: f64 },
}

/// Label text for a wedge; point-reflected copies get a trailing prime.
pub fn wedge_label(wedge_index: i64) -> String {
    if wedge_index >= COPY_WEDGE_OFFSET {
        format!("{}'", wedge_index - COPY_WEDGE_OFFSET)
    } else {
        wedge_index.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct TilingRenderer {
    viewport: ViewportState,
    polygons: Vec<TilePolygon>,
    mode: TilingMode,
    options: RenderOptions,
    hover: Option<HoverTarget>,
}

impl TilingRenderer {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self::with_viewport(ViewportState::new(canvas_width, canvas_height))
    }

    pub fn with_viewport(viewport: ViewportState) -> Self {
        Self {
            viewport,
            polygons: Vec::new(),
            mode: TilingMode::default(),
            options: RenderOptions::default(),
            hover: None,
        }
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    pub fn polygons(&self) -> &[TilePolygon] {
        &self.polygons
    }

    pub fn mode(&self) -> TilingMode {
        self.mode
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn hover(&self) -> Option<HoverTarget> {
        self.hover
    }

    /// Replaces the displayed polygons. The previous set is dropped and any
    /// hover identity is cleared.
    pub fn set_display_data(&mut self, polygons: Vec<TilePolygon>, mode: TilingMode) {
        debug!("Displaying {} polygons in {} mode", polygons.len(), mode);
        self.polygons = polygons;
        self.mode = mode;
        self.hover = None;
    }

    /// Frames every displayed polygon. Returns `false` if there is nothing to frame.
    pub fn auto_center(&mut self) -> bool {
        self.viewport.auto_center(&self.polygons)
    }

    /// Topmost polygon containing the screen point.
    pub fn hit_test(&self, screen_x: f64, screen_y: f64) -> Option<&TilePolygon> {
        let p = self.viewport.screen_to_world(screen_x, screen_y);
        self.polygons.iter().rev().find(|poly| poly.contains_point(p))
    }

    /// Updates the hover identity from a pointer position. Only tiling mode
    /// tracks hover. Returns `true` if the identity changed.
    pub fn update_hover(&mut self, screen_x: f64, screen_y: f64) -> bool {
        let target = if self.mode == TilingMode::Tiling {
            self.hit_test(screen_x, screen_y).map(HoverTarget::of)
        } else {
            None
        };

        if target == self.hover {
            return false;
        }
        trace!("Hover {:?} -> {:?}", self.hover, target);
        self.hover = target;
        true
    }

    /// Routes an input event. Returns `true` if a redraw is needed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.viewport.pointer_down(x, y);
                false
            }
            InputEvent::PointerMove { x, y } => {
                if self.viewport.is_dragging() {
                    self.viewport.pointer_move(x, y)
                } else {
                    self.update_hover(x, y)
                }
            }
            InputEvent::PointerUp => {
                self.viewport.pointer_up();
                false
            }
            InputEvent::Wheel { delta_y } => self.viewport.wheel(delta_y),
            InputEvent::Resize { width, height } => {
                self.viewport.resize(width, height);
                true
            }
        }
    }

    pub fn draw(&self, surface: &mut impl DrawSurface) {
        let scale = self.viewport.scale();

        surface.clear(style::BACKGROUND);
        surface.set_transform(self.viewport.transform());

        let axis_width = style::AXIS_WIDTH / scale;
        surface.stroke_line(
            Point::new(-AXIS_EXTENT, 0.0),
            Point::new(AXIS_EXTENT, 0.0),
            style::AXIS,
            axis_width,
        );
        surface.stroke_line(
            Point::new(0.0, -AXIS_EXTENT),
            Point::new(0.0, AXIS_EXTENT),
            style::AXIS,
            axis_width,
        );

        let stroke_width = style::STROKE_WIDTH / scale;
        for poly in self.visible() {
            let fill = if self.options.warn_short_period && poly.meta.has_short_period {
                style::SHORT_PERIOD_FILL
            } else {
                poly.fill
            };
            surface.fill_polygon(&poly.path, fill);
            if let Some(stroke) = poly.stroke {
                surface.stroke_polygon(&poly.path, stroke, stroke_width);
            }
        }

        self.draw_highlights(surface);
        self.draw_overlays(surface);
    }

    fn visible(&self) -> impl Iterator<Item = &TilePolygon> {
        self.polygons.iter().filter(|p| !p.is_empty())
    }

    fn draw_highlights(&self, surface: &mut impl DrawSurface) {
        let Some(hover) = self.hover.filter(|_| self.mode == TilingMode::Tiling) else {
            return;
        };

        if let Some(row) = hover.row {
            for poly in self.visible().filter(|p| p.meta.row == Some(row)) {
                surface.fill_polygon(&poly.path, style::HIGHLIGHT_DEPTH);
            }
        }
        if let Some(wedge) = hover.wedge_index {
            for poly in self.visible().filter(|p| p.meta.wedge_index == Some(wedge)) {
                surface.fill_polygon(&poly.path, style::HIGHLIGHT_WEDGE);
            }
        }
    }

    fn draw_overlays(&self, surface: &mut impl DrawSurface) {
        let scale = self.viewport.scale();
        let label_size = style::LABEL_SIZE / scale;

        match self.mode {
            TilingMode::Prototile if self.options.show_edges => {
                let radius = style::MARKER_RADIUS / scale;
                let outline = style::MARKER_OUTLINE_WIDTH / scale;
                for poly in self.visible() {
                    for (i, a, b) in poly.edges() {
                        surface.draw_label(&i.to_string(), a.midpoint(&b), label_size, style::LABEL);
                    }
                    let markers = [
                        (poly.path[0], style::START_MARKER),
                        (poly.path[poly.path.len() - 1], style::END_MARKER),
                    ];
                    for (at, color) in markers {
                        surface.fill_circle(at, radius, color);
                        surface.stroke_circle(at, radius, style::MARKER_OUTLINE, outline);
                    }
                }
            }
            TilingMode::Wedge | TilingMode::Tiling => {
                if self.options.show_tile_labels {
                    for poly in self.visible() {
                        if let (Some(index), Some(at)) = (poly.meta.tile_index, poly.centroid()) {
                            surface.draw_label(&index.to_string(), at, label_size, style::LABEL);
                        }
                    }
                }
                if self.options.show_wedge_labels {
                    for (wedge, at) in self.wedge_centers() {
                        surface.draw_label(&wedge_label(wedge), at, label_size, style::LABEL);
                    }
                }
            }
            TilingMode::Prototile => {}
        }
    }

    /// Mean tile centroid per wedge, ordered by wedge index.
    pub fn wedge_centers(&self) -> Vec<(i64, Point)> {
        let mut sums: BTreeMap<i64, (Point, usize)> = BTreeMap::new();
        for poly in self.visible() {
            if let (Some(wedge), Some(c)) = (poly.meta.wedge_index, poly.centroid()) {
                let entry = sums.entry(wedge).or_insert((Point::ORIGIN, 0));
                entry.0 += c;
                entry.1 += 1;
            }
        }
        sums.into_iter()
            .map(|(wedge, (sum, count))| (wedge, sum * (1.0 / count as f64)))
            .collect()
    }
}

impl Default for TilingRenderer {
    fn default() -> Self {
        Self::with_viewport(ViewportState::default())
    }
}
