//! Drawing surface abstraction.
//!
//! The renderer issues world-space drawing calls under a [`ViewTransform`];
//! a surface decides how to turn them into pixels. [`RecordingSurface`] keeps
//! the calls as data instead.

use krinkle_tiling::{Point, Rgba};

use crate::viewport::ViewTransform;

/// Target of a render pass. Coordinates and widths are in world units
/// under the most recent [`DrawSurface::set_transform`].
pub trait DrawSurface {
    /// Surface size in device pixels.
    fn size(&self) -> (u32, u32);

    /// Fills the whole surface, ignoring the transform.
    fn clear(&mut self, color: Rgba);

    fn set_transform(&mut self, transform: ViewTransform);

    /// Fills a closed path (last point joins the first).
    fn fill_polygon(&mut self, path: &[Point], color: Rgba);

    /// Strokes a closed path.
    fn stroke_polygon(&mut self, path: &[Point], color: Rgba, width: f64);

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64);

    /// Draws `text` centered on `at`, `size` world units tall.
    fn draw_label(&mut self, text: &str, at: Point, size: f64, color: Rgba);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rgba),
    SetTransform(ViewTransform),
    FillPolygon {
        path: Vec<Point>,
        color: Rgba,
    },
    StrokePolygon {
        path: Vec<Point>,
        color: Rgba,
        width: f64,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Rgba,
        width: f64,
    },
    Label {
        text: String,
        at: Point,
        size: f64,
        color: Rgba,
    },
}

/// Surface that records every call, for inspecting render passes in tests
/// and tooling without rasterizing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Text of every label drawn, in draw order.
    pub fn labels(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Fill colors of every polygon fill, in draw order.
    pub fn fills(&self) -> Vec<Rgba> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillPolygon { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn set_transform(&mut self, transform: ViewTransform) {
        self.ops.push(DrawOp::SetTransform(transform));
    }

    fn fill_polygon(&mut self, path: &[Point], color: Rgba) {
        self.ops.push(DrawOp::FillPolygon {
            path: path.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, path: &[Point], color: Rgba, width: f64) {
        self.ops.push(DrawOp::StrokePolygon {
            path: path.to_vec(),
            color,
            width,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.ops.push(DrawOp::StrokeLine {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn draw_label(&mut self, text: &str, at: Point, size: f64, color: Rgba) {
        self.ops.push(DrawOp::Label {
            text: text.to_string(),
            at,
            size,
            color,
        });
    }
}
