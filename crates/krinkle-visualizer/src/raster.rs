//! Anti-aliased raster surface backed by tiny-skia.
//!
//! Polygon outlines go through a lyon path first so closed loops keep their
//! close event, then get converted into a tiny-skia path for filling and
//! stroking. Labels are rasterized with rusttype and blended into the
//! premultiplied pixmap by hand since tiny-skia has no text support.

use std::path::Path as FsPath;

use image::{Rgb, RgbImage};
use krinkle_tiling::{Point, Rgba};
use lyon::math::point as lyon_point;
use lyon::path::{Event, Path as LyonPath};
use rusttype::{point as rt_point, Scale};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

use crate::error::RenderError;
use crate::font_manager;
use crate::surface::DrawSurface;
use crate::viewport::ViewTransform;

fn to_color(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn paint_for(c: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_color(c));
    paint.anti_alias = true;
    paint
}

/// Closed lyon path through `points`; `None` for an empty slice.
pub fn polygon_path(points: &[Point]) -> Option<LyonPath> {
    let (first, rest) = points.split_first()?;
    let mut builder = LyonPath::builder();
    builder.begin(lyon_point(first.x as f32, first.y as f32));
    for p in rest {
        builder.line_to(lyon_point(p.x as f32, p.y as f32));
    }
    builder.close();
    Some(builder.build())
}

/// Converts lyon path events into a tiny-skia path.
pub fn to_skia_path(path: &LyonPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => pb.move_to(at.x, at.y),
            Event::Line { to, .. } => pb.line_to(to.x, to.y),
            Event::Quadratic { ctrl, to, .. } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

/// Raster surface that renders into an RGBA pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    view: ViewTransform,
    font_family: String,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation { width, height })?;
        Ok(Self {
            pixmap,
            view: ViewTransform::IDENTITY,
            font_family: font_manager::DEFAULT_FAMILY.to_string(),
        })
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    fn skia_transform(&self) -> Transform {
        let s = self.view.scale as f32;
        Transform::from_row(s, 0.0, 0.0, s, self.view.offset_x as f32, self.view.offset_y as f32)
    }

    /// Stroke of `width` world units; the view transform scales it to pixels.
    fn stroke(&self, width: f64) -> Stroke {
        Stroke {
            width: width as f32,
            ..Default::default()
        }
    }

    /// Straight-alpha color of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba::new(px.red(), px.green(), px.blue(), px.alpha()))
    }

    /// Flattens the pixmap into an RGB image, dropping alpha.
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }

    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.to_rgb_image().save(path)?;
        debug!("Wrote {}x{} PNG to {}", self.pixmap.width(), self.pixmap.height(), path.display());
        Ok(())
    }

    /// Source-over blend of one straight-alpha pixel with coverage `v`.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba, v: f32) {
        let (w, h) = (self.pixmap.width() as i32, self.pixmap.height() as i32);
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        let a = (color.a as f32 / 255.0) * v.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let idx = ((y * w + x) * 4) as usize;
        let dst = &mut self.pixmap.data_mut()[idx..idx + 4];
        let src = [color.r, color.g, color.b];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = (s as f32 * a + *d as f32 * (1.0 - a)).round() as u8;
        }
        dst[3] = (255.0 * a + dst[3] as f32 * (1.0 - a)).round() as u8;
    }
}

impl DrawSurface for PixmapSurface {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn clear(&mut self, color: Rgba) {
        self.pixmap.fill(to_color(color));
    }

    fn set_transform(&mut self, transform: ViewTransform) {
        self.view = transform;
    }

    fn fill_polygon(&mut self, path: &[Point], color: Rgba) {
        let Some(path) = polygon_path(path).as_ref().and_then(to_skia_path) else {
            return;
        };
        let transform = self.skia_transform();
        self.pixmap
            .fill_path(&path, &paint_for(color), FillRule::Winding, transform, None);
    }

    fn stroke_polygon(&mut self, path: &[Point], color: Rgba, width: f64) {
        let Some(path) = polygon_path(path).as_ref().and_then(to_skia_path) else {
            return;
        };
        let (transform, stroke) = (self.skia_transform(), self.stroke(width));
        self.pixmap
            .stroke_path(&path, &paint_for(color), &stroke, transform, None);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };
        let (transform, stroke) = (self.skia_transform(), self.stroke(width));
        self.pixmap
            .stroke_path(&path, &paint_for(color), &stroke, transform, None);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        else {
            return;
        };
        let transform = self.skia_transform();
        self.pixmap
            .fill_path(&path, &paint_for(color), FillRule::Winding, transform, None);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        else {
            return;
        };
        let (transform, stroke) = (self.skia_transform(), self.stroke(width));
        self.pixmap
            .stroke_path(&path, &paint_for(color), &stroke, transform, None);
    }

    fn draw_label(&mut self, text: &str, at: Point, size: f64, color: Rgba) {
        let Some(font) = font_manager::get_font_for(&self.font_family) else {
            return;
        };

        let scale = Scale::uniform((size * self.view.scale) as f32);
        let (cx, cy) = self.view.apply(at);
        let v_metrics = font.v_metrics(scale);

        // Measure, then lay out again centered on the anchor
        let width = font
            .layout(text, scale, rt_point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        let baseline = cy as f32 + (v_metrics.ascent + v_metrics.descent) / 2.0;
        let start = rt_point(cx as f32 - width / 2.0, baseline);

        let glyphs: Vec<_> = font.layout(text, scale, start).collect();
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    self.blend_pixel(gx as i32 + bb.min.x, gy as i32 + bb.min.y, color, v);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BACKGROUND;

    #[test]
    fn test_polygon_path_closes() {
        let path = polygon_path(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ])
        .unwrap();
        let closed = path
            .iter()
            .any(|e| matches!(e, Event::End { close: true, .. }));
        assert!(closed);
        assert!(polygon_path(&[]).is_none());
    }

    #[test]
    fn test_fill_respects_transform() {
        let mut surface = PixmapSurface::new(100, 100).unwrap();
        surface.clear(BACKGROUND);
        surface.set_transform(ViewTransform {
            scale: 2.0,
            offset_x: 50.0,
            offset_y: 50.0,
        });
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        surface.fill_polygon(&square, Rgba::opaque(255, 0, 0));

        // World (5, 5) lands on screen (60, 60)
        assert_eq!(surface.pixel(60, 60), Some(Rgba::opaque(255, 0, 0)));
        assert_eq!(surface.pixel(40, 40), Some(BACKGROUND));
        assert_eq!(surface.pixel(75, 75), Some(BACKGROUND));
    }

    #[test]
    fn test_rgb_export_drops_alpha() {
        let mut surface = PixmapSurface::new(4, 3).unwrap();
        surface.clear(Rgba::opaque(1, 2, 3));
        let img = surface.to_rgb_image();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(3, 2), &Rgb([1, 2, 3]));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            PixmapSurface::new(0, 10),
            Err(RenderError::PixmapAllocation { width: 0, height: 10 })
        ));
    }
}
