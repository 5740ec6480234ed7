//! Colors and sizes used by the renderer.
//!
//! Sizes are in device pixels; the renderer divides them by the current
//! scale so they stay constant on screen.

use krinkle_tiling::Rgba;

pub const BACKGROUND: Rgba = Rgba::opaque(13, 17, 23);
pub const AXIS: Rgba = Rgba::opaque(48, 54, 61);
pub const LABEL: Rgba = Rgba::opaque(255, 255, 255);
pub const START_MARKER: Rgba = Rgba::opaque(255, 77, 77);
pub const END_MARKER: Rgba = Rgba::opaque(77, 148, 255);
pub const MARKER_OUTLINE: Rgba = Rgba::opaque(255, 255, 255);

/// Fill for polygons flagged with a short period.
pub const SHORT_PERIOD_FILL: Rgba = Rgba::new(255, 107, 107, 115);

/// Hover overlay for tiles in the hovered wedge.
pub const HIGHLIGHT_WEDGE: Rgba = Rgba::new(255, 235, 59, 102);
/// Hover overlay for tiles at the hovered depth.
pub const HIGHLIGHT_DEPTH: Rgba = Rgba::new(255, 0, 255, 77);

pub const AXIS_WIDTH: f64 = 1.0;
pub const STROKE_WIDTH: f64 = 2.0;
pub const MARKER_RADIUS: f64 = 6.0;
pub const MARKER_OUTLINE_WIDTH: f64 = 1.0;
pub const LABEL_SIZE: f64 = 14.0;
