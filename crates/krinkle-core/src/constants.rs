//! Shared constants used by the generator and the renderer.

/// Length of one direction step in world units.
pub const UNIT_LENGTH: f64 = 100.0;

/// Offset added to the wedge index of point-reflected copies.
pub const COPY_WEDGE_OFFSET: i64 = 10_000;

/// Minimum viewport scale.
pub const MIN_SCALE: f64 = 0.1;

/// Maximum viewport scale reachable through wheel zoom.
pub const MAX_SCALE: f64 = 20.0;

/// Upper bound on the scale chosen by auto-center.
pub const AUTO_CENTER_MAX_SCALE: f64 = 5.0;

/// Padding (world units) added on each side of the content when auto-centering.
pub const AUTO_CENTER_PADDING: f64 = 50.0;

/// Scale change per unit of wheel delta.
pub const ZOOM_SENSITIVITY: f64 = 0.001;

/// Half-length of the guide axes in world units.
pub const AXIS_EXTENT: f64 = 10_000.0;

/// Default canvas size used when no window size is known.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;

/// Largest symmetry order accepted by parameter validation.
pub const MAX_SYMMETRY_ORDER: i64 = 100_000;
