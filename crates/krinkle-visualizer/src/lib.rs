//! # Krinkle Visualizer
//!
//! Pan/zoom viewport, hit-testing and drawing for generated tilings.
//! Includes the viewport state machine, a drawing surface abstraction with a
//! recording and a tiny-skia raster implementation, and the stateful
//! [`TilingRenderer`] that ties them together.

pub mod bounds;
pub mod error;
pub mod font_manager;
pub mod raster;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod viewport;

pub use bounds::Bounds;
pub use error::RenderError;
pub use raster::PixmapSurface;
pub use renderer::{wedge_label, HoverTarget, InputEvent, RenderOptions, TilingRenderer};
pub use surface::{DrawOp, DrawSurface, RecordingSurface};
pub use viewport::{ViewTransform, ViewportState};
