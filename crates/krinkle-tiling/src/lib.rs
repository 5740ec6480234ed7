//! # Krinkle Tiling
//!
//! Generators for Modulo Krinkle tilings: a prototile built from two
//! remainder direction sequences, a triangular wedge of prototiles and a
//! radial tiling assembled by front tracking.
//!
//! ## Architecture
//!
//! ```text
//! TilingParams ──(n)──> Prototile ──> Wedge ──> Tiling
//!                          │            │          └── offset: point-reflected copies
//!                          │            └── lattice basis (d0, d1), cyclic colours
//!                          └── DirectionSequences (lower / upper)
//! ```
//!
//! Every stage returns plain [`TilePolygon`] records. Degenerate parameter
//! combinations are not errors: they surface as `has_short_period` and
//! `closure_error` metadata so callers can render them with a warning.
//!
//! ## Usage
//!
//! ```rust
//! use krinkle_core::TilingMode;
//! use krinkle_tiling::{generate, TilingParams};
//!
//! let params = TilingParams::new(4, 1, 1).with_rows(2);
//! let result = generate(TilingMode::Tiling, &params).unwrap();
//! assert_eq!(result.polygons.len(), 12);
//! ```

pub mod generator;
pub mod geometry;
pub mod palette;
pub mod params;
pub mod polygon;
pub mod prototile;
pub mod sequence;
pub mod tiling;
pub mod wedge;

pub use generator::{generate, GeneratedTiling};
pub use geometry::{direction_vector, Point, Rgba};
pub use params::TilingParams;
pub use polygon::{TileMeta, TilePolygon};
pub use prototile::{generate_prototile, Prototile};
pub use sequence::DirectionSequences;
pub use tiling::{generate_tiling, Front};
pub use wedge::{generate_wedge, wedge_tile_count};
