//! # Krinkle
//!
//! Explorer for Modulo Krinkle tilings: generates a prototile, a wedge or a
//! full radial tiling from integer parameters (m, k, n) and renders it on a
//! pan/zoom canvas with diagnostic overlays.
//!
//! ## Architecture
//!
//! Krinkle is organized as a workspace with multiple crates:
//!
//! 1. **krinkle-core** - Errors, constants, mode tag, frame timeline
//! 2. **krinkle-tiling** - Direction sequences, prototile, wedge and tiling generators
//! 3. **krinkle-visualizer** - Viewport, hit-testing, recording and raster surfaces
//! 4. **krinkle-settings** - JSON/TOML configuration
//! 5. **krinkle** - Application shell and command line binary
//!
//! Data flows one way: parameters go to the generator, the generator returns
//! polygons with metadata, and the renderer draws them and answers hover
//! queries. Degenerate parameter combinations are rendered with a warning
//! instead of being rejected.

pub mod app;

pub use app::{render_options, AppAction, KrinkleApp, StatusLevel, StatusMessage};

pub use krinkle_core::{GenerationError, ModeError, TilingMode};
pub use krinkle_settings::Config;
pub use krinkle_tiling::{
    generate, generate_prototile, generate_tiling, generate_wedge, GeneratedTiling, Point,
    TilePolygon, TilingParams,
};
pub use krinkle_visualizer::{
    InputEvent, PixmapSurface, RecordingSurface, RenderOptions, TilingRenderer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for results
/// - RUST_LOG environment variable support (default `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
