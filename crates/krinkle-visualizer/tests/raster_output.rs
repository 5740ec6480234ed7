//! Raster rendering end to end

use krinkle_core::TilingMode;
use krinkle_tiling::palette::PROTOTILE_FILL;
use krinkle_tiling::{generate_prototile, generate_tiling, Point, TileMeta, TilePolygon};
use krinkle_visualizer::{style, PixmapSurface, RenderOptions, TilingRenderer};
use tempfile::TempDir;

#[test]
fn test_tile_renders_fill_over_background() {
    let tile = TilePolygon::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ],
        PROTOTILE_FILL,
        None,
        TileMeta::default(),
    );
    let mut renderer = TilingRenderer::new(400.0, 300.0);
    renderer.set_display_data(vec![tile], TilingMode::Prototile);
    renderer.set_options(RenderOptions {
        show_edges: false,
        ..RenderOptions::default()
    });
    renderer.auto_center();

    let mut surface = PixmapSurface::new(400, 300).unwrap();
    renderer.draw(&mut surface);

    assert_eq!(surface.pixel(2, 2), Some(style::BACKGROUND));
    let (cx, cy) = renderer.viewport().world_to_screen(Point::new(50.0, 50.0));
    let inside = surface.pixel(cx as u32, cy as u32).unwrap();
    assert_ne!(inside, style::BACKGROUND);
    // Translucent blue over near-black leans blue
    assert!(inside.b > inside.r);
}

#[test]
fn test_generated_prototile_is_filled() {
    let mut renderer = TilingRenderer::new(400.0, 300.0);
    renderer.set_display_data(generate_prototile(2, 5, 10), TilingMode::Prototile);
    renderer.set_options(RenderOptions {
        show_edges: false,
        ..RenderOptions::default()
    });
    renderer.auto_center();

    let mut surface = PixmapSurface::new(400, 300).unwrap();
    renderer.draw(&mut surface);

    let (cx, cy) = renderer.viewport().world_to_screen(Point::new(0.0, 50.0));
    let inside = surface.pixel(cx as u32, cy as u32).unwrap();
    assert_ne!(inside, style::BACKGROUND);
    assert!(inside.b > inside.r);
}

#[test]
fn test_tiling_png_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiling.png");

    let mut renderer = TilingRenderer::new(320.0, 240.0);
    renderer.set_display_data(generate_tiling(2, 5, 10, 3, false), TilingMode::Tiling);
    renderer.auto_center();

    let mut surface = PixmapSurface::new(320, 240).unwrap();
    renderer.draw(&mut surface);
    surface.save_png(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (320, 240));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let surface = PixmapSurface::new(8, 8).unwrap();
    assert!(surface
        .save_png(dir.path().join("missing").join("out.png"))
        .is_err());
}
